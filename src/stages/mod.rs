pub mod stage0_normalize;
pub mod stage1_segment;
pub mod stage2_compose;
pub mod stage3_render;

pub use stage0_normalize::*;
pub use stage1_segment::*;
pub use stage2_compose::*;
pub use stage3_render::*;
