pub mod prompt;
pub mod segment;

pub use prompt::*;
pub use segment::*;
