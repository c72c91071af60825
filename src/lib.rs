//! transcript-splitter - clean long transcripts and cut them into prompts
//! for chapter-by-chapter generation

pub mod io;
pub mod llm;
pub mod models;
pub mod stages;

use std::path::PathBuf;

use thiserror::Error;

pub use io::{load_instructions, read_transcript, HumanOutput, MachineOutput, RunMetadata};
pub use llm::{compose, DEFAULT_INSTRUCTIONS};
pub use models::{Prompt, PromptRole, Segment, SegmentConfig, SegmentSet};
pub use stages::{
    execute_stage1, execute_stage2, execute_stage3, normalize, normalize_with_stats, segment,
    NormalizationResult, Stage3Config, Stage3Result,
};

/// Main error type for transcript-splitter
#[derive(Error, Debug)]
pub enum SplitterError {
    #[error("Budget {budget} is outside the supported range {min}..={max}")]
    InvalidBudget { budget: usize, min: usize, max: usize },

    #[error("Instructions file is empty: {0:?}")]
    EmptyScaffold(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SplitterError>;
