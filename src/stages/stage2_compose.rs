use tracing::{debug, info};

use crate::llm::compose;
use crate::models::{Prompt, PromptRole, SegmentSet};

/// Execute Stage 2: wrap every segment in its prompt scaffold
///
/// The first segment gets start-of-document instructions, every later one
/// gets continuation instructions.
pub fn execute_stage2(segments: &SegmentSet, instructions: &str) -> Vec<Prompt> {
    let total = segments.total();

    let prompts: Vec<Prompt> = segments
        .segments
        .iter()
        .map(|seg| {
            let text = compose(&seg.text, seg.index, total, instructions);
            debug!("Composed part {}/{} ({} chars)", seg.index + 1, total, text.len());
            Prompt {
                index: seg.index,
                total,
                role: PromptRole::for_index(seg.index),
                text,
                segment_text: seg.text.clone(),
            }
        })
        .collect();

    info!("Composed {} prompts", prompts.len());
    prompts
}
