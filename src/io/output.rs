use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{Prompt, PromptRole};

/// Machine-readable output format
#[derive(Debug, Clone, Serialize)]
pub struct MachineOutput {
    /// Unique identifier for this run
    pub run_id: String,
    /// RFC 3339 generation time
    pub generated_at: String,
    /// Segment budget in characters
    pub budget: usize,
    pub total_parts: usize,
    /// Prompts in the order they should be sent
    pub prompts: Vec<MachinePrompt>,
    /// Metadata about the processing
    pub metadata: RunMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachinePrompt {
    /// 1-based part number
    pub part: usize,
    pub total: usize,
    pub role: PromptRole,
    pub prompt: String,
    pub segment: String,
    pub segment_chars: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub raw_chars: usize,
    pub normalized_chars: usize,
    pub timestamps_removed: usize,
    pub oversized_segments: usize,
}

impl MachineOutput {
    /// Create from composed prompts
    pub fn from_prompts(prompts: &[Prompt], budget: usize, metadata: RunMetadata) -> Self {
        let prompts: Vec<MachinePrompt> = prompts
            .iter()
            .map(|p| MachinePrompt {
                part: p.part_number(),
                total: p.total,
                role: p.role,
                prompt: p.text.clone(),
                segment: p.segment_text.clone(),
                segment_chars: p.segment_text.chars().count(),
            })
            .collect();

        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            budget,
            total_parts: prompts.len(),
            prompts,
            metadata,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable rendering: one step per prompt plus its cleaned text
pub struct HumanOutput<'a> {
    prompts: &'a [Prompt],
}

impl<'a> HumanOutput<'a> {
    pub fn new(prompts: &'a [Prompt]) -> Self {
        Self { prompts }
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Transcript split into {} parts.\n\n",
            self.prompts.len()
        ));

        for prompt in self.prompts {
            output.push_str(&format!(
                "=== STEP {}/{}: copy this prompt ===\n\n",
                prompt.part_number(),
                prompt.total
            ));
            output.push_str(&prompt.text);
            output.push('\n');

            output.push_str(&format!(
                "--- Cleaned text for part {} ---\n",
                prompt.part_number()
            ));
            output.push_str(&wrap_text(&prompt.segment_text, 80));
            output.push_str("\n\n");
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

/// Write one `part_NN.txt` per prompt into `dir`
pub fn write_parts(prompts: &[Prompt], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {:?}", dir))?;

    let width = prompts.len().to_string().len().max(2);
    let mut paths = Vec::with_capacity(prompts.len());

    for prompt in prompts {
        let path = dir.join(format!("part_{:0width$}.txt", prompt.part_number(), width = width));
        std::fs::write(&path, &prompt.text)
            .with_context(|| format!("Failed to write file: {:?}", path))?;
        paths.push(path);
    }

    Ok(paths)
}

/// Wrap text at approximately the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len + word_len + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word_len;
    }

    result
}
