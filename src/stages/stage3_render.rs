use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::io::{write_parts, HumanOutput, MachineOutput, RunMetadata};
use crate::models::Prompt;

/// Where Stage 3 writes its outputs
#[derive(Debug, Clone, Default)]
pub struct Stage3Config {
    /// JSON file with every prompt and run metadata
    pub machine_output: Option<PathBuf>,
    /// Text file with numbered steps
    pub human_output: Option<PathBuf>,
    /// Directory receiving one prompt file per part
    pub parts_dir: Option<PathBuf>,
}

impl Stage3Config {
    /// True when no file output was requested
    pub fn is_empty(&self) -> bool {
        self.machine_output.is_none() && self.human_output.is_none() && self.parts_dir.is_none()
    }
}

/// Result of Stage 3 rendering
#[derive(Debug, Default)]
pub struct Stage3Result {
    pub machine_path: Option<PathBuf>,
    pub human_path: Option<PathBuf>,
    /// One file per part, in order
    pub part_paths: Vec<PathBuf>,
}

/// Execute Stage 3: Rendering
///
/// Produces up to three views of the composed prompts:
/// 1. Machine output: JSON with prompts, segments, and run metadata
/// 2. Human output: numbered steps with the cleaned text of each part
/// 3. Part files: one ready-to-paste prompt per file
pub fn execute_stage3(
    prompts: &[Prompt],
    budget: usize,
    metadata: RunMetadata,
    config: &Stage3Config,
) -> Result<Stage3Result> {
    let mut result = Stage3Result::default();

    if let Some(path) = &config.machine_output {
        info!("Writing machine output to {:?}", path);
        MachineOutput::from_prompts(prompts, budget, metadata).write_json(path)?;
        result.machine_path = Some(path.clone());
    }

    if let Some(path) = &config.human_output {
        info!("Writing human output to {:?}", path);
        HumanOutput::new(prompts).write_file(path)?;
        result.human_path = Some(path.clone());
    }

    if let Some(dir) = &config.parts_dir {
        info!("Writing {} part files to {:?}", prompts.len(), dir);
        result.part_paths = write_parts(prompts, dir)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SegmentSet;
    use crate::stages::execute_stage2;

    fn metadata() -> RunMetadata {
        RunMetadata {
            raw_chars: 8,
            normalized_chars: 8,
            timestamps_removed: 0,
            oversized_segments: 0,
        }
    }

    #[test]
    fn test_stage3_config_default() {
        assert!(Stage3Config::default().is_empty());
    }

    #[test]
    fn test_stage3_writes_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let set = SegmentSet::from_texts(vec!["a bb".to_string(), "ccc".to_string()], 5);
        let prompts = execute_stage2(&set, "ROLE:\nTester.");

        let config = Stage3Config {
            machine_output: Some(dir.path().join("out.json")),
            human_output: Some(dir.path().join("out.txt")),
            parts_dir: Some(dir.path().join("parts")),
        };
        let result = execute_stage3(&prompts, 5, metadata(), &config).unwrap();

        assert!(result.machine_path.unwrap().exists());
        assert!(result.human_path.unwrap().exists());
        assert_eq!(result.part_paths.len(), 2);
    }

    #[test]
    fn test_stage3_nothing_requested() {
        let result = execute_stage3(&[], 5, metadata(), &Stage3Config::default()).unwrap();
        assert!(result.machine_path.is_none());
        assert!(result.human_path.is_none());
        assert!(result.part_paths.is_empty());
    }
}
