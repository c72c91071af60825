use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::llm::DEFAULT_INSTRUCTIONS;
use crate::SplitterError;

/// Read the raw transcript from a file, or from stdin when no path is given
pub fn read_transcript(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript: {:?}", path)),
        None => read_transcript_from(std::io::stdin().lock())
            .context("Failed to read transcript from stdin"),
    }
}

/// Read the raw transcript from any reader
pub fn read_transcript_from<R: Read>(mut reader: R) -> crate::Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Load the prompt scaffold, falling back to the built-in one
pub fn load_instructions(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        return Ok(DEFAULT_INSTRUCTIONS.to_string());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read instructions: {:?}", path))?;
    if content.trim().is_empty() {
        return Err(SplitterError::EmptyScaffold(path.to_path_buf()).into());
    }

    Ok(content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_transcript_from_reader() {
        let raw = "Bonjour (2:58:54) le patient";
        let content = read_transcript_from(raw.as_bytes()).unwrap();
        assert_eq!(content, raw);
    }

    #[test]
    fn test_read_transcript_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.txt");
        std::fs::write(&path, "une fièvre").unwrap();

        assert_eq!(read_transcript(Some(&path)).unwrap(), "une fièvre");
    }

    #[test]
    fn test_missing_transcript_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_transcript(Some(&dir.path().join("missing.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read transcript"));
    }

    #[test]
    fn test_default_instructions() {
        assert_eq!(load_instructions(None).unwrap(), DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn test_custom_instructions_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffold.txt");
        std::fs::write(&path, "\nROLE:\nHistory lecturer.\n\n").unwrap();

        assert_eq!(load_instructions(Some(&path)).unwrap(), "ROLE:\nHistory lecturer.");
    }

    #[test]
    fn test_blank_instructions_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffold.txt");
        std::fs::write(&path, "  \n\t").unwrap();

        let err = load_instructions(Some(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SplitterError>(),
            Some(SplitterError::EmptyScaffold(_))
        ));
    }
}
