use serde::{Deserialize, Serialize};

/// Which trailing instructions a prompt carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptRole {
    /// First segment: start a new document
    First,
    /// Any later segment: extend the document already started
    Continuation,
}

impl PromptRole {
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            PromptRole::First
        } else {
            PromptRole::Continuation
        }
    }
}

/// A composed prompt for one segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Zero-based segment index
    pub index: usize,
    /// Total number of segments in the run
    pub total: usize,
    pub role: PromptRole,
    /// Full prompt text handed to the downstream model
    pub text: String,
    /// The cleaned segment the prompt wraps
    pub segment_text: String,
}

impl Prompt {
    /// 1-based part number as shown to the user
    pub fn part_number(&self) -> usize {
        self.index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_for_index() {
        assert_eq!(PromptRole::for_index(0), PromptRole::First);
        assert_eq!(PromptRole::for_index(1), PromptRole::Continuation);
        assert_eq!(PromptRole::for_index(42), PromptRole::Continuation);
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&PromptRole::Continuation).unwrap();
        assert_eq!(json, "\"continuation\"");
    }
}
