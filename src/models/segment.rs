use serde::{Deserialize, Serialize};

use crate::{Result, SplitterError};

/// Default segment budget in characters
pub const DEFAULT_BUDGET: usize = 20_000;
/// Smallest budget accepted from the command line
pub const MIN_BUDGET: usize = 2_000;
/// Largest budget accepted from the command line
pub const MAX_BUDGET: usize = 20_000;

/// Configuration for segmentation
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// Maximum characters per segment (soft cap for single oversized words)
    pub budget: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
        }
    }
}

impl SegmentConfig {
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }

    /// Reject budgets outside the supported range
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BUDGET..=MAX_BUDGET).contains(&self.budget) {
            return Err(SplitterError::InvalidBudget {
                budget: self.budget,
                min: MIN_BUDGET,
                max: MAX_BUDGET,
            });
        }
        Ok(())
    }
}

/// A contiguous, word-aligned slice of normalized text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Zero-based position in the sequence
    pub index: usize,
    /// Segment text, words joined by single spaces
    pub text: String,
    /// Length in characters (not bytes)
    pub char_len: usize,
    /// Number of words in this segment
    pub word_count: usize,
}

impl Segment {
    pub fn new(index: usize, text: String) -> Self {
        let char_len = text.chars().count();
        let word_count = text.split(' ').filter(|w| !w.is_empty()).count();
        Self {
            index,
            text,
            char_len,
            word_count,
        }
    }

    /// A single word longer than the budget ends up alone and over the cap
    pub fn is_oversized(&self, budget: usize) -> bool {
        self.char_len > budget
    }
}

/// Ordered result of segmentation
#[derive(Debug, Clone)]
pub struct SegmentSet {
    /// Segments in transcript order
    pub segments: Vec<Segment>,
    /// Budget the segments were cut with
    pub budget: usize,
}

impl SegmentSet {
    pub fn from_texts(texts: Vec<String>, budget: usize) -> Self {
        let segments = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Segment::new(i, text))
            .collect();
        Self { segments, budget }
    }

    /// Total number of segments
    pub fn total(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.text.as_str())
    }

    /// Number of segments that exceed the budget
    pub fn oversized_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.is_oversized(self.budget))
            .count()
    }

    /// Join segments back with single spaces
    pub fn rejoin(&self) -> String {
        self.texts().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_is_valid() {
        let config = SegmentConfig::default();
        assert_eq!(config.budget, 20_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_budget_out_of_range() {
        assert!(SegmentConfig::new(1_999).validate().is_err());
        assert!(SegmentConfig::new(20_001).validate().is_err());
        assert!(SegmentConfig::new(2_000).validate().is_ok());
        assert!(SegmentConfig::new(8_000).validate().is_ok());
    }

    #[test]
    fn test_segment_counts_chars_not_bytes() {
        let segment = Segment::new(0, "une fièvre".to_string());
        assert_eq!(segment.char_len, 10);
        assert_eq!(segment.word_count, 2);
        assert!(!segment.is_oversized(10));
        assert!(segment.is_oversized(9));
    }

    #[test]
    fn test_segment_set_rejoin() {
        let set = SegmentSet::from_texts(vec!["a bb".to_string(), "ccc".to_string()], 5);
        assert_eq!(set.total(), 2);
        assert_eq!(set.segments[1].index, 1);
        assert_eq!(set.rejoin(), "a bb ccc");
        assert_eq!(set.oversized_count(), 0);
    }
}
