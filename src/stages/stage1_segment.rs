use tracing::{debug, info, warn};

use crate::models::{SegmentConfig, SegmentSet};

/// Words gathered for the segment currently being built
#[derive(Default)]
struct Accumulator<'a> {
    words: Vec<&'a str>,
    /// Sum of word lengths plus one separator per word
    accounted: usize,
}

impl<'a> Accumulator<'a> {
    fn would_overflow(&self, word_len: usize, budget: usize) -> bool {
        self.accounted + word_len + 1 > budget
    }

    fn push(&mut self, word: &'a str, word_len: usize) {
        self.words.push(word);
        self.accounted += word_len + 1;
    }

    fn close(self) -> Option<String> {
        if self.words.is_empty() {
            None
        } else {
            Some(self.words.join(" "))
        }
    }
}

/// Split text into word-aligned segments bounded by `budget` characters
///
/// Words are separated by single spaces. A word that would push the current
/// segment over budget closes it and starts the next one; a word longer than
/// the budget on its own still gets its own segment. A zero budget places
/// every word in its own segment.
pub fn segment(text: &str, budget: usize) -> Vec<String> {
    let (mut segments, tail) = text.split(' ').filter(|w| !w.is_empty()).fold(
        (Vec::<String>::new(), Accumulator::default()),
        |(mut segments, mut current), word| {
            let word_len = word.chars().count();
            if !current.words.is_empty() && current.would_overflow(word_len, budget) {
                segments.extend(std::mem::take(&mut current).close());
            }
            current.push(word, word_len);
            (segments, current)
        },
    );

    segments.extend(tail.close());
    segments
}

/// Execute Stage 1: segmentation of normalized text
pub fn execute_stage1(text: &str, config: &SegmentConfig) -> SegmentSet {
    let set = SegmentSet::from_texts(segment(text, config.budget), config.budget);

    info!(
        "Split {} characters into {} segments (budget {})",
        text.chars().count(),
        set.total(),
        config.budget
    );
    for seg in &set.segments {
        debug!(
            "Segment {}: {} chars, {} words",
            seg.index + 1,
            seg.char_len,
            seg.word_count
        );
    }
    if set.oversized_count() > 0 {
        warn!(
            "{} segments exceed the budget (single words longer than {} chars)",
            set.oversized_count(),
            config.budget
        );
    }

    set
}
