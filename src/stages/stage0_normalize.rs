use once_cell::sync::Lazy;
use regex::Regex;

/// Parenthesized timestamps: (H:MM), (HH:MM), (H:MM:SS), (HH:MM:SS)
static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\d{1,2}:\d{2}(?::\d{2})?\)").expect("timestamp pattern is valid")
});

/// Result of Stage 0 normalization
#[derive(Debug, Clone)]
pub struct NormalizationResult {
    /// Cleaned transcript text
    pub text: String,
    /// Number of timestamp annotations removed
    pub timestamps_removed: usize,
    /// Character length of the raw input
    pub raw_chars: usize,
    /// Character length of the cleaned text
    pub normalized_chars: usize,
}

/// Perform Stage 0: strip timestamp noise and collapse whitespace
pub fn normalize(text: &str) -> String {
    normalize_with_stats(text).text
}

/// Same as [`normalize`], also reporting what was removed
///
/// Removal repeats until nothing matches, so a timestamp formed by
/// removing a nested one (`((1:00)2:00)`) is stripped too.
pub fn normalize_with_stats(text: &str) -> NormalizationResult {
    let (stripped, timestamps_removed) = strip_timestamps(text);
    let cleaned = collapse_whitespace(&stripped);

    NormalizationResult {
        raw_chars: text.chars().count(),
        normalized_chars: cleaned.chars().count(),
        text: cleaned,
        timestamps_removed,
    }
}

fn strip_timestamps(text: &str) -> (String, usize) {
    let mut current = text.to_string();
    let mut removed = 0;

    loop {
        let found = TIMESTAMP.find_iter(&current).count();
        if found == 0 {
            return (current, removed);
        }
        removed += found;
        current = TIMESTAMP.replace_all(&current, "").into_owned();
    }
}

/// Collapse every whitespace run to one space and trim the ends
fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    collapsed
}
