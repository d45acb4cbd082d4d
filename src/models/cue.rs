use serde::{Deserialize, Serialize};

/// Fallback speaker used until a tag has been validated somewhere in the
/// transcript.
pub const UNKNOWN_SPEAKER: &str = "Unknown";

/// One attributed dialogue record.
///
/// Timestamps are kept as the verbatim `HH:MM:SS,mmm` strings from the
/// source; the parser never interprets them numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    /// Start timestamp, e.g. "00:00:01,000"
    pub start: String,
    /// End timestamp, e.g. "00:00:02,000"
    pub end: String,
    /// Attributed speaker, or "Unknown" if none was ever established
    pub speaker: String,
    /// Cleaned, whitespace-normalized dialogue text (never empty)
    pub dialogue: String,
}

impl Cue {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        speaker: impl Into<String>,
        dialogue: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            speaker: speaker.into(),
            dialogue: dialogue.into(),
        }
    }
}

/// Unique speakers in order of first appearance.
pub fn speakers_in_order(cues: &[Cue]) -> Vec<String> {
    let mut seen = Vec::new();
    for cue in cues {
        if !seen.iter().any(|s| s == &cue.speaker) {
            seen.push(cue.speaker.clone());
        }
    }
    seen
}
