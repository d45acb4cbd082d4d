use serde::{Deserialize, Serialize};

/// Tuning data for the speaker-tag validator.
///
/// These lists are configuration, not logic: they can be loaded from a JSON
/// file to adapt the heuristic to a particular show or transcript style
/// without touching the state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerConfig {
    /// Maximum length of a plausible speaker label, in characters
    pub max_name_length: usize,
    /// Maximum number of words after connector normalization
    pub max_name_words: usize,
    /// Known false positives, matched case-insensitively against the whole
    /// label (narration fragments, credits, etc.)
    pub exclusion_phrases: Vec<String>,
    /// Closed-class words that start sentences, not names; a label whose
    /// first word is one of these is rejected unless the label is all-caps
    pub sentence_starters: Vec<String>,
}

impl Default for SpeakerConfig {
    fn default() -> Self {
        Self {
            max_name_length: 35,
            max_name_words: 4,
            exclusion_phrases: [
                "previously on",
                "next time on",
                "coming up",
                "in this episode",
                "subtitles by",
                "captions by",
                "translated by",
                "synced and corrected by",
                "episode",
                "warning",
                "note",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            sentence_starters: [
                "the", "a", "an", "and", "but", "or", "nor", "so", "if", "then", "it", "its",
                "he", "she", "they", "we", "you", "i", "this", "that", "these", "those", "there",
                "here", "what", "who", "when", "where", "why", "how", "now", "well", "oh", "yes",
                "no", "not", "to", "in", "on", "at", "by", "of", "for", "with", "from", "as",
                "is", "are", "was", "were", "be", "do", "did", "my", "your", "his", "her", "our",
                "their", "all", "some", "one",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl SpeakerConfig {
    /// Plausibility verdict for a candidate speaker label (trailing colon
    /// already removed). Checks run in order and short-circuit on the first
    /// rejection.
    ///
    /// Tuned for precision over recall: a rejected real tag merely merges
    /// dialogue under the previous speaker, while an accepted non-tag
    /// misattributes and fragments it.
    pub fn is_valid_speaker_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }

        // Both sides lowercased so config entries match regardless of case
        let lower = tag.to_lowercase();
        if self
            .exclusion_phrases
            .iter()
            .any(|p| p.to_lowercase() == lower)
        {
            return false;
        }

        if tag.chars().count() > self.max_name_length {
            return false;
        }

        // Multi-person labels like "Ethan & Leo" count as one unit: drop
        // the connectors before counting words.
        let normalized = normalize_connectors(tag);
        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.is_empty() {
            return false;
        }
        if words.len() > self.max_name_words {
            return false;
        }

        let first_word = words[0];
        if self
            .sentence_starters
            .iter()
            .any(|s| *s == first_word.to_lowercase())
            && !is_all_uppercase(tag)
        {
            return false;
        }

        if first_word.chars().next().is_some_and(|c| c.is_lowercase()) {
            return false;
        }

        true
    }
}

/// Replace " and "/"&" connectors with spaces so joint labels are counted
/// as a single unit.
fn normalize_connectors(tag: &str) -> String {
    let mut normalized = tag.replace(" and ", " ").replace('&', " ");
    if let Some(stripped) = normalized.strip_suffix(" and") {
        normalized = stripped.to_string();
    }
    normalized
}

/// All-caps role labels ("HOST", "NARRATOR") bypass the sentence-starter
/// rejection.
fn is_all_uppercase(tag: &str) -> bool {
    tag.chars().any(|c| c.is_alphabetic()) && !tag.chars().any(|c| c.is_lowercase())
}
