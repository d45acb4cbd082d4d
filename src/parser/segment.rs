use once_cell::sync::Lazy;
use regex::Regex;

/// A candidate speaker tag: word characters, spaces and "&" (non-greedy),
/// followed by a colon and either a space or the end of the line. The
/// end-of-line form covers speaker-only lines like "TYLER:".
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\w\s&]+?):(?: |$)").unwrap());

/// One token of a segmented dialogue line.
///
/// `Tag` keeps the candidate text with its trailing colon so an invalid tag
/// can be reinserted into the dialogue verbatim. `Text` is everything
/// between and after tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Tag(String),
    Text(String),
}

impl Segment {
    /// The raw token text, colon included for tags.
    pub fn raw(&self) -> &str {
        match self {
            Segment::Tag(s) | Segment::Text(s) => s,
        }
    }
}

/// Split one trimmed line into an alternating sequence of candidate tags
/// and plain text, in original order. No text is lost: concatenating the
/// raw token texts reproduces the line up to the spaces that followed each
/// colon.
pub fn segment_line(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in TAG_REGEX.captures_iter(line) {
        let whole = caps.get(0).unwrap();
        let candidate = caps.get(1).unwrap().as_str();

        let interstitial = &line[cursor..whole.start()];
        if !interstitial.trim().is_empty() {
            segments.push(Segment::Text(interstitial.trim().to_string()));
        }

        // Only leading whitespace is dropped; the rest of the capture is
        // kept verbatim so an invalid tag reconstructs exactly. A bare ":"
        // is not a candidate tag.
        let tag = format!("{}:", candidate.trim_start());
        if tag.len() > 1 {
            segments.push(Segment::Tag(tag));
        } else {
            segments.push(Segment::Text(tag));
        }
        cursor = whole.end();
    }

    let rest = &line[cursor..];
    if !rest.trim().is_empty() {
        segments.push(Segment::Text(rest.trim().to_string()));
    }

    segments
}
