use once_cell::sync::Lazy;
use regex::Regex;

/// SRT timecode line: two HH:MM:SS,mmm timestamps joined by " --> ",
/// anchored at the start of the (trimmed) line.
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2},\d{3}) --> (\d{2}:\d{2}:\d{2},\d{3})").unwrap()
});

/// Blocks are separated by one or more blank lines (possibly containing
/// whitespace).
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// One subtitle block: the verbatim timecode pair plus the raw dialogue
/// lines that follow the index and timecode lines.
#[derive(Debug, Clone)]
pub struct Block<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub dialogue_lines: Vec<&'a str>,
}

/// Split a transcript into raw block texts.
pub fn split_blocks(content: &str) -> Vec<&str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    BLOCK_SEPARATOR_REGEX.split(trimmed).collect()
}

/// Extract the two timestamps from a block's timecode line.
///
/// The strings are returned verbatim; the parser never converts them to
/// numeric time.
pub fn extract_timecodes(time_line: &str) -> Option<(&str, &str)> {
    let caps = TIMECODE_REGEX.captures(time_line.trim())?;
    Some((
        caps.get(1).unwrap().as_str(),
        caps.get(2).unwrap().as_str(),
    ))
}

/// Interpret one raw block text.
///
/// Returns `None` for malformed blocks (fewer than three lines, or no
/// timecode match on the second line); such blocks are skipped without
/// emitting anything.
pub fn parse_block(raw: &str) -> Option<Block<'_>> {
    let lines: Vec<&str> = raw.trim().split('\n').collect();
    if lines.len() < 3 {
        return None;
    }

    let (start, end) = extract_timecodes(lines[1])?;

    Some(Block {
        start,
        end,
        dialogue_lines: lines[2..].to_vec(),
    })
}
