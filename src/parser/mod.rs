pub mod accumulator;
pub mod blocks;
pub mod markup;
pub mod segment;
pub mod speaker;

pub use accumulator::{CueAccumulator, ParserState};
pub use blocks::{Block, extract_timecodes, parse_block, split_blocks};
pub use markup::clean_markup;
pub use segment::{Segment, segment_line};
pub use speaker::SpeakerConfig;

use tracing::debug;

use crate::models::Cue;

/// Result of one parse invocation.
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// Attributed cues in transcript order
    pub cues: Vec<Cue>,
    /// Number of blocks found in the transcript
    pub blocks_total: usize,
    /// Blocks discarded for missing lines or an unparseable timecode
    pub blocks_skipped: usize,
}

/// Parse an SRT transcript into speaker-attributed cues.
///
/// One synchronous pass; all mutable state lives in a local `ParserState`,
/// so concurrent parses of independent transcripts cannot interfere.
/// Malformed blocks are skipped silently and nothing in here is fatal: an
/// unparseable transcript simply yields an empty cue list.
pub fn parse_srt(content: &str, config: &SpeakerConfig) -> ParseReport {
    let raw_blocks = split_blocks(content);
    let blocks_total = raw_blocks.len();

    let mut state = ParserState::new();
    let mut cues = Vec::new();
    let mut blocks_skipped = 0;

    for raw in raw_blocks {
        match parse_block(raw) {
            Some(block) => {
                cues.extend(CueAccumulator::process_block(&block, config, &mut state));
            }
            None => {
                debug!("skipping malformed block");
                blocks_skipped += 1;
            }
        }
    }

    ParseReport {
        cues,
        blocks_total,
        blocks_skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ParseReport {
        parse_srt(content, &SpeakerConfig::default())
    }

    #[test]
    fn test_two_block_end_to_end() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nTYLER: Hi there\n\n\
                   2\n00:00:03,000 --> 00:00:04,000\nGood to see you";
        let report = parse(srt);

        assert_eq!(report.blocks_total, 2);
        assert_eq!(report.blocks_skipped, 0);
        assert_eq!(
            report.cues,
            vec![
                Cue::new("00:00:01,000", "00:00:02,000", "TYLER", "Hi there"),
                Cue::new("00:00:03,000", "00:00:04,000", "TYLER", "Good to see you"),
            ]
        );
    }

    #[test]
    fn test_at_least_one_cue_per_valid_block() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n\
                   2\n00:00:03,000 --> 00:00:04,000\nLEO: Hi. TYLER: Hey.\n\n\
                   3\n00:00:05,000 --> 00:00:06,000\nBack again";
        let report = parse(srt);

        assert!(report.cues.len() >= 3);
    }

    #[test]
    fn test_malformed_blocks_skipped_silently() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nTYLER: Hi\n\n\
                   stray formatting\n\n\
                   3\nnot a timecode\nText\n\n\
                   4\n00:00:05,000 --> 00:00:06,000\nStill here";
        let report = parse(srt);

        assert_eq!(report.blocks_total, 4);
        assert_eq!(report.blocks_skipped, 2);
        assert_eq!(report.cues.len(), 2);
        // Skipped blocks must not disturb carry-over
        assert_eq!(report.cues[1].speaker, "TYLER");
    }

    #[test]
    fn test_empty_transcript() {
        let report = parse("");
        assert!(report.cues.is_empty());
        assert_eq!(report.blocks_total, 0);
    }

    #[test]
    fn test_parse_is_reentrant() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nTYLER: Hi\n\n\
                   2\n00:00:03,000 --> 00:00:04,000\nStill me";
        let first = parse(srt);
        let second = parse(srt);

        // No state survives between invocations
        assert_eq!(first.cues, second.cues);
    }

    #[test]
    fn test_unlabeled_transcript_is_unknown_throughout() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nNo names here\n\n\
                   2\n00:00:03,000 --> 00:00:04,000\nNone here either";
        let report = parse(srt);

        assert_eq!(report.cues.len(), 2);
        for cue in &report.cues {
            assert_eq!(cue.speaker, "Unknown");
        }
    }

    #[test]
    fn test_crlf_transcript() {
        let srt = "1\r\n00:00:01,000 --> 00:00:02,000\r\nTYLER: Hi there\r\n\r\n\
                   2\r\n00:00:03,000 --> 00:00:04,000\r\nGood to see you\r\n";
        let report = parse(srt);

        assert_eq!(report.cues.len(), 2);
        assert_eq!(report.cues[0].dialogue, "Hi there");
        assert_eq!(report.cues[1].speaker, "TYLER");
    }
}
