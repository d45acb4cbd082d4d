use tracing::debug;

use crate::models::{Cue, UNKNOWN_SPEAKER};
use crate::parser::blocks::Block;
use crate::parser::markup::clean_markup;
use crate::parser::segment::{Segment, segment_line};
use crate::parser::speaker::SpeakerConfig;

/// Mutable attribution state threaded through one parse invocation.
///
/// `last_known_speaker` is only ever updated when a cue is emitted whose
/// speaker came from a validated tag. A cue that merely inherited the
/// carry-over default never promotes that default to "confirmed", so a
/// fallback attribution in one block cannot leak forward as if it had been
/// established.
#[derive(Debug)]
pub struct ParserState {
    last_known_speaker: String,
}

impl ParserState {
    pub fn new() -> Self {
        Self {
            last_known_speaker: UNKNOWN_SPEAKER.to_string(),
        }
    }

    pub fn last_known_speaker(&self) -> &str {
        &self.last_known_speaker
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-block accumulator: consumes the block's segments in order and emits
/// finalized cues.
///
/// Dialogue with no tag of its own buffers under the most recent validated
/// in-block speaker, or under the process-wide carry-over if the block has
/// not validated any tag yet. Flushes always happen before a new speaker is
/// adopted, so text preceding an interjection stays with its own speaker.
pub struct CueAccumulator<'a> {
    config: &'a SpeakerConfig,
    state: &'a mut ParserState,
    start: String,
    end: String,
    /// Speaker adopted from a validated tag whose dialogue is still
    /// buffering (tag-only lines). None means the buffer belongs to the
    /// carry-over speaker.
    active_speaker: Option<String>,
    buffer: String,
    cues: Vec<Cue>,
}

impl<'a> CueAccumulator<'a> {
    fn new(block: &Block<'_>, config: &'a SpeakerConfig, state: &'a mut ParserState) -> Self {
        Self {
            config,
            state,
            start: block.start.to_string(),
            end: block.end.to_string(),
            active_speaker: None,
            buffer: String::new(),
            cues: Vec::new(),
        }
    }

    /// Run the accumulator over every dialogue line of the block.
    pub fn process_block(
        block: &Block<'_>,
        config: &'a SpeakerConfig,
        state: &'a mut ParserState,
    ) -> Vec<Cue> {
        let mut acc = CueAccumulator::new(block, config, state);

        for line in &block.dialogue_lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            acc.consume_line(line);
        }

        acc.finish()
    }

    fn consume_line(&mut self, line: &str) {
        let segments = segment_line(line);
        let mut iter = segments.into_iter().peekable();

        while let Some(segment) = iter.next() {
            match segment {
                Segment::Tag(raw) => {
                    let candidate = raw.trim_end_matches(':').trim();
                    if self.config.is_valid_speaker_tag(candidate) {
                        // Close out whatever was buffering before this tag
                        // appeared, under its own speaker.
                        self.flush();

                        let speaker = candidate.to_string();
                        if matches!(iter.peek(), Some(Segment::Text(_))) {
                            // Same-line dialogue: emit immediately for the
                            // new speaker.
                            if let Some(Segment::Text(text)) = iter.next() {
                                self.emit(speaker, &text, true);
                            }
                            self.active_speaker = None;
                        } else {
                            // Speaker-only tag: following lines buffer
                            // under this speaker.
                            self.active_speaker = Some(speaker);
                        }
                    } else {
                        debug!(tag = candidate, "rejected candidate tag");
                        // Invalid tag is ordinary dialogue; the colon form
                        // is reconstructed in the buffer.
                        self.append_text(&raw);
                    }
                }
                Segment::Text(text) => self.append_text(&text),
            }
        }
    }

    fn append_text(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
        }
        self.buffer.push_str(text);
    }

    /// Emit the buffered dialogue under the speaker it accumulated for.
    /// Only an `active_speaker` flush (validated tag) confirms the speaker
    /// for carry-over.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let buffered = std::mem::take(&mut self.buffer);

        match self.active_speaker.take() {
            Some(speaker) => self.emit(speaker, &buffered, true),
            None => {
                let speaker = self.state.last_known_speaker.clone();
                self.emit(speaker, &buffered, false);
            }
        }
    }

    fn emit(&mut self, speaker: String, dialogue: &str, confirms_speaker: bool) {
        let dialogue = clean_markup(dialogue);
        if dialogue.is_empty() {
            return;
        }
        if confirms_speaker {
            self.state.last_known_speaker = speaker.clone();
        }
        self.cues
            .push(Cue::new(self.start.clone(), self.end.clone(), speaker, dialogue));
    }

    fn finish(mut self) -> Vec<Cue> {
        self.flush();
        self.cues
    }
}
