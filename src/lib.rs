pub mod io;
pub mod models;
pub mod parser;

pub use io::{
    ConversionMetadata, ConversionSummary, ExportError, HumanTranscript, SpeakerStyle,
    assign_speaker_styles, decode_transcript, read_transcript_file, write_csv,
};
pub use models::{Cue, UNKNOWN_SPEAKER, speakers_in_order};
pub use parser::{ParseReport, ParserState, SpeakerConfig, clean_markup, parse_srt};
