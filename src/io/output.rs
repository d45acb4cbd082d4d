use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::models::{Cue, speakers_in_order};
use crate::parser::ParseReport;

/// Light background colors cycled through in order of first appearance, so
/// a speaker keeps the same color everywhere it shows up.
pub const COLOR_PALETTE: [&str; 8] = [
    "#ADD8E6", "#90EE90", "#FFB6C1", "#FFFFE0", "#DDA0DD", "#E6E6FA", "#AFEEEE", "#F0E68C",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deterministic per-speaker color assignment.
#[derive(Debug, Clone, Serialize)]
pub struct SpeakerStyle {
    pub speaker: String,
    pub color: String,
}

/// Assign each unique speaker a palette color, in order of first appearance,
/// wrapping around when the palette runs out.
pub fn assign_speaker_styles(cues: &[Cue]) -> Vec<SpeakerStyle> {
    speakers_in_order(cues)
        .into_iter()
        .enumerate()
        .map(|(i, speaker)| SpeakerStyle {
            speaker,
            color: COLOR_PALETTE[i % COLOR_PALETTE.len()].to_string(),
        })
        .collect()
}

/// Write the cue list as CSV with a `start,end,speaker,dialogue` header.
pub fn write_csv(cues: &[Cue], path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for cue in cues {
        writer.serialize(cue)?;
    }
    writer.flush()?;
    Ok(())
}

/// Machine-readable conversion output: the cues plus parse statistics and
/// the per-speaker styling.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub cues: Vec<Cue>,
    pub speakers: Vec<SpeakerStyle>,
    pub metadata: ConversionMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionMetadata {
    pub total_blocks: usize,
    pub blocks_skipped: usize,
    pub total_cues: usize,
}

impl ConversionSummary {
    pub fn from_report(report: &ParseReport) -> Self {
        Self {
            cues: report.cues.clone(),
            speakers: assign_speaker_styles(&report.cues),
            metadata: ConversionMetadata {
                total_blocks: report.blocks_total,
                blocks_skipped: report.blocks_skipped,
                total_cues: report.cues.len(),
            },
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ExportError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Human-readable rendering of the cue list.
pub struct HumanTranscript<'a> {
    cues: &'a [Cue],
}

impl<'a> HumanTranscript<'a> {
    pub fn new(cues: &'a [Cue]) -> Self {
        Self { cues }
    }

    /// One line per cue: `[start --> end] SPEAKER: dialogue`.
    pub fn format(&self) -> String {
        let mut output = String::new();
        for cue in self.cues {
            output.push_str(&format!(
                "[{} --> {}] {}: {}\n",
                cue.start, cue.end, cue.speaker, cue.dialogue
            ));
        }
        output
    }

    pub fn write_file(&self, path: &Path) -> Result<(), ExportError> {
        let mut file = std::fs::File::create(path)?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}
