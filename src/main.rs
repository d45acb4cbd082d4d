use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use srtcast::{
    ConversionSummary, HumanTranscript, SpeakerConfig, assign_speaker_styles, parse_srt,
    read_transcript_file, write_csv,
};

#[derive(Parser)]
#[command(name = "srtcast")]
#[command(author, version, about = "SRT transcript converter with heuristic speaker attribution", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an SRT file to a speaker-attributed spreadsheet
    Convert {
        /// Input subtitle file (.srt)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file (defaults to srt_converted_<timestamp>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a machine-readable JSON summary
        #[arg(long)]
        json: Option<PathBuf>,

        /// Also write a human-readable transcript
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Speaker validator configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze an SRT file without writing any output
    Analyze {
        /// Input subtitle file (.srt)
        #[arg(short, long)]
        input: PathBuf,

        /// Speaker validator configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            json,
            human_readable,
            config,
            verbose,
        } => {
            setup_logging(verbose);
            convert(input, output, json, human_readable, config)
        }
        Commands::Analyze {
            input,
            config,
            verbose,
        } => {
            setup_logging(verbose);
            analyze(input, config)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_config(path: Option<&Path>) -> Result<SpeakerConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))
        }
        None => Ok(SpeakerConfig::default()),
    }
}

fn default_output_name() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("srt_converted_{}.csv", timestamp))
}

fn convert(
    input: PathBuf,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
    human_readable: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config.as_deref())?;

    info!("Loading transcript from {:?}", input);
    let content = read_transcript_file(&input)?;

    let report = parse_srt(&content, &config);
    info!(
        "Parsed {} blocks ({} skipped), {} cues",
        report.blocks_total, report.blocks_skipped, report.cues.len()
    );

    if report.cues.is_empty() {
        bail!("Could not parse any subtitles. Please check the SRT file format.");
    }

    let output = output.unwrap_or_else(default_output_name);
    write_csv(&report.cues, &output)
        .with_context(|| format!("Failed to write CSV: {:?}", output))?;
    info!("CSV written to {:?}", output);

    if let Some(json_path) = json {
        ConversionSummary::from_report(&report)
            .write_json(&json_path)
            .with_context(|| format!("Failed to write JSON: {:?}", json_path))?;
        info!("JSON summary written to {:?}", json_path);
    }

    if let Some(human_path) = human_readable {
        HumanTranscript::new(&report.cues)
            .write_file(&human_path)
            .with_context(|| format!("Failed to write transcript: {:?}", human_path))?;
        info!("Human-readable transcript written to {:?}", human_path);
    }

    Ok(())
}

fn analyze(input: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config.as_deref())?;

    info!("Analyzing transcript from {:?}", input);
    let content = read_transcript_file(&input)?;
    let report = parse_srt(&content, &config);

    println!("Transcript Analysis");
    println!("==================");
    println!("Total blocks: {}", report.blocks_total);
    println!("Skipped blocks: {}", report.blocks_skipped);
    println!("Total cues: {}", report.cues.len());
    println!();

    println!("Speakers");
    println!("--------");
    for style in assign_speaker_styles(&report.cues) {
        let cue_count = report
            .cues
            .iter()
            .filter(|c| c.speaker == style.speaker)
            .count();
        let word_count: usize = report
            .cues
            .iter()
            .filter(|c| c.speaker == style.speaker)
            .map(|c| c.dialogue.split_whitespace().count())
            .sum();

        println!(
            "{}: {} cues, {} words, color {}",
            style.speaker, cue_count, word_count, style.color
        );
    }

    Ok(())
}
