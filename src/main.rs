use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use transcript_splitter::models::DEFAULT_BUDGET;
use transcript_splitter::{
    execute_stage1, execute_stage2, execute_stage3, load_instructions, normalize_with_stats,
    read_transcript, HumanOutput, RunMetadata, SegmentConfig, Stage3Config,
};

#[derive(Parser)]
#[command(name = "transcript-splitter")]
#[command(author, version, about = "Clean a transcript and split it into chapter prompts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a transcript and generate one prompt per part
    Split {
        /// Input transcript file (plain text); reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Maximum characters per part (2000-20000)
        #[arg(short, long, default_value_t = DEFAULT_BUDGET)]
        budget: usize,

        /// File replacing the built-in prompt instructions
        #[arg(long)]
        instructions: Option<PathBuf>,

        /// Output file for machine-readable prompts (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for human-readable steps (text)
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Directory receiving one prompt file per part
        #[arg(long)]
        parts_dir: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report how a transcript would be cleaned and split
    Analyze {
        /// Input transcript file (plain text); reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Maximum characters per part (2000-20000)
        #[arg(short, long, default_value_t = DEFAULT_BUDGET)]
        budget: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            budget,
            instructions,
            output,
            human_readable,
            parts_dir,
            verbose,
        } => {
            setup_logging(verbose);
            let render = Stage3Config {
                machine_output: output,
                human_output: human_readable,
                parts_dir,
            };
            split_transcript(input, budget, instructions, render)
        }
        Commands::Analyze {
            input,
            budget,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_transcript(input, budget)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn split_transcript(
    input: Option<PathBuf>,
    budget: usize,
    instructions: Option<PathBuf>,
    render: Stage3Config,
) -> Result<()> {
    let segment_config = SegmentConfig::new(budget);
    segment_config.validate()?;

    let instructions = load_instructions(instructions.as_deref())?;

    info!("Loading transcript from {}", describe_input(&input));
    let raw = read_transcript(input.as_deref()).context("Failed to load input transcript")?;

    // Stage 0: Normalize
    info!("Stage 0: Normalizing transcript...");
    let norm_result = normalize_with_stats(&raw);
    info!(
        "Removed {} timestamps ({} -> {} chars)",
        norm_result.timestamps_removed, norm_result.raw_chars, norm_result.normalized_chars
    );
    if norm_result.text.is_empty() {
        warn!("Transcript is empty after cleaning, no prompts will be generated");
    }

    // Stage 1: Segment
    info!("Stage 1: Segmenting...");
    let segments = execute_stage1(&norm_result.text, &segment_config);

    // Stage 2: Compose
    info!("Stage 2: Composing prompts...");
    let prompts = execute_stage2(&segments, &instructions);

    // Stage 3: Rendering
    if render.is_empty() {
        print!("{}", HumanOutput::new(&prompts).format());
        return Ok(());
    }

    info!("Stage 3: Rendering output...");
    let metadata = RunMetadata {
        raw_chars: norm_result.raw_chars,
        normalized_chars: norm_result.normalized_chars,
        timestamps_removed: norm_result.timestamps_removed,
        oversized_segments: segments.oversized_count(),
    };
    let result = execute_stage3(&prompts, segment_config.budget, metadata, &render)?;

    if let Some(path) = result.machine_path {
        info!("Machine output written to {:?}", path);
    }
    if let Some(path) = result.human_path {
        info!("Human-readable output written to {:?}", path);
    }
    if !result.part_paths.is_empty() {
        info!("{} part files written", result.part_paths.len());
    }

    info!("Complete: {} parts", prompts.len());

    Ok(())
}

fn analyze_transcript(input: Option<PathBuf>, budget: usize) -> Result<()> {
    let segment_config = SegmentConfig::new(budget);
    segment_config.validate()?;

    info!("Analyzing transcript from {}", describe_input(&input));
    let raw = read_transcript(input.as_deref()).context("Failed to load input transcript")?;

    let norm_result = normalize_with_stats(&raw);
    let segments = execute_stage1(&norm_result.text, &segment_config);

    println!("Transcript Analysis");
    println!("===================");
    println!("Raw length: {} chars", norm_result.raw_chars);
    println!("Cleaned length: {} chars", norm_result.normalized_chars);
    println!("Timestamps removed: {}", norm_result.timestamps_removed);
    println!();

    println!("Parts");
    println!("-----");
    println!("Budget: {} chars", segments.budget);
    println!("Total parts: {}", segments.total());
    for seg in &segments.segments {
        let marker = if seg.is_oversized(segments.budget) {
            " (over budget)"
        } else {
            ""
        };
        println!(
            "Part {}: {} chars, {} words{}",
            seg.index + 1,
            seg.char_len,
            seg.word_count,
            marker
        );
    }
    println!("Oversized parts: {}", segments.oversized_count());

    Ok(())
}

fn describe_input(input: &Option<PathBuf>) -> String {
    match input {
        Some(path) => format!("{:?}", path),
        None => "stdin".to_string(),
    }
}
