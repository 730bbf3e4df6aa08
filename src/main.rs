use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use transcript_diff::{RenderStyle, TranscriptDiffConfig, TranscriptDiffer, render};

/// Word-level diff of a transcript against its reference text.
#[derive(Parser)]
#[command(name = "tdiff", version)]
struct Cli {
    /// File holding the reference text.
    #[arg(long, short = 'r')]
    reference: PathBuf,

    /// File holding the transcript to check.
    #[arg(long, short = 'H')]
    hypothesis: PathBuf,

    /// YAML configuration file.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Output format. Defaults to the configured render style.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Color changed words.
    #[arg(long)]
    color: bool,

    /// Leave reference words missing from the transcript out of the output.
    #[arg(long)]
    hide_removed: bool,

    /// Extra equivalence, as `left=right`. Repeatable.
    #[arg(long = "equivalence", short = 'e', value_parser = parse_pair)]
    equivalences: Vec<(String, String)>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Annotated,
    Inline,
    Json,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((left, right)) => Ok((left.to_string(), right.to_string())),
        None => Err(format!("expected left=right, got {raw:?}")),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => TranscriptDiffConfig::from_file(path)?,
        None => TranscriptDiffConfig::default(),
    };
    for (left, right) in cli.equivalences {
        cfg.normalization.equivalence_pairs.insert((left, right));
    }
    if cli.color {
        cfg.render.color = true;
    }
    if cli.hide_removed {
        cfg.render.show_removed = false;
    }

    let reference = fs::read_to_string(&cli.reference)?;
    let hypothesis = fs::read_to_string(&cli.hypothesis)?;

    let differ = TranscriptDiffer::from_config(&cfg)?;
    let report = differ.report(&reference, &hypothesis);

    let style = match cli.format {
        Some(Format::Json) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
        Some(Format::Annotated) => RenderStyle::Annotated,
        Some(Format::Inline) => RenderStyle::Inline,
        None => cfg.render.style,
    };

    let rendered = render(&report.segments, &cfg.render.clone().with_style(style));
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    eprintln!(
        "WER {:.2}% ({} errors over {} reference words)",
        report.word_error_rate() * 100.0,
        report.stats.errors(),
        report.stats.reference_words()
    );

    Ok(())
}
