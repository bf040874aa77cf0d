//! parachunk CLI - Split documents into chunks for embedding.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use parachunk_core::{
    ChunkingConfig, DocumentProfile, ParagraphMode, ParagraphSource, PlainTextSource, Strategy,
};
use parachunk_segment::{select_for_profile, AnySegmenter, Segmenter};

/// parachunk - Split extracted document text into embedding-sized chunks
#[derive(Parser)]
#[command(name = "parachunk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/parachunk/config.toml, then ./parachunk.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a text file into chunks
    Chunk {
        /// Path to a UTF-8 text file
        path: PathBuf,

        /// Segmentation strategy
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Auto)]
        strategy: StrategyArg,

        /// Treat blank-line separated blocks as paragraphs instead of single lines
        #[arg(short, long)]
        blank_lines: bool,

        /// Print chunks as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show the document profile and the strategy that would be selected
    Inspect {
        /// Path to a UTF-8 text file
        path: PathBuf,

        /// Treat blank-line separated blocks as paragraphs instead of single lines
        #[arg(short, long)]
        blank_lines: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Pick from the document's shape
    Auto,
    Simple,
    Overlap,
    Semantic,
}

impl StrategyArg {
    fn resolve(self, profile: &DocumentProfile, config: &ChunkingConfig) -> Strategy {
        match self {
            Self::Auto => select_for_profile(profile, &config.selector),
            Self::Simple => Strategy::Simple,
            Self::Overlap => Strategy::Overlap,
            Self::Semantic => Strategy::Semantic,
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_config(path: Option<&Path>) -> parachunk_core::Result<ChunkingConfig> {
    match path {
        Some(path) => ChunkingConfig::load(path),
        None => ChunkingConfig::load_default(),
    }
}

fn paragraph_mode(blank_lines: bool) -> ParagraphMode {
    if blank_lines {
        ParagraphMode::BlankLine
    } else {
        ParagraphMode::Line
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Chunk {
            path,
            strategy,
            blank_lines,
            json,
        } => {
            chunk(&path, strategy, paragraph_mode(blank_lines), json, &config)?;
        }
        Commands::Inspect {
            path,
            blank_lines,
            json,
        } => {
            inspect(&path, paragraph_mode(blank_lines), json, &config)?;
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn chunk(
    path: &Path,
    strategy: StrategyArg,
    mode: ParagraphMode,
    json: bool,
    config: &ChunkingConfig,
) -> parachunk_core::Result<()> {
    let source = PlainTextSource::new(path, mode);
    let paragraphs = source.paragraphs()?;
    let profile = DocumentProfile::from_paragraphs(&paragraphs);

    let strategy = strategy.resolve(&profile, config);
    let chunks = AnySegmenter::from_config(strategy, config).segment(&paragraphs);

    tracing::info!(
        source = source.name(),
        %strategy,
        paragraphs = profile.paragraph_count,
        chunks = chunks.len(),
        "chunked document"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
    } else {
        println!("{}", chunks.join("\n\n"));
    }

    Ok(())
}

fn inspect(
    path: &Path,
    mode: ParagraphMode,
    json: bool,
    config: &ChunkingConfig,
) -> parachunk_core::Result<()> {
    let source = PlainTextSource::new(path, mode);
    let paragraphs = source.paragraphs()?;
    let profile = DocumentProfile::from_paragraphs(&paragraphs);
    let strategy = select_for_profile(&profile, &config.selector);

    if json {
        let report = serde_json::json!({
            "source": source.name(),
            "profile": profile,
            "strategy": strategy,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Source:            {}", source.name());
        println!("Paragraphs:        {}", profile.paragraph_count);
        println!("Longest paragraph: {} chars", profile.longest_paragraph);
        println!("Total length:      {} chars", profile.total_chars);
        println!("Selected strategy: {}", strategy);
    }

    Ok(())
}
