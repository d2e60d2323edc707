use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use kex::output;
use kex_core::config::{Config, OutputFormat};
use kex_core::{Dictionary, MatchMode, SearchOutcome};
use kex_feeds::CorpusSource;

#[derive(Parser)]
#[command(
    name = "kex",
    about = "Keyword expansion search — find lines mentioning a term or any of its synonyms"
)]
struct Cli {
    /// Keyword to search for. Omitted means empty.
    keyword: Option<String>,

    /// JSON synonym dictionary (default: built-in music dictionary).
    #[arg(long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Corpus file, one entry per line; `-` reads stdin (default: built-in sample).
    #[arg(long, value_name = "PATH")]
    corpus: Option<String>,

    /// Treat aliases and the keyword as literal text instead of patterns.
    #[arg(long)]
    literal: bool,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Print the located genre and expanded names to stderr.
    #[arg(long)]
    explain: bool,

    /// Config file (default: ~/.config/kex/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to stderr.
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("kex debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
            Config::defaults()
        }),
    };

    let mode = if cli.literal {
        MatchMode::Literal
    } else {
        config.search.match_mode
    };
    let format = cli.format.map(Into::into).unwrap_or(config.output.format);

    // An empty keyword is answered without loading the dictionary or corpus.
    let keyword = cli.keyword.unwrap_or_default();
    if keyword.is_empty() {
        println!("{}", output::render(&SearchOutcome::EmptyKeyword, format)?);
        return Ok(());
    }

    let dictionary = match cli.dictionary.as_deref().or(config.sources.dictionary_path()) {
        Some(path) => Dictionary::load(path)?,
        None => Dictionary::builtin(),
    };

    let source = CorpusSource::from_arg(cli.corpus.as_deref().unwrap_or(&config.sources.corpus));
    let corpus = source.read_lines().await?;

    if cli.explain {
        let expansion = kex_core::expand(&keyword, &dictionary, mode);
        eprintln!("{}", output::explain(&keyword, &expansion));
    }

    let outcome = kex_core::search_with(&keyword, &dictionary, &corpus, mode)?;
    println!("{}", output::render(&outcome, format)?);
    Ok(())
}
