use anyhow::Result;
use clap::Parser;
use newsrank_cli::config::load_config;
use newsrank_cli::ingest::load_documents;
use newsrank_cli::{build_engine, display, repl};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "newsrank")]
#[command(about = "Rank local news articles against free-text queries with BM25", long_about = None)]
struct Cli {
    /// CSV file with Heading/Article columns, a JSON/JSONL file, or a directory of them
    #[arg(long, default_value = "data.csv")]
    data: PathBuf,
    /// Results shown per query
    #[arg(long, default_value_t = 3)]
    top_k: usize,
    /// JSON file with normalizer and BM25 settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stopword list, one per line; replaces the built-in English list
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// BM25 term-frequency saturation
    #[arg(long)]
    k1: Option<f64>,
    /// BM25 length normalization, between 0 and 1
    #[arg(long)]
    b: Option<f64>,
    /// Run a single query and exit instead of prompting
    #[arg(long)]
    query: Option<String>,
    /// With --query, print the ranked list as JSON
    #[arg(long, default_value_t = false, requires = "query")]
    json: bool,
}

fn main() -> Result<ExitCode> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.stopwords.as_deref(), cli.k1, cli.b)?;

    // keep stdout clean for JSON output
    let mut status: Box<dyn Write> = if cli.json { Box::new(io::stderr()) } else { Box::new(io::stdout()) };

    let start = Instant::now();
    writeln!(status, "Loading data from {}...", cli.data.display())?;
    let docs = load_documents(&cli.data)?;
    writeln!(status, "Data ingestion complete. Loaded {} articles.", docs.len())?;
    if docs.is_empty() {
        writeln!(status, "System failed to load documents. Please check your CSV file.")?;
        return Ok(ExitCode::FAILURE);
    }

    writeln!(status, "Building BM25 Index...")?;
    let engine = build_engine(config, docs)?;
    writeln!(status, "Indexing complete.")?;
    writeln!(status, "System ready in {:.4} seconds.\n", start.elapsed().as_secs_f64())?;
    drop(status);

    match cli.query {
        Some(query) if cli.json => {
            let results = engine.search(&query, cli.top_k)?;
            display::write_json(&mut io::stdout().lock(), &results)?;
        }
        Some(query) => repl::run_query(&engine, &query, cli.top_k, &mut io::stdout().lock())?,
        None => repl::run(&engine, cli.top_k)?,
    }
    Ok(ExitCode::SUCCESS)
}
