use anyhow::Result;
use clap::{Parser, Subcommand};
use kwsearch_core::SearchEngine;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "kwsearch")]
#[command(about = "Index text documents and rank them for two-keyword queries", long_about = None)]
struct Cli {
    /// Noise word file (whitespace separated); built-in English list when omitted
    #[arg(long)]
    noise: Option<PathBuf>,
    /// Document list file, or a directory of *.txt documents
    #[arg(long)]
    docs: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Documents containing either keyword, most frequent first (at most 5)
    Search {
        keyword1: String,
        keyword2: String,
    },
    /// Occurrence list of a single keyword
    Keyword {
        keyword: String,
        /// Print as JSON instead of tab separated lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Document and keyword counts
    Stats,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let engine = SearchEngine::from_files(cli.noise.as_deref(), &cli.docs)?;
    tracing::info!(
        docs = %cli.docs.display(),
        num_docs = engine.index().document_count(),
        num_keywords = engine.index().keyword_count(),
        "index ready"
    );

    match cli.command {
        Commands::Search { keyword1, keyword2 } => {
            // the index only holds lower-cased keywords
            for doc in engine.search(&keyword1.to_lowercase(), &keyword2.to_lowercase()) {
                println!("{doc}");
            }
        }
        Commands::Keyword { keyword, json } => {
            let occurrences = engine.occurrences(&keyword.to_lowercase());
            if json {
                println!("{}", serde_json::to_string_pretty(occurrences)?);
            } else {
                for occ in occurrences {
                    println!("{}\t{}", occ.document, occ.frequency);
                }
            }
        }
        Commands::Stats => {
            println!("documents\t{}", engine.index().document_count());
            println!("keywords\t{}", engine.index().keyword_count());
        }
    }
    Ok(())
}
