use anyhow::Result;
use axum::Router;
use clap::Parser;
use kwsearch_core::SearchEngine;
use kwsearch_server::build_app;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Noise word file; built-in English list when omitted
    #[arg(long)]
    noise: Option<PathBuf>,
    /// Document list file, or a directory of *.txt documents
    #[arg(long, default_value = "./docs")]
    docs: PathBuf,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    // indexing finishes before the listener opens
    let engine = SearchEngine::from_files(args.noise.as_deref(), &args.docs)?;
    let app: Router = build_app(engine);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
