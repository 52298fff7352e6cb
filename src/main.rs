use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect4_engine::api::{MoveRequest, MoveResponse};
use connect4_engine::config::AppConfig;
use connect4_engine::dispatch::SearchPool;

/// Compute a Connect Four move for a JSON request.
#[derive(Parser)]
#[command(name = "connect4-engine", about = "Connect Four move engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Read the JSON request from a file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };

    let request: MoveRequest = serde_json::from_str(&raw).context("parsing move request")?;
    let job = request.into_job()?;

    let pool = SearchPool::new(&config.pool, config.search.clone());
    let result = pool.submit(job).wait()?;

    let response = MoveResponse {
        column: result.column,
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
