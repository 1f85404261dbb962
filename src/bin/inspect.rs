use anyhow::{Context, Result};
use clap::Parser;
use mulsave::config::cli::LocalStorage;
use mulsave::core::{codec, Storage};
use mulsave::utils::logger;
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mulsave-inspect")]
#[command(about = "Print the value stored in mulsave .p files")]
struct Args {
    /// Files to read
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print one JSON object per file
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let storage = LocalStorage::new(".");

    for file in &args.files {
        let path = file.display().to_string();
        let bytes = storage
            .read_file(&path)
            .with_context(|| format!("failed to read {}", path))?;
        let saved = codec::decode(&path, &bytes)?;
        tracing::debug!("{}: version {}, {} bytes", path, saved.version, bytes.len());

        if args.json {
            println!(
                "{}",
                json!({ "path": path, "version": saved.version, "value": saved.value })
            );
        } else {
            println!("{}", saved.value);
        }
    }

    Ok(())
}
