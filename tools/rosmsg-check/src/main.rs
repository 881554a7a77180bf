use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use protoros_msg::Corpus;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rosmsg-check",
    about = "Verify that every field type in a .msg tree resolves"
)]
struct Cli {
    /// Root of the tree; records live at <package>/msg/<Name>.msg
    root: PathBuf,

    /// Print every accepted record in scan order
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let corpus = Corpus::load_dir(&cli.root)
        .with_context(|| format!("failed to verify {}", cli.root.display()))?;

    info!(
        records = corpus.records().len(),
        types = corpus.universe().len(),
        "all field types resolve"
    );
    if cli.list {
        for record in corpus.records() {
            println!("{}", record.name);
        }
    }
    Ok(())
}
