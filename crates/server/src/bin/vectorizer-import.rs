//! Build a redb vector store from GloVe-style text.
//!
//! Each input line is a word followed by its components, separated by
//! spaces. The output file is what `vectorizer-server` opens read-only.

use anyhow::Context;
use clap::Parser;
use index::{import::import_glove, RedbWriter, DEFAULT_DIMENSION};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "vectorizer-import", version, about)]
struct Args {
    /// GloVe-style text file (`word v1 v2 ...` per line)
    #[arg(short, long)]
    input: PathBuf,

    /// redb file to create or extend
    #[arg(short, long, default_value = "./embeddings.redb")]
    output: PathBuf,

    /// Number of components per vector
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    dimension: usize,

    /// Entries per write transaction
    #[arg(short, long, default_value_t = 10_000)]
    batch_size: usize,

    /// Log filter (e.g. `info`, `index=debug`)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .with_target(false)
        .init();

    let input = File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let writer = RedbWriter::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let start = Instant::now();
    let stats = import_glove(
        BufReader::new(input),
        &writer,
        args.dimension,
        args.batch_size,
    )
    .with_context(|| format!("importing {}", args.input.display()))?;

    tracing::info!(
        imported = stats.imported,
        lines = stats.lines,
        skipped_blank = stats.skipped_blank,
        elapsed_ms = %start.elapsed().as_millis(),
        output = %args.output.display(),
        "import complete"
    );
    Ok(())
}
