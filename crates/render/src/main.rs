//! `framesim-render`: writes scene snapshots as JSON lines.
//!
//! ```text
//! framesim-render scenes/collision.toml --start 0 --end 299 --threads 8 > frames.jsonl
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `info`).

mod cli;
mod output;
mod scene_file;

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::Args;
use output::Renderer;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let scene = scene_file::load(&args.scene)?;
    let frames = args.frames()?;
    let renderer = Renderer::new(args.threads)?;
    info!(
        scene = %args.scene.display(),
        kind = scene.kind(),
        frames = frames.len(),
        "rendering"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    renderer.write(&scene, &frames, &mut out)?;
    out.flush()?;

    info!("done");
    Ok(())
}
