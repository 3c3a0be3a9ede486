// File: crates/plot-examples/src/lib.rs
// Summary: Shared setup for the example binaries: logging and output directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// `target/out/<name>`, with the directory created.
pub fn out_path(name: &str) -> Result<PathBuf> {
    let dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(dir.join(name))
}
