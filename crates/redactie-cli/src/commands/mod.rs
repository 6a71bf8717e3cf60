//! Subcommand implementations

pub mod assist;
pub mod render;
pub mod tasks;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a markdown source; `-` means stdin
pub(crate) fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
