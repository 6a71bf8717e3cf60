//! `redactie render`

use std::path::Path;

use anyhow::{Context, Result};
use redactie_core::render;
use tracing::info;

use super::read_source;
use crate::cli::RenderArgs;

pub fn run(args: RenderArgs) -> Result<()> {
    let markdown = read_source(&args.input)?;
    let html = render_output(&markdown, &args.input, args.standalone);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote preview to {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn render_output(markdown: &str, input: &Path, standalone: bool) -> String {
    let fragment = render::to_html(markdown);
    if !standalone {
        return fragment;
    }
    let title = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| *stem != "-")
        .unwrap_or("Redactie");
    render::to_page(title, &fragment)
}
