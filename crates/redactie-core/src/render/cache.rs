//! Preview Cache
//!
//! Caches the rendered preview so an unchanged document is not re-rendered
//! on every read.

use std::sync::Arc;

/// Single-slot memo keyed on the markdown source
#[derive(Debug, Default)]
pub struct PreviewCache {
    /// Last rendered (source, html) pair
    entry: Option<(String, Arc<str>)>,
    /// Number of real renders performed
    renders: usize,
}

impl PreviewCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rendered HTML for `source`, rendering only if it changed
    pub fn get_or_render(&mut self, source: &str) -> Arc<str> {
        if let Some((cached_source, html)) = &self.entry {
            if cached_source == source {
                return Arc::clone(html);
            }
        }

        let html: Arc<str> = Arc::from(super::to_html(source));
        self.renders += 1;
        self.entry = Some((source.to_string(), Arc::clone(&html)));
        html
    }

    /// How many times the renderer actually ran
    pub fn render_count(&self) -> usize {
        self.renders
    }
}
