//! Redactie core library
//!
//! - `render`: markdown to HTML for the preview
//! - `ai`: Gemini-backed assist tasks
//! - `studio`: editor state tying the two together
//! - `config`: settings file and environment

pub mod ai;
pub mod config;
pub mod render;
pub mod studio;

pub use ai::{AiClient, AssistError, PromptLanguage, TaskKind};
pub use config::StudioConfig;
pub use studio::{AssistOutcome, Document, Studio};
