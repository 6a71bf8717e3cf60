//! Command line definition

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use redactie_core::{PromptLanguage, StudioConfig, TaskKind};

#[derive(Debug, Parser)]
#[command(name = "redactie", version, about = "Markdown preview and AI assist for newsletter copy")]
pub struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Command,
}

/// Overrides applied on top of the config file and environment
#[derive(Debug, Args)]
pub struct Settings {
    /// Config file (default: ~/.redactie/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (default: GEMINI_API_KEY or config file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Instruction language
    #[arg(long, global = true, value_enum)]
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Language {
    Nl,
    En,
}

impl From<Language> for PromptLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::Nl => PromptLanguage::Dutch,
            Language::En => PromptLanguage::English,
        }
    }
}

impl Settings {
    /// Load config from file and environment, then apply flags
    pub fn resolve(&self) -> Result<StudioConfig> {
        let mut config = StudioConfig::load(self.config.as_deref())?;
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(language) = self.language {
            config.language = language.into();
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render markdown to HTML
    Render(RenderArgs),
    /// Run an AI assist task on a markdown file
    Assist(AssistArgs),
    /// List assist tasks and their instructions
    Tasks,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Markdown file, or `-` for stdin
    pub input: PathBuf,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a complete HTML page instead of a fragment
    #[arg(long)]
    pub standalone: bool,
}

#[derive(Debug, Args)]
pub struct AssistArgs {
    /// Task: title, push, or shorten
    pub task: TaskKind,

    /// Markdown file to work on
    pub input: PathBuf,

    /// Write the result back to the file instead of printing it
    #[arg(short, long)]
    pub write: bool,
}
