//! A single assist invocation, built from a document snapshot

use super::task::{PromptLanguage, TaskKind};

/// Everything needed to send one task and splice its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistRequest {
    pub task: TaskKind,
    pub language: PromptLanguage,
    pub instruction: String,
    pub user_prompt: String,
    /// Document as it was when the request was built
    pub snapshot: String,
}

impl AssistRequest {
    pub fn new(task: TaskKind, document: &str, language: PromptLanguage) -> Self {
        Self {
            task,
            language,
            instruction: task.instruction(language).to_string(),
            user_prompt: language.user_prompt(document),
            snapshot: document.to_string(),
        }
    }

    /// New document text after merging `generated` into the snapshot
    pub fn apply(&self, generated: &str) -> String {
        self.task.splice(&self.snapshot, generated, self.language)
    }
}
