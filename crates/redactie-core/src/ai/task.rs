//! Assist task kinds, their instructions, and how results are spliced back

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language of the instructions and annotations sent/added by assist tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptLanguage {
    #[default]
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "en")]
    English,
}

impl PromptLanguage {
    /// User prompt carrying the document
    pub fn user_prompt(self, document: &str) -> String {
        let prefix = match self {
            PromptLanguage::Dutch => "Tekst",
            PromptLanguage::English => "Text",
        };
        format!("{}: {}", prefix, document)
    }

    fn suggestion_label(self) -> &'static str {
        match self {
            PromptLanguage::Dutch => "AI Suggestie",
            PromptLanguage::English => "AI Suggestion",
        }
    }

    /// Generic message shown to the user when an assist call fails
    pub fn failure_alert(self) -> &'static str {
        match self {
            PromptLanguage::Dutch => {
                "Er ging iets mis met de AI generatie. Controleer de console."
            }
            PromptLanguage::English => {
                "Something went wrong with the AI generation. Check the logs."
            }
        }
    }
}

/// How generated text is merged into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splice {
    /// Generated text becomes the whole document
    Replace,
    /// Generated text goes above the document as an annotated suggestion
    Prepend,
}

/// The fixed set of assist operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// Three short headline / subject line suggestions
    Headlines,
    /// One push notification of at most 120 characters
    PushNotification,
    /// Tighter rewrite of the whole document
    Shorten,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [
        TaskKind::Headlines,
        TaskKind::PushNotification,
        TaskKind::Shorten,
    ];

    /// Short tag used on the command line and in suggestion annotations
    pub fn tag(self) -> &'static str {
        match self {
            TaskKind::Headlines => "title",
            TaskKind::PushNotification => "push",
            TaskKind::Shorten => "shorten",
        }
    }

    pub fn splice_policy(self) -> Splice {
        match self {
            TaskKind::Shorten => Splice::Replace,
            TaskKind::Headlines | TaskKind::PushNotification => Splice::Prepend,
        }
    }

    /// System instruction sent with the request
    pub fn instruction(self, language: PromptLanguage) -> &'static str {
        match (self, language) {
            (TaskKind::Headlines, PromptLanguage::Dutch) => {
                "Je bent een ervaren krantenkop-redacteur. Bedenk 3 pakkende, korte titels/onderwerpregels voor deze nieuwsbrieftekst. Geef alleen de titels, als een lijstje."
            }
            (TaskKind::PushNotification, PromptLanguage::Dutch) => {
                "Je bent een expert in mobiele notificaties. Herschrijf de kern van deze tekst naar één pakkend pushbericht (max 120 tekens) met een emoji. Begin met 'PUSH:'"
            }
            (TaskKind::Shorten, PromptLanguage::Dutch) => {
                "Je bent een strenge eindredacteur. Herschrijf de volgende tekst zodat deze korter, krachtiger en actiever is, zonder de feitelijke inhoud te verliezen. Behoud Markdown opmaak."
            }
            (TaskKind::Headlines, PromptLanguage::English) => {
                "You are an experienced headline editor. Come up with 3 catchy, short titles/subject lines for this newsletter text. Return only the titles, as a list."
            }
            (TaskKind::PushNotification, PromptLanguage::English) => {
                "You are an expert in mobile notifications. Rewrite the core of this text into one catchy push message (max 120 characters) with an emoji. Start with 'PUSH:'"
            }
            (TaskKind::Shorten, PromptLanguage::English) => {
                "You are a strict copy editor. Rewrite the following text so it is shorter, punchier and more active, without losing any factual content. Keep the Markdown formatting."
            }
        }
    }

    /// Merge generated text into the document this task was started from
    pub fn splice(self, document: &str, generated: &str, language: PromptLanguage) -> String {
        match self.splice_policy() {
            Splice::Replace => generated.to_string(),
            Splice::Prepend => format!(
                "\n\n> **{} ({}):**\n{}\n\n---\n{}",
                language.suggestion_label(),
                self.tag(),
                generated,
                document
            ),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error)]
#[error("unknown task '{0}' (expected one of: title, push, shorten)")]
pub struct UnknownTask(String);

impl FromStr for TaskKind {
    type Err = UnknownTask;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" | "titles" | "headline" | "headlines" => Ok(TaskKind::Headlines),
            "push" | "push-notification" => Ok(TaskKind::PushNotification),
            "shorten" => Ok(TaskKind::Shorten),
            _ => Err(UnknownTask(s.to_string())),
        }
    }
}
