//! The markdown document being edited

use std::fmt;
use std::ops::Deref;

/// Text a fresh studio starts with
pub const WELCOME_DOCUMENT: &str = "# Welkom bij de RedactieApp Studio\n\nDit is een **voorbeeldnieuwsbrief**.\n\n* Typ hier links\n* Zie rechts het resultaat\n\nGebruik de AI-knoppen hierboven om de magie te testen! ✨";

/// Current markdown source; no history, no identity beyond its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(WELCOME_DOCUMENT)
    }
}

impl Deref for Document {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
