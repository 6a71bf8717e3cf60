//! AI assist: task definitions, wire types, and the Gemini client

pub mod client;
pub mod error;
pub mod request;
pub mod task;
pub mod types;

pub use client::AiClient;
pub use error::AssistError;
pub use request::AssistRequest;
pub use task::{PromptLanguage, Splice, TaskKind, UnknownTask};
pub use types::{GenerateRequest, GenerateResponse};
