//! HTTP client for the generative-language API

mod core;
mod simple;

pub use self::core::AiClient;
