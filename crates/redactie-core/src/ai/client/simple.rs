//! Simple (non-streaming) generateContent calls
//!
//! Every assist task is a single request/response round trip.

use tracing::{debug, info};

use super::core::AiClient;
use crate::ai::error::AssistError;
use crate::ai::request::AssistRequest;
use crate::ai::types::{GenerateRequest, GenerateResponse};

impl AiClient {
    /// Make a simple non-streaming call
    ///
    /// Returns `Ok(None)` when the response parses but carries no text at
    /// `candidates[0].content.parts[0].text`.
    pub async fn call_simple(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<Option<String>, AssistError> {
        let body = GenerateRequest::new(system_prompt, user_message);

        let url = self.endpoint()?;
        debug!(
            "Gemini simple call to model: {} ({} chars)",
            self.model(),
            user_message.len()
        );

        let response = self.build_request(url).json(&body).send().await?;
        let response = self.handle_error_response(response).await?;

        let raw = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&raw)?;

        Ok(parsed.text().map(str::to_string))
    }

    /// Run one assist task
    pub async fn run(&self, request: &AssistRequest) -> Result<Option<String>, AssistError> {
        info!(task = %request.task, "Running assist task");
        self.call_simple(&request.instruction, &request.user_prompt)
            .await
    }
}
