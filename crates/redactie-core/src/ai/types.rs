//! Wire types for the Gemini `generateContent` endpoint
//!
//! Response fields are all optional or defaulted so that a partial body
//! deserializes cleanly and extraction can report "absent" instead of failing.

use serde::{Deserialize, Serialize};

/// Request body: one user turn plus a system instruction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
}

impl GenerateRequest {
    pub fn new(system_instruction: &str, user_prompt: &str) -> Self {
        Self {
            contents: vec![Content::text(user_prompt)],
            system_instruction: Content::text(system_instruction),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body, reduced to the fields we read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateResponse {
    /// Text at `candidates[0].content.parts[0].text`
    ///
    /// Returns `None` when any step of the path is missing or the text is empty.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateRequest::new("be brief", "Tekst: hi")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "Tekst: hi" }] }],
                "systemInstruction": { "parts": [{ "text": "be brief" }] }
            })
        );
    }

    #[test]
    fn test_extracts_first_text() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }], "role": "model" } },
                { "content": { "parts": [{ "text": "other" }] } }
            ],
            "usageMetadata": { "totalTokenCount": 12 }
        }))
        .unwrap();
        assert_eq!(response.text(), Some("first"));
    }

    #[test]
    fn test_missing_candidates_is_absent() {
        let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_missing_nested_fields_are_absent() {
        for body in [
            json!({ "candidates": [] }),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [{ "content": {} }] }),
            json!({ "candidates": [{ "content": { "parts": [{}] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }),
        ] {
            let response: GenerateResponse = serde_json::from_value(body.clone()).unwrap();
            assert_eq!(response.text(), None, "body: {}", body);
        }
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let result = serde_json::from_value::<GenerateResponse>(json!({ "candidates": "nope" }));
        assert!(result.is_err());
    }
}
