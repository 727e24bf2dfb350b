//! Wire types for the Gemini `generateContent` endpoint

use equacao_application::GatewayError;
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

/// Request body: system instruction plus a single user turn.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub system_instruction: Content<'a>,
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn new(prompt: &'a str, system_instruction: &'a str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` when it carries no text.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }

    /// Parse a 2xx body into the generated text.
    pub fn parse_text(body: &str) -> Result<String, GatewayError> {
        let response: Self = serde_json::from_str(body)
            .map_err(|e| GatewayError::Request(format!("Malformed response body: {}", e)))?;

        response.text().ok_or_else(|| {
            let reason = response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone())
                .or_else(|| {
                    response
                        .candidates
                        .first()
                        .and_then(|c| c.finish_reason.clone())
                })
                .unwrap_or_else(|| "no candidates".to_string());
            GatewayError::Request(format!("Response contained no text ({})", reason))
        })
    }
}

// ─── Error body ──────────────────────────────────────────────────

/// `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<u16>,
    pub message: String,
    pub status: Option<String>,
}

/// Human-readable description of a non-success response, for logs.
pub fn describe_http_error(status: u16, reason: Option<&str>, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => format!(
            "HTTP {} {}: {}",
            status,
            envelope.error.status.as_deref().unwrap_or("ERROR"),
            envelope.error.message
        ),
        Err(_) => format!("HTTP error: {} {}", status, reason.unwrap_or("Unknown")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest::new("Minhas respostas", "Você é um especialista");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "systemInstruction": { "parts": [{ "text": "Você é um especialista" }] },
                "contents": [{ "role": "user", "parts": [{ "text": "Minhas respostas" }] }]
            })
        );
    }

    #[test]
    fn test_parse_text_joins_parts() {
        let body = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "### **[DIAGNÓSTICO]**\n" }, { "text": "Texto" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 42 }
        })
        .to_string();

        let text = GenerateContentResponse::parse_text(&body).unwrap();
        assert_eq!(text, "### **[DIAGNÓSTICO]**\nTexto");
    }

    #[test]
    fn test_parse_text_without_candidates() {
        let body = json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();

        let err = GenerateContentResponse::parse_text(&body).unwrap_err();
        assert!(matches!(err, GatewayError::Request(ref m) if m.contains("SAFETY")));
    }

    #[test]
    fn test_parse_text_empty_parts() {
        let body = json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "MAX_TOKENS" }]
        })
        .to_string();

        let err = GenerateContentResponse::parse_text(&body).unwrap_err();
        assert!(matches!(err, GatewayError::Request(ref m) if m.contains("MAX_TOKENS")));
    }

    #[test]
    fn test_parse_text_malformed() {
        let err = GenerateContentResponse::parse_text("<html>oops</html>").unwrap_err();
        assert!(matches!(err, GatewayError::Request(ref m) if m.contains("Malformed")));
    }

    #[test]
    fn test_describe_http_error_with_api_body() {
        let body = json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })
        .to_string();

        let desc = describe_http_error(400, Some("Bad Request"), &body);
        assert_eq!(desc, "HTTP 400 INVALID_ARGUMENT: API key not valid.");
    }

    #[test]
    fn test_describe_http_error_with_plain_body() {
        let desc = describe_http_error(503, Some("Service Unavailable"), "upstream down");
        assert_eq!(desc, "HTTP error: 503 Service Unavailable");
    }
}
