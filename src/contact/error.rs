use serde::Deserialize;
use thiserror::Error;

pub const REJECTED_FALLBACK: &str = "There was an error sending your message.";
pub const TRANSPORT_FALLBACK: &str =
    "There was an error sending your message. Please try again later.";

/// A submission that got past validation but was not accepted.
/// The `Display` text is what the visitor sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

impl SubmissionError {
    /// Builds a rejection from the response body, using its `error` field when
    /// the body is JSON that carries one.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|resp| resp.error)
            .filter(|error| !error.trim().is_empty())
            .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
        SubmissionError::Rejected { status, message }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            SubmissionError::Transport(TRANSPORT_FALLBACK.to_string())
        } else {
            SubmissionError::Transport(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_uses_error_field() {
        let err = SubmissionError::rejected(422, r#"{"error":"Too many requests"}"#);
        assert_eq!(
            err,
            SubmissionError::Rejected { status: 422, message: "Too many requests".to_string() }
        );
        assert_eq!(err.to_string(), "Too many requests");
    }

    #[test]
    fn rejection_without_usable_error_falls_back() {
        for body in ["", "<html>oops</html>", "{}", r#"{"error":""}"#, r#"{"error":42}"#, "null"] {
            assert_eq!(
                SubmissionError::rejected(500, body).to_string(),
                REJECTED_FALLBACK,
                "body {body:?}"
            );
        }
    }

    #[test]
    fn rejection_ignores_other_fields() {
        let err = SubmissionError::rejected(400, r#"{"ok":false,"error":"Bad form","errors":[]}"#);
        assert_eq!(err.to_string(), "Bad form");
    }

    #[test]
    fn transport_error_keeps_message_unless_empty() {
        assert_eq!(SubmissionError::transport("Failed to fetch").to_string(), "Failed to fetch");
        assert_eq!(SubmissionError::transport("").to_string(), TRANSPORT_FALLBACK);
    }
}
