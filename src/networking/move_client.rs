//! Client for the remote move-suggestion service
//!
//! The service receives the current position and answers with the move it
//! wants to play:
//!
//! ```text
//! POST <endpoint>            {"fen": "<FEN>"}
//! 200 OK                     {"move": "<SAN>"}
//! ```
//!
//! No authentication and no retries. Anything other than a 2xx response with
//! a `move` string is an error.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from a move request
#[derive(Error, Debug)]
pub enum MoveServiceError {
    /// Connection, timeout or other transport failure
    #[error("Move service transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("Move service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not `{"move": "<SAN>"}`
    #[error("Malformed move service response: {message}")]
    MalformedBody { message: String },

    /// No endpoint is configured
    #[error("No move service configured")]
    Unavailable,
}

/// Anything that can suggest a move for a position
///
/// Calls block; callers run them off the main thread.
pub trait MoveSuggestionClient: Send + Sync + 'static {
    /// Suggested move, in SAN, for the position `fen`
    fn suggest_move(&self, fen: &str) -> Result<String, MoveServiceError>;
}

#[derive(Serialize)]
struct MoveRequestBody<'a> {
    fen: &'a str,
}

#[derive(Deserialize)]
struct MoveResponseBody {
    #[serde(rename = "move")]
    mv: String,
}

/// JSON-over-HTTP client for the move service
#[derive(Debug, Clone)]
pub struct HttpMoveClient {
    client: Client,
    endpoint: String,
}

impl HttpMoveClient {
    /// Client posting to `endpoint`; `timeout` of `None` waits indefinitely
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, MoveServiceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MoveSuggestionClient for HttpMoveClient {
    fn suggest_move(&self, fen: &str) -> Result<String, MoveServiceError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&MoveRequestBody { fen })
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(MoveServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_move_body(&body)
    }
}

/// Extract the suggested move from a response body
pub fn parse_move_body(body: &str) -> Result<String, MoveServiceError> {
    serde_json::from_str::<MoveResponseBody>(body)
        .map(|parsed| parsed.mv)
        .map_err(|err| MoveServiceError::MalformedBody {
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_body() {
        assert_eq!(parse_move_body(r#"{"move":"Nf3"}"#).unwrap(), "Nf3");
        assert_eq!(
            parse_move_body(r#"{"move":"e5","reasoning":"center"}"#).unwrap(),
            "e5"
        );
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for body in ["", "e5", r#"{"mv":"e5"}"#, r#"{"move":5}"#, "[]"] {
            assert!(
                matches!(
                    parse_move_body(body),
                    Err(MoveServiceError::MalformedBody { .. })
                ),
                "accepted {:?}",
                body
            );
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(MoveRequestBody { fen: "8/8/8/8/8/8/8/8 w - - 0 1" }).unwrap();
        assert_eq!(body, serde_json::json!({ "fen": "8/8/8/8/8/8/8/8 w - - 0 1" }));
    }
}
