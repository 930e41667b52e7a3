use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the REST client collaborator
///
/// The adapter propagates these unchanged; retry and backoff policy
/// belongs to the client implementation, not to this core.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Venue rejected request (retCode {code}): {message}")]
    Rejected { code: i64, message: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Port for the signed REST client
///
/// Request signing, rate limiting and pagination live behind this trait.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// POST a JSON body to a venue path, returning the response body
    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}
