use scout_http::HttpError;
use thiserror::Error;

/// Failures surfaced by the Medium client and pipeline stages.
///
/// "Field legitimately absent" is never an error here: the two places where
/// absence is meaningful (next-page cursor, post references) are modelled as
/// `Option` in [`crate::medium::types`].
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Guard prefix missing, body not JSON, or a field present with the wrong shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// An expected field path was absent from the envelope.
    #[error("field not found: {path}")]
    NotFound { path: &'static str },

    /// Network failure, timeout, or non-2xx status.
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),
}

impl From<serde_json::Error> for ScoutError {
    fn from(e: serde_json::Error) -> Self {
        ScoutError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
