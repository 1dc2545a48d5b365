use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("recipient does not match entity type {entity_type}: {reason}")]
    RecipientMismatch { entity_type: String, reason: String },

    #[error("invalid date format: {input}")]
    DateFormat { input: String },

    #[error("failed to read sender config at {}: {source}", .path.display())]
    SenderConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sender config at {}: {source}", .path.display())]
    SenderConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    /// True for errors caused by operator-supplied configuration rather
    /// than by the request.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CoreError::SenderConfigRead { .. } | CoreError::SenderConfigParse { .. }
        )
    }
}
