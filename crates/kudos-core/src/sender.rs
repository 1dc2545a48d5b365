use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The signing party, loaded from a preset file rather than the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SenderInfo {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    /// Path, URL or data URL of the signature image.
    pub signature: String,
}

/// Read the sender preset. Called per request so the file can be swapped
/// without restarting the server.
pub fn load_sender(path: &Path) -> Result<SenderInfo, CoreError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CoreError::SenderConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CoreError::SenderConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
