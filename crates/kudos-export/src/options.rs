use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Per-deployment rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Full-page background image drawn behind the letter.
    pub background_image: PathBuf,

    /// When set, the rendered HTML is also written here after a
    /// successful PDF write.
    #[serde(default)]
    pub debug_html: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background_image: PathBuf::from("background.png"),
            debug_html: None,
        }
    }
}

impl RenderOptions {
    /// `file://` URL of the background image, resolved against the working
    /// directory. The file does not have to exist yet.
    pub fn background_url(&self) -> Result<String, ExportError> {
        let absolute = std::path::absolute(&self.background_image)?;
        Ok(format!("file://{}", absolute.display()))
    }
}
