use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use kudos_export::options::RenderOptions;

const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Generated letters are written here and served under `/media`.
    pub media_dir: PathBuf,
    /// JSON preset describing the signing party.
    pub sender_config: PathBuf,
    pub background_image: PathBuf,
    /// Base address used in returned links. Derived from the `Host` header
    /// when unset.
    pub public_url: Option<String>,
    pub weasyprint: PathBuf,
    pub debug_html: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("KUDOS_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse()
            .map_err(|e| eyre::eyre!("invalid KUDOS_BIND {bind_raw:?}: {e}"))?;

        Ok(Self {
            bind,
            media_dir: get("KUDOS_MEDIA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("media")),
            sender_config: get("KUDOS_SENDER_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("sender.json")),
            background_image: get("KUDOS_BACKGROUND")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("background.png")),
            public_url: get("KUDOS_PUBLIC_URL"),
            weasyprint: get("KUDOS_WEASYPRINT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("weasyprint")),
            debug_html: get("KUDOS_DEBUG_HTML").map(PathBuf::from),
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            background_image: self.background_image.clone(),
            debug_html: self.debug_html.clone(),
        }
    }
}
