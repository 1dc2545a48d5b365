use std::sync::Arc;

use kudos_export::error::ExportError;
use kudos_export::options::RenderOptions;
use kudos_export::pdf::HtmlToPdf;
use kudos_export::render::LetterTemplates;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub render_options: Arc<RenderOptions>,
    pub templates: Arc<LetterTemplates>,
    pub renderer: Arc<dyn HtmlToPdf>,
}

impl AppState {
    pub fn new(config: ServerConfig, renderer: Arc<dyn HtmlToPdf>) -> Result<Self, ExportError> {
        Ok(Self {
            render_options: Arc::new(config.render_options()),
            config: Arc::new(config),
            templates: Arc::new(LetterTemplates::new()?),
            renderer,
        })
    }
}
