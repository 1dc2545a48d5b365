use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::HOST;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kudos_core::media::{letter_filename, media_url};
use kudos_core::models::letter::{LetterData, LetterRequest};
use kudos_core::sender::load_sender;
use kudos_export::writer::{WrittenLetter, write_letter};

use crate::error::ApiError;
use crate::state::AppState;

/// `{"status": ..., "message": ...}` envelope shared by the JSON endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "Success".to_string(),
            message: message.into(),
        }
    }
}

/// Render a letter to `media/letter_<id>.pdf` and return its public URL.
pub async fn generate_letter(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LetterRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(request) = payload?;
    let entity_type = request.entity_type();

    let filename = letter_filename(Uuid::new_v4());
    tokio::fs::create_dir_all(&state.config.media_dir).await?;
    let output = state.config.media_dir.join(&filename);

    let written = tokio::task::spawn_blocking({
        let state = state.clone();
        move || -> Result<WrittenLetter, ApiError> {
            let sender = load_sender(&state.config.sender_config)?;
            let data = LetterData::merge(request, sender);
            let written = write_letter(
                &state.templates,
                state.renderer.as_ref(),
                &data,
                &state.render_options,
                &output,
            )?;
            Ok(written)
        }
    })
    .await??;

    let url = media_url(&base_url(&state, &headers), &filename);
    tracing::info!(
        entity_type = %entity_type,
        file = %filename,
        bytes = written.bytes,
        "letter generated"
    );

    Ok(Json(StatusResponse::success(url)))
}

/// Configured public URL, else `http://<Host>/`, else the bind address.
fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.config.public_url {
        return url.clone();
    }

    match headers.get(HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{host}/"),
        None => format!("http://{}/", state.config.bind),
    }
}
