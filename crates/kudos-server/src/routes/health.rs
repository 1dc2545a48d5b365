use axum::Json;
use serde::Serialize;

use crate::routes::letters::StatusResponse;

#[derive(Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "Pong" })
}

pub async fn hello() -> Json<StatusResponse> {
    Json(StatusResponse::success("Hello"))
}
