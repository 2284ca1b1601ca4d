// src/routes/hello.rs

use axum::Json;

use crate::models::HelloResponse;

pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse::world())
}
