// src/models/mod.rs

use serde::{Deserialize, Serialize};

// ───────────────────────────────────────
// Wire types shared by the server handlers
// and the view's health-check client
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            status: "ok".into(),
            message: "Backend running".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub hello: String,
}

impl HelloResponse {
    pub fn world() -> Self {
        Self { hello: "world".into() }
    }
}
