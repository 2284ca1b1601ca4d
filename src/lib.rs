// src/lib.rs

pub mod clipboard;
pub mod content;
pub mod models;
pub mod routes;
pub mod server;
pub mod view;
