// src/routes/mod.rs

pub mod health;
pub mod hello;
