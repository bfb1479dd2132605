// src/api/handlers/mod.rs
mod chat;
mod health;

pub use chat::chat;
pub use health::health_check;
