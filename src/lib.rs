// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod errors;
pub mod extract;
pub mod feedback;
pub mod models;
pub mod providers;
pub mod redact;
pub mod runner;
