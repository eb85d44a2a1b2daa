//! Console task tracker with a password-gated task menu, persisted to JSON files.

pub mod app;
pub mod auth;
pub mod config;
pub mod prompt;
pub mod state;
pub mod storage;
pub mod tasks;
