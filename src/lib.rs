pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod session;
pub mod transcript;
pub mod ui;
