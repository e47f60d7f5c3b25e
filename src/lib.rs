pub mod classifier;
pub mod config;
pub mod error;
pub mod log;
pub mod sentiment;

// Decoupled game loop architecture
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use error::{Error, Result};
pub use sentiment::Sentiment;
