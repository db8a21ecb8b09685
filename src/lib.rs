pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod render;
pub mod summary;
pub mod viewer;
