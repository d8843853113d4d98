pub mod app;
pub mod assemble;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod prompt;
pub mod tokens;
pub mod walker;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
