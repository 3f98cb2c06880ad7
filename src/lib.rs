pub mod app;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod market;
pub mod matching;
pub mod news;
pub mod pipeline;
pub mod portfolio;
pub mod seed;

pub use error::{FdError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
