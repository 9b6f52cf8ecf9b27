//! CLI utilities for gistkit.
//!
//! This crate provides common utilities for CLI applications.

pub mod config;
pub mod token;

pub use config::{load_config, mask_token, Config, Context};
pub use token::{load_token_file, DEFAULT_TOKEN_FILE};
