//! GitHub Gists API SDK for Rust.
//!
//! This crate provides a client for fetching, listing, creating and editing
//! gists through the GitHub REST API.

mod client;
mod credential;
mod error;
mod files;
mod gist;
pub mod http;
mod types;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use credential::Credential;
pub use error::{Error, Result};
pub use files::LocalFiles;
pub use gist::GistService;
pub use types::{
    CreateGistRequest, EditGistRequest, FileContent, FileEdit, Gist, GistFile, GistFiles, Owner,
    Visibility,
};
