//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT)
//! - [`TokenStore`] - Bearer token persistence

pub mod http;
pub mod token_store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use token_store::TokenStore;
