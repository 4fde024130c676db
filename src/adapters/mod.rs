//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileTokenStore`] - Bearer token kept in the local data directory
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses, recorded requests
//! - [`mock::InMemoryTokenStore`] - In-memory token storage

pub mod file_token_store;
pub mod mock;
pub mod reqwest_http;

pub use file_token_store::FileTokenStore;
pub use mock::{InMemoryTokenStore, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
