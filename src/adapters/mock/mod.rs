//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryTokenStore`] - In-memory bearer token storage

pub mod http;
pub mod token;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use token::InMemoryTokenStore;
