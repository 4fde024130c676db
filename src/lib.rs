//! mindwell - a terminal client for a mental-wellness platform
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod breathing;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod selection;
pub mod settings;
pub mod storage;
pub mod stores;
pub mod toast;
pub mod traits;
pub mod ui;
pub mod validation;
pub mod widgets;
