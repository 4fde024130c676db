//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mindwell::adapters::mock::{InMemoryTokenStore, MockHttpClient};
use mindwell::api::ApiClient;
use mindwell::app::{App, AppMessage};
use mindwell::storage::LocalStore;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;

pub const BASE: &str = "http://api.test";

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

/// Everything a flow test needs: the app, its message receiver and the
/// mocks behind it. Keep `_dir` alive for the duration of the test.
pub struct Harness {
    pub app: App,
    pub rx: UnboundedReceiver<AppMessage>,
    pub http: MockHttpClient,
    pub tokens: InMemoryTokenStore,
    pub _dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_tokens(InMemoryTokenStore::new())
    }

    pub fn signed_in() -> Self {
        Self::with_tokens(InMemoryTokenStore::with_token("tok-123"))
    }

    fn with_tokens(tokens: InMemoryTokenStore) -> Self {
        let http = MockHttpClient::new();
        let api = ApiClient::new(BASE, Arc::new(http.clone()), Arc::new(tokens.clone()));
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = App::new(api, LocalStore::new(dir.path()));
        let rx = app.message_rx.take().expect("receiver is present on a new app");
        Self {
            app,
            rx,
            http,
            tokens,
            _dir: dir,
        }
    }

    /// Wait for the next message from a spawned action and apply it.
    pub async fn pump(&mut self) -> AppMessage {
        let msg = self.rx.recv().await.expect("message channel open");
        self.app.handle_message(msg.clone());
        msg
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn press_ctrl(&mut self, c: char) {
        self.app
            .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }
}

pub fn user_json() -> Value {
    json!({
        "id": "u1",
        "email": "sam@example.com",
        "firstName": "Sam",
        "lastName": "Rivera",
        "preferences": {}
    })
}

pub fn mood_entry_json(id: &str, level: u8) -> Value {
    json!({
        "id": id,
        "level": level,
        "emotion": "calm",
        "triggers": ["work"],
        "timestamp": "2026-10-14T09:30:00Z"
    })
}

pub fn post_json(id: &str, category: &str, likes: u32) -> Value {
    json!({
        "id": id,
        "authorName": "Alex",
        "content": format!("post {}", id),
        "category": category,
        "isAnonymous": false,
        "likes": likes,
        "comments": []
    })
}
