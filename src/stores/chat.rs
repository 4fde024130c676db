use chrono::Utc;

use super::{LoadingFlag, Shared};
use crate::api::{ApiClient, DEFAULT_HISTORY_LIMIT};
use crate::error::ApiResult;
use crate::models::{ChatMessage, EmotionalAnalysis};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    /// Conversation in send order.
    pub messages: Vec<ChatMessage>,
    /// Result of the last emotion analysis of a draft.
    pub last_analysis: Option<EmotionalAnalysis>,
}

#[derive(Debug, Clone)]
pub struct ChatStore {
    api: ApiClient,
    state: Shared<ChatState>,
    loading: LoadingFlag,
}

impl ChatStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Shared::new(ChatState::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn snapshot(&self) -> ChatState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Send a message and return the AI reply.
    ///
    /// The user's message is appended before the request goes out and stays
    /// in the conversation when the request fails. The reply is appended
    /// after it on success.
    pub async fn send_message(&self, content: &str) -> ApiResult<ChatMessage> {
        let _loading = self.loading.begin();
        self.state
            .lock()
            .messages
            .push(ChatMessage::local_user(content, Utc::now()));

        let reply = self.api.send_chat_message(content).await?;
        if reply.is_high_risk() {
            tracing::warn!("AI reply flagged high risk");
        }
        self.state.lock().messages.push(reply.clone());
        Ok(reply)
    }

    pub async fn fetch_history(&self) -> ApiResult<Vec<ChatMessage>> {
        self.fetch_history_limited(DEFAULT_HISTORY_LIMIT).await
    }

    pub async fn fetch_history_limited(&self, limit: u32) -> ApiResult<Vec<ChatMessage>> {
        let _loading = self.loading.begin();
        let messages = self.api.chat_history(limit).await?;
        self.state.lock().messages = messages.clone();
        Ok(messages)
    }

    /// Ask the server for an emotional read of `text` without sending it.
    pub async fn analyze_emotion(&self, text: &str) -> ApiResult<EmotionalAnalysis> {
        let _loading = self.loading.begin();
        let analysis = self.api.analyze_emotion(text).await?;
        self.state.lock().last_analysis = Some(analysis.clone());
        Ok(analysis)
    }

    /// Forget the local conversation. The server copy is untouched.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.messages.clear();
        state.last_analysis = None;
    }
}
