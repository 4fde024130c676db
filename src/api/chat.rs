use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{AnalyzeEmotionRequest, ChatMessage, EmotionalAnalysis, SendMessageRequest};

/// History page size used when the caller has no preference.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

impl ApiClient {
    /// `POST /chat/send`
    ///
    /// Returns the AI reply only; the user's message is not echoed.
    pub async fn send_chat_message(&self, content: &str) -> ApiResult<ChatMessage> {
        let request = SendMessageRequest {
            content: content.to_string(),
        };
        self.post_json("/chat/send", &request).await
    }

    /// `GET /chat/history?limit=N`
    pub async fn chat_history(&self, limit: u32) -> ApiResult<Vec<ChatMessage>> {
        self.get_json(&format!("/chat/history?limit={}", limit))
            .await
    }

    /// `POST /chat/analyze-emotion`
    pub async fn analyze_emotion(&self, text: &str) -> ApiResult<EmotionalAnalysis> {
        let request = AnalyzeEmotionRequest {
            text: text.to_string(),
        };
        self.post_json("/chat/analyze-emotion", &request).await
    }
}
