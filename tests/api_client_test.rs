//! ApiClient over the real reqwest adapter, against a wiremock backend.

use std::sync::Arc;

use mindwell::adapters::mock::InMemoryTokenStore;
use mindwell::adapters::{FileTokenStore, ReqwestHttpClient};
use mindwell::api::ApiClient;
use mindwell::error::{ApiError, MindwellError};
use mindwell::models::{
    AnalyticsPeriod, CategoryFilter, CrisisSeverity, HistoryPeriod, MoodLevel, NewMoodEntry,
    PostCategory, TherapyType, TrackInteraction,
};
use mindwell::storage::LocalStore;
use mindwell::stores::AuthStore;
use mindwell::traits::TokenStore;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, tokens: InMemoryTokenStore) -> ApiClient {
    ApiClient::new(
        format!("{}/api", server.uri()),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(tokens),
    )
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mood/history"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("tok-123"));
    let history = api.mood_history(HistoryPeriod::Week).await.unwrap();

    assert!(history.is_empty());
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/community/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::new());
    api.community_posts(CategoryFilter::All).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_history_period_sent_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mood/history"))
        .and(query_param("period", "month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m1", "level": 2, "timestamp": "2026-10-14T09:30:00Z"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("tok"));
    let history = api.mood_history(HistoryPeriod::Month).await.unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].level.value(), 2);
}

#[tokio::test]
async fn test_category_filter_sent_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/community/posts"))
        .and(query_param("category", "anxiety"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "content": "breathing helps", "category": "anxiety"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("tok"));
    let posts = api
        .community_posts(CategoryFilter::Only(PostCategory::Anxiety))
        .await
        .unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].category, PostCategory::Anxiety);
}

#[tokio::test]
async fn test_mood_body_is_camel_case_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/mood/log"))
        .and(body_json(json!({"level": 4, "emotion": "calm", "triggers": ["sleep"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "m9",
            "level": 4,
            "emotion": "calm",
            "triggers": ["sleep"],
            "timestamp": "2026-10-15T08:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("tok"));
    let entry = NewMoodEntry {
        level: MoodLevel::new(4).unwrap(),
        emotion: Some("calm".to_string()),
        notes: None,
        triggers: vec!["sleep".to_string()],
    };
    let saved = api.log_mood(&entry).await.unwrap();

    assert_eq!(saved.id, "m9");
}

#[tokio::test]
async fn test_wellness_tool_paths() {
    let server = MockServer::start().await;
    let session = json!({"id": "s1", "type": "mindfulness"});
    Mock::given(method("POST"))
        .and(path("/api/therapy/start-session"))
        .and(body_json(json!({"type": "mindfulness"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(session.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/therapy/breathing-exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "b1", "name": "Box", "inhaleDuration": 4, "holdDuration": 4,
             "exhaleDuration": 4, "cycles": 4}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/therapy/mindfulness-sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/goals/g1/complete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "g1", "title": "Walk daily", "category": "physical",
            "progress": 100, "completed": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("tok"));
    let started = api.start_session(TherapyType::Mindfulness).await.unwrap();
    let patterns = api.breathing_exercises().await.unwrap();
    let sessions = api.mindfulness_sessions().await.unwrap();
    let goal = api.complete_goal("g1").await.unwrap();

    assert_eq!(started.id, "s1");
    assert_eq!(patterns[0].inhale_duration, 4);
    assert!(sessions.is_empty());
    assert!(goal.completed);
}

#[tokio::test]
async fn test_insight_and_support_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics"))
        .and(query_param("period", "quarter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"goalProgress": 40})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/progress-report"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"goalsCompleted": 2})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/insights"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Sleep is steadier"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/analyze-emotion"))
        .and(body_json(json!({"text": "I feel on edge"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentiment": "negative", "emotions": ["anxious"], "intensity": 6, "riskLevel": "medium"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/crisis/support"))
        .and(body_json(json!({"severity": "high"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"contactsNotified": 2})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/personalization/track-interaction"))
        .and(body_json(json!({"interaction": "Evening wind-down", "effectiveness": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("tok"));
    let data = api.analytics(AnalyticsPeriod::Quarter).await.unwrap();
    let report = api.progress_report().await.unwrap();
    let insights = api.analytics_insights().await.unwrap();
    let analysis = api.analyze_emotion("I feel on edge").await.unwrap();
    let receipt = api.trigger_crisis_support(CrisisSeverity::High).await.unwrap();
    api.track_interaction(&TrackInteraction {
        interaction: "Evening wind-down".to_string(),
        effectiveness: 4,
    })
    .await
    .unwrap();

    assert_eq!(data.goal_progress, 40.0);
    assert_eq!(report.goals_completed, 2);
    assert_eq!(insights, vec!["Sleep is steadier".to_string()]);
    assert_eq!(analysis.primary_emotion(), Some("anxious"));
    assert_eq!(receipt.contacts_notified, 2);
}

#[tokio::test]
async fn test_error_message_taken_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/community/posts/p1/like"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Post not found"})),
        )
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("tok"));
    let err = api.like_post("p1").await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Post not found");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_field_used_when_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/goals"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "database down"})))
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("tok"));
    let err = api.goals().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("database down"));
}

#[tokio::test]
async fn test_unauthorized_is_flagged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("stale"));
    let err = api.current_user().await.unwrap_err();

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let api = client(&server, InMemoryTokenStore::with_token("tok"));
    let err = api.notifications().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on port 9 on a test host
    let api = ApiClient::new(
        "http://127.0.0.1:9/api",
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(InMemoryTokenStore::new()),
    );
    let err = api.goals().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_login_persists_token_on_disk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "sam@example.com", "password": "hunter22"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-fresh",
            "user": {"id": "u1", "email": "sam@example.com", "firstName": "Sam"}
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let tokens = FileTokenStore::new(LocalStore::new(dir.path()));
    let api = ApiClient::new(
        format!("{}/api", server.uri()),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(tokens.clone()),
    );
    let auth = AuthStore::new(api);

    let user = auth.login("sam@example.com", "hunter22").await.unwrap();

    assert_eq!(user.first_name, "Sam");
    assert_eq!(tokens.token().as_deref(), Some("jwt-fresh"));
    assert!(auth.is_authenticated());

    auth.logout().unwrap();
    assert!(!tokens.has_token());
    assert!(auth.user().is_none());
}

#[tokio::test]
async fn test_failed_login_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let tokens = InMemoryTokenStore::new();
    let auth = AuthStore::new(client(&server, tokens.clone()));

    let err = auth.login("sam@example.com", "wrong-pass").await.unwrap_err();

    assert!(matches!(err, MindwellError::Api(ref e) if e.is_unauthorized()));
    assert!(!tokens.has_token());
    assert!(!auth.is_authenticated());
}
