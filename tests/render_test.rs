//! Store data reaching the screen.

mod common;

use common::{post_json, url, Harness};
use mindwell::adapters::mock::MockResponse;
use mindwell::app::types::ToolPanel;
use mindwell::app::App;
use mindwell::models::{AnalyticsPeriod, CategoryFilter, CrisisSeverity};
use mindwell::navigation::Screen;
use mindwell::ui;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;

fn screen_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_community_feed_shows_loaded_posts() {
    let mut h = Harness::signed_in();
    h.http.set_method_response(
        "GET",
        &url("/community/posts"),
        MockResponse::json(json!([
            post_json("p1", "support", 2),
            post_json("p2", "success", 0)
        ])),
    );
    h.app
        .stores
        .community
        .fetch_posts(CategoryFilter::All)
        .await
        .unwrap();
    h.app.navigator.navigate(Screen::Community);

    let text = screen_text(&h.app, 120, 40);

    assert!(text.contains("post p1"));
    assert!(text.contains("post p2"));
}

#[tokio::test]
async fn test_hotlines_shown_without_network() {
    let mut h = Harness::new();
    h.app.navigator.navigate(Screen::Crisis);

    let text = screen_text(&h.app, 120, 40);

    assert!(text.contains("988"));
    assert!(h.http.get_requests().is_empty());
}

#[tokio::test]
async fn test_dashboard_shows_report_and_insights() {
    let mut h = Harness::signed_in();
    h.http.set_method_response(
        "GET",
        &url("/analytics?period=month"),
        MockResponse::json(json!({
            "moodTrend": [3, 4, 4],
            "goalProgress": 60,
            "therapySessionCount": 7,
            "insights": ["Bundled insight"],
            "recommendations": ["Try a body scan"]
        })),
    );
    h.http.set_method_response(
        "GET",
        &url("/analytics/progress-report"),
        MockResponse::json(json!({"summary": "A steadier month", "goalsCompleted": 3})),
    );
    h.http.set_method_response(
        "GET",
        &url("/analytics/insights"),
        MockResponse::json(json!(["You sleep better after walks"])),
    );
    let analytics = h.app.stores.analytics.clone();
    analytics.fetch_analytics(AnalyticsPeriod::Month).await.unwrap();
    analytics.fetch_progress_report().await.unwrap();
    analytics.fetch_insights().await.unwrap();
    h.app.navigator.navigate(Screen::Analytics);

    let text = screen_text(&h.app, 140, 40);

    assert!(text.contains("60% goal progress"));
    assert!(text.contains("A steadier month"));
    assert!(text.contains("You sleep better after walks"));
    assert!(!text.contains("Bundled insight"));
    assert!(text.contains("Try a body scan"));
}

#[tokio::test]
async fn test_mindfulness_panel_lists_sessions() {
    let mut h = Harness::signed_in();
    h.http.set_method_response(
        "GET",
        &url("/therapy/mindfulness-sessions"),
        MockResponse::json(json!([{
            "id": "ms1", "name": "Evening scan", "duration": 12,
            "guided": true, "category": "body-scan"
        }])),
    );
    h.app
        .stores
        .therapy
        .fetch_mindfulness_sessions()
        .await
        .unwrap();
    h.app.navigator.navigate(Screen::Tools);
    h.app.tools.panel = ToolPanel::Mindfulness;

    let text = screen_text(&h.app, 120, 40);

    assert!(text.contains("Evening scan"));
    assert!(text.contains("Body scan · 12 min · guided"));
}

#[tokio::test]
async fn test_support_confirm_shows_severity() {
    let mut h = Harness::signed_in();
    h.app.navigator.navigate(Screen::Crisis);
    h.app.crisis.support_confirm = Some(CrisisSeverity::Medium);

    let text = screen_text(&h.app, 120, 40);

    assert!(text.contains("Request crisis support?"));
    assert!(text.contains(CrisisSeverity::Medium.label()));
}

#[tokio::test]
async fn test_notification_settings_panel() {
    let mut h = Harness::signed_in();
    h.app.navigator.navigate(Screen::Notifications);
    h.app.notifications.settings_open = true;

    let text = screen_text(&h.app, 120, 40);

    assert!(text.contains("Notification settings"));
    assert!(text.contains("[ ]"));
    assert!(text.contains("[x]"));
}
