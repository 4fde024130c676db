//! UI rendering for the mindwell terminal client
//!
//! Every frame has the same skeleton:
//! - Tab bar (signed-in screens only)
//! - The current screen
//! - Key hints for that screen
//! - Toast overlay in the top-right corner
//!
//! ## Responsive Layout System
//!
//! Render functions receive a `LayoutContext` built from the frame size and
//! use it for proportional sizing (`bounded_width()`, `two_column_widths()`)
//! and to condense themselves on small terminals (`is_compact()`).

mod analytics;
mod auth;
mod chat;
pub mod components;
mod community;
mod crisis;
mod helpers;
pub mod layout;
mod mood;
mod notifications;
mod onboarding;
mod personalization;
mod profile;
pub mod theme;
mod tools;
mod welcome;

pub use layout::{breakpoints, LayoutContext};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::navigation::Screen;
use crate::toast::ToastKind;
use components::{render_tab_selector, TabItem};
use helpers::help_line;
use theme::{COLOR_ACCENT, COLOR_CRISIS, COLOR_DIALOG_BG, COLOR_ERROR, COLOR_SUCCESS};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole UI for the current screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let screen = app.navigator.current();

    let tab_height = if screen.shows_tab_bar() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(tab_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    if screen.shows_tab_bar() {
        render_tab_bar(frame, chunks[0], app, &ctx);
    }

    let body = chunks[1];
    match screen {
        Screen::Welcome => welcome::render_welcome(frame, body, &ctx),
        Screen::Onboarding => onboarding::render_onboarding(frame, body, app, &ctx),
        Screen::Auth => auth::render_auth(frame, body, app, &ctx),
        Screen::Chat => chat::render_chat(frame, body, app, &ctx),
        Screen::Mood => mood::render_mood(frame, body, app, &ctx),
        Screen::Tools => tools::render_tools(frame, body, app, &ctx),
        Screen::Profile => profile::render_profile(frame, body, app, &ctx),
        Screen::Analytics => analytics::render_analytics(frame, body, app, &ctx),
        Screen::Community => community::render_community(frame, body, app, &ctx),
        Screen::Notifications => notifications::render_notifications(frame, body, app),
        Screen::Crisis => crisis::render_crisis(frame, body, app, &ctx),
        Screen::Personalization => personalization::render_personalization(frame, body, app, &ctx),
    }

    frame.render_widget(Paragraph::new(help_line(&help_hints(app))), chunks[2]);

    render_toasts(frame, area, app);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let unread = app.stores.notifications.unread_count();
    let items: Vec<TabItem> = Screen::TABS
        .iter()
        .map(|screen| {
            let item = match screen {
                Screen::Community => TabItem::with_short_label(screen.title(), "Comm"),
                Screen::Personalization => TabItem::with_short_label(screen.title(), "You"),
                _ => TabItem::new(screen.title()),
            };
            if *screen == Screen::Notifications {
                item.badge(unread)
            } else {
                item
            }
        })
        .collect();
    let current = app.navigator.current();
    let selected = Screen::TABS.iter().position(|s| *s == current);

    frame.render_widget(Paragraph::new(render_tab_selector(&items, selected, ctx)), area);
}

/// Key hints for the bottom line. Open dialogs take precedence.
fn help_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = match app.navigator.current() {
        Screen::Welcome => vec![("enter", "get started"), ("l", "sign in"), ("q", "quit")],
        Screen::Onboarding => vec![
            ("←/→", "move"),
            ("space", "pick"),
            ("enter", "next"),
            ("esc", "back"),
        ],
        Screen::Auth => vec![
            ("tab", "next field"),
            ("enter", "submit"),
            ("ctrl+t", "login/register"),
            ("esc", "back"),
        ],
        Screen::Chat => vec![
            ("enter", "send"),
            ("↑/↓", "scroll"),
            ("ctrl+e", "read my mood"),
            ("ctrl+l", "clear"),
        ],
        Screen::Mood => vec![
            ("1-5", "mood"),
            ("tab", "section"),
            ("enter", "log"),
            ("i", "insights"),
        ],
        Screen::Tools => tools::help_hints(app),
        Screen::Profile => profile::help_hints(app),
        Screen::Analytics => vec![("p", "period"), ("r", "refresh")],
        Screen::Community => community::help_hints(app),
        Screen::Notifications => notifications::help_hints(app),
        Screen::Crisis => crisis::help_hints(app),
        Screen::Personalization => vec![
            ("space", "toggle"),
            ("s", "style"),
            ("1-5", "rate"),
            ("ctrl+s", "save"),
        ],
    };

    if app.navigator.shows_tab_bar() {
        hints.push(("ctrl+←/→", "tabs"));
    }
    if app.navigator.current() != Screen::Crisis {
        hints.push(("ctrl+g", "get help now"));
    }
    hints
}

fn render_toasts(frame: &mut Frame, area: Rect, app: &App) {
    for (idx, toast) in app.toaster.visible().enumerate() {
        let (icon, color) = match toast.kind {
            ToastKind::Info => ("●", COLOR_ACCENT),
            ToastKind::Success => ("✓", COLOR_SUCCESS),
            ToastKind::Error => ("✗", COLOR_ERROR),
        };
        let text = format!(" {} {} ", icon, toast.message);
        let width = (text.chars().count() as u16).min(area.width);
        let y = area.y + 1 + idx as u16;
        if y >= area.bottom() {
            break;
        }
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y,
            width,
            height: 1,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(color)
                    .bg(COLOR_DIALOG_BG)
                    .add_modifier(Modifier::BOLD),
            ))),
            rect,
        );
    }
}

/// Red banner shown when the assistant flagged a message as high risk.
pub(crate) fn crisis_banner() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " ⚠ You don't have to go through this alone. ",
            Style::default().fg(COLOR_CRISIS).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Press ctrl+g for crisis support.", Style::default().fg(COLOR_CRISIS)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::mock_app;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[tokio::test]
    async fn test_every_screen_renders() {
        let (mut app, _http, _tokens, _dir) = mock_app();
        let screens = [
            Screen::Welcome,
            Screen::Onboarding,
            Screen::Auth,
            Screen::Chat,
            Screen::Mood,
            Screen::Tools,
            Screen::Profile,
            Screen::Analytics,
            Screen::Community,
            Screen::Notifications,
            Screen::Crisis,
            Screen::Personalization,
        ];
        for screen in screens {
            app.navigator.navigate(screen);
            for (w, h) in [(120, 40), (80, 24), (50, 14)] {
                let buffer = draw(&app, w, h);
                assert!(
                    buffer.content().iter().any(|c| c.symbol() != " "),
                    "{:?} rendered blank at {}x{}",
                    screen,
                    w,
                    h
                );
            }
        }
    }

    #[tokio::test]
    async fn test_tab_bar_hidden_before_sign_in() {
        let (mut app, _http, _tokens, _dir) = mock_app();
        let text = buffer_text(&draw(&app, 120, 30));
        assert!(!text.contains("Community"));

        app.navigator.navigate(Screen::Mood);
        let text = buffer_text(&draw(&app, 120, 30));
        assert!(text.contains("Community"));
        assert!(text.contains("▶ Mood"));
    }

    #[tokio::test]
    async fn test_toast_is_drawn() {
        let (mut app, _http, _tokens, _dir) = mock_app();
        app.toaster.success("Mood logged");
        let text = buffer_text(&draw(&app, 80, 24));
        assert!(text.contains("Mood logged"));
    }

    #[tokio::test]
    async fn test_crisis_hint_everywhere_but_crisis() {
        let (mut app, _http, _tokens, _dir) = mock_app();
        app.navigator.navigate(Screen::Chat);
        assert!(help_hints(&app).iter().any(|(k, _)| *k == "ctrl+g"));
        app.navigator.navigate(Screen::Crisis);
        assert!(!help_hints(&app).iter().any(|(k, _)| *k == "ctrl+g"));
    }
}
