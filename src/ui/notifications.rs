//! Notification inbox and delivery settings.

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::helpers::{format_age, panel_block};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::models::{NotificationKind, NotificationSetting};

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Reminder => "⏰",
        NotificationKind::Insight => "✦",
        NotificationKind::Community => "♥",
        NotificationKind::Goal => "◎",
        NotificationKind::System => "●",
    }
}

pub fn help_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.notifications.settings_open {
        vec![("↑/↓", "select"), ("space", "toggle"), ("esc", "close")]
    } else {
        vec![
            ("↑/↓", "select"),
            ("enter", "mark read"),
            ("a", "mark all"),
            ("s", "settings"),
        ]
    }
}

pub fn render_notifications(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.stores.notifications.snapshot();
    if app.notifications.settings_open {
        let lines: Vec<Line> = NotificationSetting::ALL
            .iter()
            .enumerate()
            .map(|(idx, setting)| {
                let selected = idx == app.notifications.setting_index;
                let check = if state.settings.get(*setting) { "[x]" } else { "[ ]" };
                let style = if selected {
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(COLOR_HEADER)
                };
                Line::from(vec![
                    Span::styled(if selected { "▶ " } else { "  " }, Style::default().fg(COLOR_ACCENT)),
                    Span::styled(format!("{} {}", check, setting.label()), style),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(panel_block("Notification settings", true)),
            area,
        );
        return;
    }
    let block = panel_block(&format!("Alerts · {} unread", state.unread_count()), true);

    if state.notifications.is_empty() {
        let line = if app.stores.notifications.is_loading() {
            render_status_indicator(&StatusIndicatorType::loading("Checking for alerts", app.tick_count))
        } else {
            render_status_indicator(&StatusIndicatorType::empty("You're all caught up"))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = state
        .notifications
        .iter()
        .map(|n| {
            let title_style = if n.read {
                Style::default().fg(COLOR_DIM)
            } else {
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
            };
            let mut header = vec![
                Span::styled(format!("{} ", kind_icon(n.kind)), Style::default().fg(COLOR_ACCENT)),
                Span::styled(n.title.clone(), title_style),
            ];
            if let Some(at) = n.created_at {
                header.push(Span::styled(format!("  {}", format_age(at, now)), Style::default().fg(COLOR_DIM)));
            }
            let mut lines = vec![Line::from(header)];
            if !n.body.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {}", n.body), Style::default().fg(COLOR_DIM))));
            }
            ListItem::new(lines)
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(app.notifications.selected));
    let list = List::new(items)
        .block(block)
        .highlight_symbol("▶ ")
        .highlight_style(Style::default().fg(COLOR_ACCENT));
    frame.render_stateful_widget(list, area, &mut list_state);
}
