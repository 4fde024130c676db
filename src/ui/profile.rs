//! Account details and local settings.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{render_tab_selector, TabItem};
use super::helpers::panel_block;
use super::layout::{scroll_window, LayoutContext};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use crate::app::types::ProfileTab;
use crate::app::App;
use crate::settings::SettingField;

pub fn help_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.profile.tab {
        ProfileTab::Profile => vec![("tab", "settings"), ("o", "sign out")],
        ProfileTab::Settings => vec![
            ("↑/↓", "select"),
            ("enter", "change"),
            ("s", "save"),
            ("tab", "profile"),
        ],
    }
}

pub fn render_profile(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let tabs = [TabItem::new("Profile"), TabItem::new("Settings")];
    let selected = match app.profile.tab {
        ProfileTab::Profile => 0,
        ProfileTab::Settings => 1,
    };
    frame.render_widget(Paragraph::new(render_tab_selector(&tabs, Some(selected), ctx)), chunks[0]);

    match app.profile.tab {
        ProfileTab::Profile => render_account(frame, chunks[1], app),
        ProfileTab::Settings => render_settings(frame, chunks[1], app),
    }
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value, Style::default().fg(COLOR_HEADER)),
    ])
}

fn render_account(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block("Your profile", true);
    let Some(user) = app.stores.auth.user() else {
        frame.render_widget(
            Paragraph::new(Span::styled(" Not signed in", Style::default().fg(COLOR_DIM))).block(block),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            user.display_name(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Email", user.email.clone()),
        field("Style", user.preferences.communication_style.label().to_string()),
    ];
    if let Some(created) = user.created_at {
        lines.push(field("Member since", created.format("%B %Y").to_string()));
    }
    if let Some(profile) = &user.wellness_profile {
        lines.push(Line::from(""));
        if !profile.goals.is_empty() {
            lines.push(field("Working on", profile.goals.join(", ")));
        }
        if !profile.concerns.is_empty() {
            lines.push(field("Concerns", profile.concerns.join(", ")));
        }
    }
    lines.push(Line::from(""));
    lines.push(field(
        "Unread alerts",
        app.stores.notifications.unread_count().to_string(),
    ));

    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block("Settings", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    let mut selected_line = 0;
    let mut section = "";
    for (idx, setting) in SettingField::ALL.iter().enumerate() {
        if setting.section() != section {
            section = setting.section();
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                section,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            )));
        }
        let selected = idx == app.profile.setting_index;
        if selected {
            selected_line = lines.len();
        }
        let (marker, style) = if selected {
            ("▶ ", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(COLOR_DIM))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<26}", marker, setting.label()), style),
            Span::styled(app.settings.value_label(*setting), Style::default().fg(COLOR_HEADER)),
        ]));
    }

    let start = scroll_window(selected_line, lines.len(), inner.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((start as u16, 0)), inner);
}
