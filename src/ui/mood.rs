//! Mood check-in, history and insights.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::helpers::{format_age, panel_block, tag_picker_line, truncate_string};
use super::layout::LayoutContext;
use super::theme::{mood_color, COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use crate::app::forms::{MoodForm, MoodSection};
use crate::app::App;
use crate::models::{MoodInsights, MoodLevel, MoodTrend, EMOTIONS};
use crate::stores::MoodState;
use crate::widgets::InputBoxWidget;

pub fn render_mood(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let chunks = if ctx.should_stack_panels() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(14), Constraint::Min(3)])
            .split(area)
    } else {
        let (left, _) = ctx.two_column_widths();
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(left.max(44)), Constraint::Min(20)])
            .split(area)
    };

    render_check_in(frame, chunks[0], &app.mood.form);

    let state = app.stores.mood.snapshot();
    if app.mood.show_insights {
        render_insights(frame, chunks[1], state.insights.as_ref());
    } else {
        render_history(frame, chunks[1], &state, app);
    }
}

fn section_label(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER)
    };
    Line::from(Span::styled(label.to_string(), style))
}

fn render_check_in(frame: &mut Frame, area: Rect, form: &MoodForm) {
    let block = panel_block("How are you feeling?", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(2),
            Constraint::Length(3),
        ])
        .split(inner);

    let mut levels = Vec::new();
    for level in MoodLevel::all() {
        let value = level.value();
        let mut style = Style::default().fg(mood_color(value));
        if form.level == Some(value) {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        levels.push(Span::styled(format!(" {} {} ", value, level.label()), style));
    }
    frame.render_widget(
        Paragraph::new(vec![
            section_label("Mood", form.section == MoodSection::Level),
            Line::from(levels),
        ])
        .wrap(Wrap { trim: false }),
        rows[0],
    );

    let emotion_focused = form.section == MoodSection::Emotion;
    let emotions: Vec<Span> = EMOTIONS
        .iter()
        .enumerate()
        .map(|(idx, emotion)| {
            let mut style = if form.emotion == Some(*emotion) {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            if emotion_focused && idx == form.emotion_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Span::styled(format!("{}  ", emotion), style)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(vec![
            section_label("Emotion", emotion_focused),
            Line::from(emotions),
        ])
        .wrap(Wrap { trim: false }),
        rows[1],
    );

    let triggers_focused = form.section == MoodSection::Triggers;
    frame.render_widget(
        Paragraph::new(vec![
            section_label("What's affecting you?", triggers_focused),
            tag_picker_line(&form.triggers, triggers_focused),
        ])
        .wrap(Wrap { trim: false }),
        rows[2],
    );

    frame.render_widget(
        InputBoxWidget::new(&form.notes, "Notes", form.section == MoodSection::Notes),
        rows[3],
    );
}

fn render_history(frame: &mut Frame, area: Rect, state: &MoodState, app: &App) {
    let block = panel_block("Recent check-ins", false);
    if state.history.is_empty() {
        let line = if app.stores.mood.is_loading() {
            render_status_indicator(&StatusIndicatorType::loading("Loading history", app.tick_count))
        } else {
            render_status_indicator(&StatusIndicatorType::empty("No check-ins yet"))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let now = Utc::now();
    let width = area.width.saturating_sub(20) as usize;
    let items: Vec<ListItem> = state
        .history
        .iter()
        .map(|entry| {
            let level = entry.level.value();
            let mut spans = vec![
                Span::styled(
                    format!("{:>6} ", format_age(entry.timestamp, now)),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(
                    format!("{} {}", "●".repeat(level as usize), entry.level.label()),
                    Style::default().fg(mood_color(level)),
                ),
            ];
            if let Some(emotion) = &entry.emotion {
                spans.push(Span::styled(format!("  {}", emotion), Style::default().fg(COLOR_HEADER)));
            }
            if let Some(notes) = &entry.notes {
                spans.push(Span::styled(
                    format!("  {}", truncate_string(notes, width)),
                    Style::default().fg(COLOR_DIM),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_insights(frame: &mut Frame, area: Rect, insights: Option<&MoodInsights>) {
    let block = panel_block("Insights", false);
    let Some(insights) = insights else {
        let line = render_status_indicator(&StatusIndicatorType::empty(
            "Log a few check-ins to see insights",
        ));
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    };

    let trend = match insights.trend {
        MoodTrend::Improving => "↗ improving",
        MoodTrend::Stable => "→ steady",
        MoodTrend::Declining => "↘ dipping",
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Average  ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("{:.1}", insights.average_level),
                Style::default()
                    .fg(mood_color(insights.average_level.round() as u8))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("   {}", trend), Style::default().fg(COLOR_HEADER)),
        ]),
        Line::from(vec![
            Span::styled("Streak   ", Style::default().fg(COLOR_DIM)),
            Span::raw(format!("{} days", insights.streak_days)),
        ]),
    ];
    if !insights.common_triggers.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Triggers ", Style::default().fg(COLOR_DIM)),
            Span::raw(insights.common_triggers.join(", ")),
        ]));
    }
    lines.push(Line::from(""));
    for suggestion in &insights.suggestions {
        lines.push(Line::from(vec![
            Span::styled("✦ ", Style::default().fg(COLOR_ACCENT)),
            Span::raw(suggestion.clone()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
