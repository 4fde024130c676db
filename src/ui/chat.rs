//! Conversation with the AI companion.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::components::{get_spinner_char, render_status_indicator, StatusIndicatorType};
use super::helpers::{format_age, panel_block};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_AI, COLOR_DIM, COLOR_WARNING};
use crate::app::App;
use crate::models::ChatMessage;
use crate::widgets::InputBoxWidget;

/// Rows a set of lines takes once wrapped to `viewport_width`.
pub fn estimate_wrapped_line_count(lines: &[Line], viewport_width: usize) -> usize {
    if viewport_width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| {
            let width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            width.div_ceil(viewport_width).max(1)
        })
        .sum()
}

fn message_lines(message: &ChatMessage, compact: bool) -> Vec<Line<'static>> {
    let (who, color) = if message.is_from_user() {
        ("You", COLOR_ACCENT)
    } else {
        ("Companion", COLOR_AI)
    };
    let mut header = vec![Span::styled(
        who,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if !compact {
        header.push(Span::styled(
            format!("  {}", format_age(message.timestamp, Utc::now())),
            Style::default().fg(COLOR_DIM),
        ));
    }
    if let Some(analysis) = message.emotional_analysis.as_ref().filter(|_| !compact) {
        if let Some(emotion) = analysis.primary_emotion() {
            header.push(Span::styled(
                format!("  · {}", emotion),
                Style::default().fg(COLOR_DIM),
            ));
        }
    }

    let mut lines = vec![Line::from(header)];
    lines.extend(message.content.lines().map(|l| Line::from(l.to_string())));
    if !compact {
        lines.extend(message.suggested_actions.iter().map(|action| {
            Line::from(Span::styled(format!("  → {}", action), Style::default().fg(COLOR_DIM)))
        }));
    }
    lines.push(Line::from(""));
    lines
}

pub fn render_chat(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let state = app.stores.chat.snapshot();
    let high_risk = state
        .messages
        .iter()
        .rev()
        .find(|m| !m.is_from_user())
        .is_some_and(ChatMessage::is_high_risk);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if high_risk { 1 } else { 0 }),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    if high_risk {
        frame.render_widget(Paragraph::new(super::crisis_banner()), chunks[0]);
    }

    let block = panel_block("Companion", false);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let mut lines: Vec<Line> = state
        .messages
        .iter()
        .flat_map(|m| message_lines(m, ctx.is_compact()))
        .collect();

    if app.stores.chat.is_loading() {
        lines.push(Line::from(Span::styled(
            format!("{} Companion is thinking...", get_spinner_char(app.tick_count)),
            Style::default().fg(COLOR_WARNING),
        )));
    } else if lines.is_empty() {
        lines.push(render_status_indicator(&StatusIndicatorType::empty(
            "Say hello. What's on your mind today?",
        )));
    }

    // `app.chat.scroll` counts rows up from the newest message
    let total = estimate_wrapped_line_count(&lines, inner.width as usize) as u16;
    let max_offset = total.saturating_sub(inner.height);
    let offset = max_offset.saturating_sub(app.chat.scroll);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0)),
        inner,
    );

    frame.render_widget(
        InputBoxWidget::new(&app.chat.input, "Message", true),
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_wrapped_line_count() {
        let lines = vec![
            Line::from("short"),
            Line::from(""),
            Line::from("a".repeat(25)),
        ];
        assert_eq!(estimate_wrapped_line_count(&lines, 10), 1 + 1 + 3);
        assert_eq!(estimate_wrapped_line_count(&lines, 0), 3);
    }
}
