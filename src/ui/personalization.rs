//! Content preferences and recommendations.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::helpers::{panel_block, tag_picker_line};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS};
use crate::app::App;
use crate::models::MAX_EFFECTIVENESS;

pub fn render_personalization(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let view = &app.personalization;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if ctx.is_narrow() { 6 } else { 5 }),
            Constraint::Min(3),
        ])
        .split(area);

    let prefs = vec![
        Line::from(Span::styled("Content I like", Style::default().fg(COLOR_HEADER))),
        tag_picker_line(&view.content, true),
        Line::from(vec![
            Span::styled("Companion style  ", Style::default().fg(COLOR_HEADER)),
            Span::styled(
                view.style.label(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(prefs)
            .block(panel_block("Preferences", true))
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let state = app.stores.personalization.snapshot();
    let block = panel_block("Recommended for you", false);
    if state.recommendations.is_empty() {
        let line = if app.stores.personalization.is_loading() {
            render_status_indicator(&StatusIndicatorType::loading("Finding ideas for you", app.tick_count))
        } else {
            render_status_indicator(&StatusIndicatorType::empty("No recommendations yet"))
        };
        frame.render_widget(Paragraph::new(line).block(block), chunks[1]);
        return;
    }

    let mut lines = Vec::new();
    for (idx, rec) in state.recommendations.iter().enumerate() {
        let selected = idx == view.selected;
        let title_style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        let mut header = vec![
            Span::styled(if selected { "▶ " } else { "  " }, Style::default().fg(COLOR_ACCENT)),
            Span::styled(rec.title.clone(), title_style),
        ];
        if !rec.kind.is_empty() {
            header.push(Span::styled(format!("  {}", rec.kind), Style::default().fg(COLOR_DIM)));
        }
        if let Some(percent) = rec.effectiveness_percent() {
            header.push(Span::styled(
                format!("  {}% found this helpful", percent),
                Style::default().fg(COLOR_SUCCESS),
            ));
        }
        if let Some(rating) = state.ratings.get(&rec.title) {
            header.push(Span::styled(
                format!("  your rating {}/{}", rating, MAX_EFFECTIVENESS),
                Style::default().fg(COLOR_ACCENT),
            ));
        }
        lines.push(Line::from(header));
        if !rec.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", rec.description),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), chunks[1]);
}
