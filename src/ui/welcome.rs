//! Landing screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::panel_block;
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

const FEATURES: [(&str, &str); 4] = [
    ("Talk it through", "a supportive AI companion, any time"),
    ("Track your mood", "daily check-ins and gentle insights"),
    ("Practice calm", "guided breathing and CBT journaling"),
    ("Find your people", "an anonymous peer community"),
];

pub fn render_welcome(frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "mindwell",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your space to breathe, reflect and grow",
            Style::default().fg(COLOR_HEADER),
        )),
        Line::from(""),
    ];

    if !ctx.is_short() {
        for (title, detail) in FEATURES {
            lines.push(Line::from(vec![
                Span::styled(format!("✦ {}", title), Style::default().fg(COLOR_HEADER)),
                Span::styled(format!("  {}", detail), Style::default().fg(COLOR_DIM)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("enter", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        Span::raw(" get started    "),
        Span::styled("l", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        Span::raw(" I already have an account"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(panel_block("Welcome", false))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
