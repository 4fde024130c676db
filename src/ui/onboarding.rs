//! Three-step onboarding questionnaire.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::{panel_block, tag_picker_line};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use crate::app::forms::OnboardingForm;
use crate::app::App;
use crate::models::CommunicationStyle;

const QUESTIONS: [&str; OnboardingForm::STEPS] = [
    "What would you like to work on?",
    "Is anything weighing on you right now?",
    "How should your companion talk to you?",
];

pub fn render_onboarding(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let form = &app.onboarding;
    let block = panel_block(
        &format!("Getting started · step {} of {}", form.step + 1, OnboardingForm::STEPS),
        true,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let question = QUESTIONS.get(form.step).copied().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            question,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    let body: Vec<Line> = match form.step {
        0 => vec![tag_picker_line(&form.goals, true)],
        1 => vec![tag_picker_line(&form.concerns, true)],
        _ => style_lines(form.style, ctx),
    };
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), chunks[1]);
}

fn style_lines(current: CommunicationStyle, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = CommunicationStyle::ALL
        .iter()
        .map(|style| {
            if *style == current {
                Line::from(Span::styled(
                    format!("▶ {}", style.label()),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", style.label()),
                    Style::default().fg(COLOR_DIM),
                ))
            }
        })
        .collect();
    if !ctx.is_short() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "←/→ to change · enter to finish",
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines
}
