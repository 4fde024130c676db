//! Sign-in and registration form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{
    get_spinner_char, render_dialog_frame, render_tab_selector, DialogFrameConfig, TabItem,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_WARNING};
use crate::app::forms::{AuthField, AuthMode};
use crate::app::App;
use crate::widgets::InputBoxWidget;

const FIELD_HEIGHT: u16 = 3;

pub fn render_auth(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let form = &app.auth_form;
    let fields = form.fields();
    let content_height = 3 + FIELD_HEIGHT * fields.len() as u16;

    let (title, hint) = match form.mode {
        AuthMode::Login => ("Welcome back", "ctrl+t create account"),
        AuthMode::Register => ("Create your account", "ctrl+t sign in instead"),
    };
    let inner = render_dialog_frame(
        frame,
        area,
        ctx,
        &DialogFrameConfig::new(title, content_height).hint(hint),
    );

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let tabs = [TabItem::new("Sign in"), TabItem::new("Register")];
    let selected = match form.mode {
        AuthMode::Login => 0,
        AuthMode::Register => 1,
    };
    frame.render_widget(Paragraph::new(render_tab_selector(&tabs, Some(selected), ctx)), rows[0]);

    for (idx, field) in fields.iter().enumerate() {
        let (input, label) = match field {
            AuthField::Email => (&form.email, "Email"),
            AuthField::Password => (&form.password, "Password"),
            AuthField::FirstName => (&form.first_name, "First name"),
            AuthField::LastName => (&form.last_name, "Last name (optional)"),
        };
        frame.render_widget(
            InputBoxWidget::new(input, label, form.focus == *field)
                .masked(*field == AuthField::Password),
            rows[idx + 1],
        );
    }

    let status = if app.stores.auth.is_loading() {
        Line::from(Span::styled(
            format!(" {} Signing you in...", get_spinner_char(app.tick_count)),
            Style::default().fg(COLOR_WARNING),
        ))
    } else if app.onboarded_profile.is_some() {
        Line::from(Span::styled(
            " Your onboarding answers will be saved with your account",
            Style::default().fg(COLOR_ACCENT),
        ))
    } else {
        Line::from(Span::styled(" enter to submit", Style::default().fg(COLOR_DIM)))
    };
    if let Some(row) = rows.last() {
        frame.render_widget(Paragraph::new(status), *row);
    }
}
