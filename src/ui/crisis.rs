//! Crisis support: hotlines, personal contacts and the support request.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{
    render_dialog_frame, render_status_indicator, render_tab_selector, DialogFrameConfig,
    StatusIndicatorType, TabItem,
};
use super::helpers::panel_block;
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_CRISIS, COLOR_DIM, COLOR_HEADER, COLOR_WARNING};
use crate::app::forms::ContactField;
use crate::app::types::CrisisTab;
use crate::app::App;
use crate::models::{CrisisContact, CrisisResource, CrisisSeverity};
use crate::widgets::InputBoxWidget;

pub fn help_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.crisis.contact_form.is_some() {
        return vec![
            ("tab", "next field"),
            ("ctrl+e", "emergency"),
            ("enter", "save"),
            ("esc", "cancel"),
        ];
    }
    if app.crisis.support_confirm.is_some() {
        return vec![("y", "request support"), ("tab", "severity"), ("esc", "cancel")];
    }
    match app.crisis.tab {
        CrisisTab::Resources => vec![("enter", "open"), ("tab", "contacts"), ("x", "get support")],
        CrisisTab::Contacts => vec![("a", "add"), ("tab", "resources"), ("x", "get support")],
    }
}

pub fn render_crisis(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "If you are in immediate danger, call your local emergency number.",
                Style::default().fg(COLOR_CRISIS).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "You matter. Reaching out is a sign of strength.",
                Style::default().fg(COLOR_HEADER),
            )),
        ])
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let state = app.stores.crisis.snapshot();
    let tabs = [
        TabItem::new("Hotlines"),
        TabItem::with_short_label("My contacts", "Contacts").badge(state.contacts.len()),
    ];
    let selected = match app.crisis.tab {
        CrisisTab::Resources => 0,
        CrisisTab::Contacts => 1,
    };
    frame.render_widget(Paragraph::new(render_tab_selector(&tabs, Some(selected), ctx)), chunks[1]);

    match app.crisis.tab {
        CrisisTab::Resources => {
            render_resources(frame, chunks[2], &state.visible_resources(), app.crisis.selected)
        }
        CrisisTab::Contacts => render_contacts(frame, chunks[2], &state.contacts, app),
    }

    if let Some(form) = &app.crisis.contact_form {
        let inner = render_dialog_frame(frame, chunks[2], ctx, &DialogFrameConfig::new("Add contact", 10));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(inner);
        frame.render_widget(InputBoxWidget::new(&form.name, "Name", form.focus == ContactField::Name), rows[0]);
        frame.render_widget(InputBoxWidget::new(&form.phone, "Phone", form.focus == ContactField::Phone), rows[1]);
        frame.render_widget(
            InputBoxWidget::new(
                &form.relationship,
                "Relationship (optional)",
                form.focus == ContactField::Relationship,
            ),
            rows[2],
        );
        let check = if form.is_emergency { "[x]" } else { "[ ]" };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} Notify during an emergency alert", check),
                Style::default().fg(COLOR_HEADER),
            )),
            rows[3],
        );
    } else if let Some(severity) = app.crisis.support_confirm {
        let inner = render_dialog_frame(
            frame,
            chunks[2],
            ctx,
            &DialogFrameConfig::new("Request crisis support?", 5).hint("y send · tab severity · esc cancel"),
        );
        let emergency = state.contacts.iter().filter(|c| c.is_emergency).count();
        let mut lines = vec![Line::from(Span::styled(
            "We'll alert your emergency contacts and support team.",
            Style::default().fg(COLOR_HEADER),
        ))];
        for level in CrisisSeverity::ALL {
            let (marker, style) = if level == severity {
                ("▶ ", Style::default().fg(COLOR_CRISIS).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(COLOR_DIM))
            };
            lines.push(Line::from(Span::styled(format!("{}{}", marker, level.label()), style)));
        }
        lines.push(Line::from(Span::styled(
            format!("{} emergency contact(s) on file", emergency),
            Style::default().fg(COLOR_WARNING),
        )));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}

fn render_resources(frame: &mut Frame, area: Rect, resources: &[CrisisResource], selected: usize) {
    let mut lines = Vec::new();
    for (idx, resource) in resources.iter().enumerate() {
        let is_selected = idx == selected;
        let name_style = if is_selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
        };
        let mut header = vec![
            Span::styled(if is_selected { "▶ " } else { "  " }, Style::default().fg(COLOR_ACCENT)),
            Span::styled(resource.name.clone(), name_style),
        ];
        if let Some(availability) = &resource.availability {
            header.push(Span::styled(format!("  {}", availability), Style::default().fg(COLOR_DIM)));
        }
        lines.push(Line::from(header));

        let mut reach = Vec::new();
        if let Some(phone) = &resource.phone {
            reach.push(format!("call {}", phone));
        }
        if let Some(text) = &resource.text_line {
            reach.push(format!("text {}", text));
        }
        if let Some(site) = &resource.website {
            reach.push(site.clone());
        }
        if !reach.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", reach.join(" · ")),
                Style::default().fg(COLOR_CRISIS),
            )));
        }
        if let Some(description) = &resource.description {
            lines.push(Line::from(Span::styled(
                format!("    {}", description),
                Style::default().fg(COLOR_DIM),
            )));
        }
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel_block("Crisis hotlines", true))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_contacts(frame: &mut Frame, area: Rect, contacts: &[CrisisContact], app: &App) {
    let block = panel_block("My emergency contacts", true);
    if contacts.is_empty() {
        let line = if app.stores.crisis.is_loading() {
            render_status_indicator(&StatusIndicatorType::loading("Loading contacts", app.tick_count))
        } else {
            render_status_indicator(&StatusIndicatorType::empty(
                "No contacts yet. Press a to add someone you trust.",
            ))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let lines: Vec<Line> = contacts
        .iter()
        .enumerate()
        .map(|(idx, contact)| {
            let is_selected = idx == app.crisis.selected;
            let style = if is_selected {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_HEADER)
            };
            let mut spans = vec![
                Span::styled(if is_selected { "▶ " } else { "  " }, Style::default().fg(COLOR_ACCENT)),
                Span::styled(contact.name.clone(), style),
                Span::styled(format!("  {}", contact.phone), Style::default().fg(COLOR_DIM)),
            ];
            if let Some(rel) = &contact.relationship {
                spans.push(Span::styled(format!("  {}", rel), Style::default().fg(COLOR_DIM)));
            }
            if contact.is_emergency {
                spans.push(Span::styled("  ★ emergency", Style::default().fg(COLOR_CRISIS)));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
