//! Wellness tools: breathing exercises, mindfulness sessions, the CBT
//! journal and goals.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::components::{render_dialog_frame, render_status_indicator, DialogFrameConfig, StatusIndicatorType};
use super::helpers::{panel_block, progress_bar, tag_picker_line};
use super::layout::{scroll_window, LayoutContext};
use super::theme::{
    mood_color, phase_color, COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS,
};
use crate::app::forms::{GoalField, JournalField};
use crate::app::types::ToolPanel;
use crate::app::App;
use crate::breathing::BreathPhase;
use crate::models::{MoodLevel, TherapyType};
use crate::widgets::InputBoxWidget;

pub fn render_tools(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    match app.tools.panel {
        ToolPanel::Menu => render_menu(frame, area, app),
        ToolPanel::Breathing => render_breathing(frame, area, app, ctx),
        ToolPanel::Mindfulness => render_mindfulness(frame, area, app, ctx),
        ToolPanel::Journal => render_journal(frame, area, app, ctx),
        ToolPanel::Goals => render_goals(frame, area, app, ctx),
    }
}

pub fn help_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.tools.panel {
        ToolPanel::Menu => vec![("↑/↓", "select"), ("enter", "open")],
        ToolPanel::Breathing if app.tools.timer.is_stopped() => vec![
            ("space", "start"),
            ("←/→", "pattern"),
            ("1-5", "mood"),
            ("esc", "back"),
        ],
        ToolPanel::Breathing => vec![
            ("space", "pause/resume"),
            ("1-5", "mood"),
            ("s", "stop"),
            ("f", "finish"),
            ("esc", "back"),
        ],
        ToolPanel::Mindfulness => vec![
            ("↑/↓", "select"),
            ("enter", "start"),
            ("f", "finish"),
            ("esc", "back"),
        ],
        ToolPanel::Journal => vec![("tab", "next field"), ("ctrl+s", "save"), ("esc", "back")],
        ToolPanel::Goals if app.tools.goal_form.is_some() => {
            vec![("tab", "next field"), ("enter", "create"), ("esc", "cancel")]
        }
        ToolPanel::Goals => vec![
            ("+/-", "progress"),
            ("n", "new"),
            ("c", "complete"),
            ("esc", "back"),
        ],
    }
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let therapy = app.stores.therapy.snapshot();
    let goals = app.stores.goals.snapshot();
    let details = [
        format!(
            "{} sessions completed",
            therapy.sessions.iter().filter(|s| s.is_completed()).count()
        ),
        format!("{} guided sessions", therapy.mindfulness_sessions.len()),
        format!("{} journal entries", therapy.journal_entries.len()),
        format!("{} of {} goals complete", goals.completed_count(), goals.goals.len()),
    ];

    let items: Vec<ListItem> = ToolPanel::MENU
        .iter()
        .zip(details)
        .map(|(panel, detail)| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    panel.label(),
                    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(format!("  {}", detail), Style::default().fg(COLOR_DIM))),
            ])
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.tools.menu_index));
    let list = List::new(items)
        .block(panel_block("Wellness tools", true))
        .highlight_style(Style::default().fg(COLOR_ACCENT))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_breathing(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let timer = &app.tools.timer;
    let exercise = timer.exercise();
    let exercises = app.breathing_exercises();

    let block = panel_block(&exercise.name, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if ctx.is_short() { 1 } else { 3 }),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let presets: Vec<Span> = exercises
        .iter()
        .enumerate()
        .map(|(idx, preset)| {
            let style = if idx == app.tools.preset_index {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            Span::styled(format!("{}  ", preset.name), style)
        })
        .collect();
    let mut header = vec![Line::from(presets)];
    if !ctx.is_short() {
        header.push(Line::from(Span::styled(
            format!(
                "{} · {} · {}",
                exercise.pattern(),
                exercise.difficulty.label(),
                exercise.description
            ),
            Style::default().fg(COLOR_DIM),
        )));
    }
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), rows[0]);

    let phase = timer.phase();
    let instruction = if timer.is_stopped() {
        Line::from(Span::styled("Press space to begin", Style::default().fg(COLOR_DIM)))
    } else {
        let mut spans = vec![
            Span::styled(
                phase.instruction(),
                Style::default().fg(phase_color(phase)).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {}s", timer.remaining())),
        ];
        if !timer.is_active() {
            spans.push(Span::styled("  (paused)", Style::default().fg(COLOR_DIM)));
        }
        Line::from(spans)
    };
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), instruction]).alignment(Alignment::Center),
        rows[1],
    );

    // The gauge fills while breathing in and drains while breathing out
    let phase_len = exercise.duration_of(phase).max(1);
    let done = phase_len.saturating_sub(timer.remaining());
    let ratio = match phase {
        _ if timer.is_stopped() => 0.0,
        BreathPhase::Inhale => done as f64 / phase_len as f64,
        BreathPhase::Hold => 1.0,
        BreathPhase::Exhale => timer.remaining() as f64 / phase_len as f64,
        BreathPhase::Rest => 0.0,
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(phase_color(phase)))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!(
            "cycle {} of {}",
            (timer.cycle() + 1).min(exercise.cycles.max(1)),
            exercise.cycles
        ));
    frame.render_widget(gauge, rows[2]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Mood before ", Style::default().fg(COLOR_DIM)),
            mood_span(app.tools.mood_before),
            Span::styled("   after ", Style::default().fg(COLOR_DIM)),
            mood_span(app.tools.mood_after),
        ]))
        .alignment(Alignment::Center),
        rows[3],
    );

    if let Some(session) = &app.tools.session {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("Session time {}:{:02}", session.elapsed_secs / 60, session.elapsed_secs % 60),
                Style::default().fg(COLOR_ACTIVE),
            )))
            .alignment(Alignment::Center),
            rows[4],
        );
    }
}

fn mood_span(level: Option<MoodLevel>) -> Span<'static> {
    match level {
        Some(level) => Span::styled(
            format!("{} {}", level.value(), level.label()),
            Style::default().fg(mood_color(level.value())),
        ),
        None => Span::styled("-", Style::default().fg(COLOR_DIM)),
    }
}

fn render_mindfulness(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let state = app.stores.therapy.snapshot();
    let running = state
        .active
        .as_ref()
        .filter(|s| s.session_type == TherapyType::Mindfulness)
        .is_some();
    let title = if running {
        "Mindfulness · session in progress"
    } else {
        "Mindfulness"
    };
    let block = panel_block(title, true);

    if state.mindfulness_sessions.is_empty() {
        let line = if app.stores.therapy.is_loading() {
            render_status_indicator(&StatusIndicatorType::loading("Loading sessions", app.tick_count))
        } else {
            render_status_indicator(&StatusIndicatorType::empty("No guided sessions available"))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let inner_height = area.height.saturating_sub(2);
    let visible = ctx.max_visible_items(inner_height, 2).max(1);
    let start = scroll_window(app.tools.mindfulness_index, state.mindfulness_sessions.len(), visible);

    let items: Vec<ListItem> = state
        .mindfulness_sessions
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(idx, session)| {
            let selected = idx == app.tools.mindfulness_index;
            let marker = match (selected, running) {
                (true, true) => "● ",
                (true, false) => "▶ ",
                _ => "  ",
            };
            let name_style = if selected {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_HEADER)
            };
            let mut meta = format!("  {} · {} min", session.category.label(), session.duration);
            if session.guided {
                meta.push_str(" · guided");
            }
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
                    Span::styled(session.name.clone(), name_style),
                    Span::styled(meta, Style::default().fg(COLOR_DIM)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", session.description),
                    Style::default().fg(COLOR_DIM),
                )),
            ])
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_journal(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let journal = &app.tools.journal;
    let block = panel_block("CBT thought record", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(JournalField::ALL.map(|_| Constraint::Length(3)))
        .split(inner);

    for (idx, field) in JournalField::ALL.iter().enumerate() {
        let focused = journal.focus == *field;
        let input = match field {
            JournalField::Situation => &journal.situation,
            JournalField::Thoughts => &journal.thoughts,
            JournalField::Behaviors => &journal.behaviors,
            JournalField::Alternative => &journal.alternative,
            JournalField::Emotions => {
                let title_style = if focused {
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(COLOR_HEADER)
                };
                frame.render_widget(
                    Paragraph::new(vec![
                        Line::from(Span::styled(field.label(), title_style)),
                        tag_picker_line(&journal.emotions, focused),
                    ])
                    .wrap(Wrap { trim: false }),
                    rows[idx],
                );
                continue;
            }
        };
        frame.render_widget(InputBoxWidget::new(input, field.label(), focused), rows[idx]);
    }

    let entries = app.stores.therapy.snapshot().journal_entries.len();
    if entries > 0 && !ctx.is_short() {
        let footer = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{} entries saved", entries),
                Style::default().fg(COLOR_DIM),
            ))
            .alignment(Alignment::Right),
            footer,
        );
    }
}

fn render_goals(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let state = app.stores.goals.snapshot();
    let block = panel_block(
        &format!("Wellness goals · {}/{} complete", state.completed_count(), state.goals.len()),
        app.tools.goal_form.is_none(),
    );

    if state.goals.is_empty() {
        let line = if app.stores.goals.is_loading() {
            render_status_indicator(&StatusIndicatorType::loading("Loading goals", app.tick_count))
        } else {
            render_status_indicator(&StatusIndicatorType::empty("No goals yet. Press n to set one."))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
    } else {
        let inner_height = area.height.saturating_sub(2);
        let visible = ctx.max_visible_items(inner_height, 2).max(1);
        let start = scroll_window(app.tools.goal_index, state.goals.len(), visible);
        let bar_width = if ctx.is_narrow() { 10 } else { 20 };

        let items: Vec<ListItem> = state
            .goals
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(idx, goal)| {
                let selected = idx == app.tools.goal_index;
                let marker = if selected { "▶ " } else { "  " };
                let title_style = if goal.completed {
                    Style::default().fg(COLOR_SUCCESS).add_modifier(Modifier::CROSSED_OUT)
                } else if selected {
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(COLOR_HEADER)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
                        Span::styled(goal.title.clone(), title_style),
                        Span::styled(format!("  {}", goal.category.label()), Style::default().fg(COLOR_DIM)),
                    ]),
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(progress_bar(goal.progress, bar_width), Style::default().fg(COLOR_ACTIVE)),
                        Span::raw(format!(" {}%", goal.progress)),
                    ]),
                ])
            })
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }

    if let Some(form) = &app.tools.goal_form {
        let inner = render_dialog_frame(
            frame,
            area,
            ctx,
            &DialogFrameConfig::new("New goal", 8).hint("enter create · esc cancel"),
        );
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Length(2)])
            .split(inner);
        frame.render_widget(
            InputBoxWidget::new(&form.title, "Goal title", form.focus == GoalField::Title),
            rows[0],
        );
        frame.render_widget(
            InputBoxWidget::new(&form.description, "Description", form.focus == GoalField::Description),
            rows[1],
        );
        let category_style = if form.focus == GoalField::Category {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Category  ", Style::default().fg(COLOR_DIM)),
                Span::styled(format!("◀ {} ▶", form.category.label()), category_style),
            ])),
            rows[2],
        );
    }
}
