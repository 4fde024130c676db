//! Wellness dashboard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Sparkline, Wrap},
    Frame,
};

use super::components::{render_status_indicator, render_tab_selector, StatusIndicatorType, TabItem};
use super::helpers::panel_block;
use super::layout::LayoutContext;
use super::theme::{
    mood_color, COLOR_ACCENT, COLOR_ACTIVE, COLOR_AI, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS,
    COLOR_WARNING,
};
use crate::app::App;
use crate::models::{sparkline, AnalyticsData, AnalyticsPeriod, ProgressReport};

pub fn render_analytics(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let tabs: Vec<TabItem> = AnalyticsPeriod::ALL.iter().map(|p| TabItem::new(p.label())).collect();
    let selected = AnalyticsPeriod::ALL.iter().position(|p| *p == app.analytics_period);
    frame.render_widget(Paragraph::new(render_tab_selector(&tabs, selected, ctx)), chunks[0]);

    let state = app.stores.analytics.snapshot();
    let insights = state.visible_insights();
    let Some(data) = state.data.filter(|_| state.period == app.analytics_period) else {
        let line = if app.stores.analytics.is_loading() {
            render_status_indicator(&StatusIndicatorType::loading("Crunching your numbers", app.tick_count))
        } else {
            render_status_indicator(&StatusIndicatorType::empty("No data yet. Press r to refresh."))
        };
        frame.render_widget(Paragraph::new(line).block(panel_block("Insights", false)), chunks[1]);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(6), Constraint::Min(3)])
        .split(chunks[1]);

    render_goal_progress(frame, rows[0], &data);
    render_trends(frame, rows[1], &data, ctx);

    let bottom = if ctx.should_stack_panels() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[2])
    };
    render_report(frame, bottom[0], state.report.as_ref(), &data);
    render_insight_list(frame, bottom[1], &insights, &data.recommendations);
}

fn render_goal_progress(frame: &mut Frame, area: Rect, data: &AnalyticsData) {
    let percent = data.goal_progress.clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .block(panel_block("Goals", false))
        .gauge_style(Style::default().fg(COLOR_ACTIVE))
        .ratio(percent / 100.0)
        .label(format!(
            "{:.0}% goal progress · {} therapy sessions",
            percent, data.therapy_session_count
        ));
    frame.render_widget(gauge, area);
}

fn render_trends(frame: &mut Frame, area: Rect, data: &AnalyticsData, ctx: &LayoutContext) {
    let direction = if ctx.is_narrow() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let cols = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let mood_tint = data
        .average_mood()
        .map(|avg| mood_color(avg.round() as u8))
        .unwrap_or(COLOR_DIM);
    render_trend(frame, cols[0], "Mood", data.average_mood(), &data.mood_sparkline(), mood_tint);
    render_trend(
        frame,
        cols[1],
        "Stress",
        data.average_stress(),
        &sparkline(&data.stress_trend, 10.0),
        COLOR_WARNING,
    );
    render_trend(
        frame,
        cols[2],
        "Sleep",
        data.average_sleep(),
        &sparkline(&data.sleep_trend, 10.0),
        COLOR_AI,
    );
}

fn render_trend(frame: &mut Frame, area: Rect, name: &str, average: Option<f64>, values: &[u64], color: Color) {
    let title = match average {
        Some(avg) => format!("{} · avg {:.1}", name, avg),
        None => name.to_string(),
    };
    let sparkline = Sparkline::default()
        .block(panel_block(&title, false))
        .data(values)
        .max(100)
        .style(Style::default().fg(color));
    frame.render_widget(sparkline, area);
}

fn stat(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<20}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value, Style::default().fg(COLOR_HEADER)),
    ])
}

fn render_report(frame: &mut Frame, area: Rect, report: Option<&ProgressReport>, data: &AnalyticsData) {
    let lines = match report {
        None => vec![
            stat("Therapy sessions", data.therapy_session_count.to_string()),
            stat("Goal progress", format!("{:.0}%", data.goal_progress)),
        ],
        Some(report) => {
            let mut lines = Vec::new();
            if !report.summary.is_empty() {
                lines.push(Line::from(Span::styled(
                    report.summary.clone(),
                    Style::default().fg(COLOR_HEADER),
                )));
                lines.push(Line::from(""));
            }
            lines.push(stat("Goals completed", report.goals_completed.to_string()));
            lines.push(stat("Sessions completed", report.sessions_completed.to_string()));
            if let Some(change) = report.mood_change {
                let color = if change >= 0.0 { COLOR_SUCCESS } else { COLOR_WARNING };
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<20}", "Mood change"), Style::default().fg(COLOR_DIM)),
                    Span::styled(format!("{:+.1}", change), Style::default().fg(color)),
                ]));
            }
            for highlight in &report.highlights {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(COLOR_ACCENT)),
                    Span::raw(highlight.clone()),
                ]));
            }
            lines
        }
    };
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel_block("Progress report", false))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_insight_list(frame: &mut Frame, area: Rect, insights: &[String], recommendations: &[String]) {
    let mut lines: Vec<Line> = Vec::new();
    if insights.is_empty() {
        lines.push(render_status_indicator(&StatusIndicatorType::empty(
            "Keep checking in to unlock insights",
        )));
    }
    for insight in insights {
        lines.push(Line::from(vec![
            Span::styled("✦ ", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
            Span::raw(insight.clone()),
        ]));
    }
    if !recommendations.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Try next",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )));
        for rec in recommendations {
            lines.push(Line::from(vec![
                Span::styled("→ ", Style::default().fg(COLOR_ACTIVE)),
                Span::raw(rec.clone()),
            ]));
        }
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel_block("What we noticed", false))
            .wrap(Wrap { trim: true }),
        area,
    );
}
