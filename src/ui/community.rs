//! Peer support feed.

use chrono::Utc;
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
use super::helpers::{format_age, panel_block, truncate_string};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_CRISIS, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::models::{CategoryFilter, CommunityPost, PostCategory};
use crate::widgets::InputBoxWidget;

/// Comments previewed under the selected post.
const COMMENT_PREVIEW: usize = 3;

pub fn help_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.community.compose.is_some() {
        vec![
            ("enter", "post"),
            ("tab", "category"),
            ("ctrl+a", "anonymous"),
            ("esc", "cancel"),
        ]
    } else if app.community.comment.is_some() {
        vec![("enter", "comment"), ("esc", "cancel")]
    } else {
        vec![
            ("f", "filter"),
            ("n", "new post"),
            ("l", "like"),
            ("c", "comment"),
        ]
    }
}

pub fn render_community(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let state = app.stores.community.snapshot();
    let filters: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
        .chain(PostCategory::ALL.iter().map(|c| CategoryFilter::Only(*c)))
        .collect();
    let tabs: Vec<TabItem> = filters.iter().map(|f| TabItem::new(f.label())).collect();
    let selected = filters.iter().position(|f| *f == state.filter);
    frame.render_widget(Paragraph::new(render_tab_selector(&tabs, selected, ctx)), chunks[0]);

    let posts = state.visible_posts();
    let block = panel_block("Community", app.community.compose.is_none());
    if posts.is_empty() {
        let line = if app.stores.community.is_loading() {
            render_status_indicator(&StatusIndicatorType::loading("Loading posts", app.tick_count))
        } else {
            render_status_indicator(&StatusIndicatorType::empty(
                "No posts here yet. Press n to share something.",
            ))
        };
        frame.render_widget(Paragraph::new(line).block(block), chunks[1]);
    } else {
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        let width = inner.width as usize;

        let mut lines = Vec::new();
        let mut selected_line = 0u16;
        for (idx, post) in posts.iter().enumerate() {
            let selected = idx == app.community.selected;
            if selected {
                selected_line = lines.len() as u16;
            }
            lines.extend(post_lines(post, selected, width));
        }
        // Keep the selected post near the top of the viewport
        let offset = selected_line.saturating_sub(1);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((offset, 0)),
            inner,
        );
    }

    if let Some(form) = &app.community.compose {
        let inner = render_dialog_frame(
            frame,
            chunks[1],
            ctx,
            &DialogFrameConfig::new("Share with the community", 5).max_width(72),
        );
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(inner);
        frame.render_widget(InputBoxWidget::new(&form.content, "Post", true), rows[0]);
        let anon = if form.anonymous { "anonymous" } else { "with your name" };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Category ", Style::default().fg(COLOR_DIM)),
                Span::styled(form.category.label(), Style::default().fg(COLOR_ACCENT)),
                Span::styled("   Posting ", Style::default().fg(COLOR_DIM)),
                Span::styled(anon, Style::default().fg(COLOR_HEADER)),
            ])),
            rows[1],
        );
    } else if let Some(form) = &app.community.comment {
        let inner = render_dialog_frame(
            frame,
            chunks[1],
            ctx,
            &DialogFrameConfig::new("Reply", 3).hint("enter send · esc cancel"),
        );
        frame.render_widget(InputBoxWidget::new(&form.content, "Comment", true), inner);
    }
}

fn post_lines(post: &CommunityPost, selected: bool, width: usize) -> Vec<Line<'static>> {
    let now = Utc::now();
    let marker = if selected { "▶ " } else { "  " };
    let author_style = if selected {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    };
    let mut header = vec![
        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
        Span::styled(post.author().to_string(), author_style),
        Span::styled(format!("  {}", post.category.label()), Style::default().fg(COLOR_DIM)),
    ];
    if let Some(at) = post.created_at {
        header.push(Span::styled(format!("  {}", format_age(at, now)), Style::default().fg(COLOR_DIM)));
    }

    let mut lines = vec![
        Line::from(header),
        Line::from(format!("  {}", post.content)),
        Line::from(vec![
            Span::styled(format!("  ♥ {}", post.likes), Style::default().fg(COLOR_CRISIS)),
            Span::styled(format!("   💬 {}", post.comments.len()), Style::default().fg(COLOR_DIM)),
        ]),
    ];

    if selected {
        for comment in post.comments.iter().take(COMMENT_PREVIEW) {
            let author = if comment.is_anonymous {
                "Anonymous"
            } else {
                comment.author_name.as_deref().unwrap_or("Member")
            };
            lines.push(Line::from(vec![
                Span::styled(format!("    ↳ {}: ", author), Style::default().fg(COLOR_DIM)),
                Span::raw(truncate_string(&comment.content, width.saturating_sub(20))),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines
}
