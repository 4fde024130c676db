//! Tab Selector Component
//!
//! The horizontal tab bar. Uses a `▶` marker for the selected item and
//! falls back to short labels on compact terminals.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
    /// Small counter shown after the label (unread alerts)
    pub badge: Option<usize>,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
            badge: None,
        }
    }

    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self {
            label,
            short_label,
            badge: None,
        }
    }

    /// Attach a counter; zero shows nothing.
    pub fn badge(mut self, count: usize) -> Self {
        self.badge = (count > 0).then_some(count);
        self
    }
}

/// Render a horizontal tab selector
///
/// # Arguments
/// * `items` - The tab items to display
/// * `selected` - Index of the selected tab, `None` when no tab matches
/// * `ctx` - Layout context for responsive sizing
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: Option<usize>,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    let spacing = if ctx.is_extra_small() { " " } else { "  " };

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if Some(idx) == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", style));
            spans.push(Span::styled(label.to_string(), style));
        }

        if let Some(count) = item.badge {
            spans.push(Span::styled(
                format!(" ({})", count),
                Style::default().fg(COLOR_ACCENT),
            ));
        }

        if idx + 1 < items.len() {
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
