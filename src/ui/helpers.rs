//! Helper functions shared by the screen renderers.

use chrono::{DateTime, Utc};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::selection::TagPicker;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Truncate a string to `max_len` bytes, appending "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let end = find_char_boundary(s, target);
        format!("{}...", &s[..end])
    }
}

/// Find the nearest valid UTF-8 char boundary at or before the given byte index.
pub fn find_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut end = index;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Short relative age: "now", "5m", "3h", "2d", then a date.
pub fn format_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - at).num_seconds().max(0);
    match secs {
        0..=59 => "now".to_string(),
        60..=3_599 => format!("{}m", secs / 60),
        3_600..=86_399 => format!("{}h", secs / 3_600),
        86_400..=604_799 => format!("{}d", secs / 86_400),
        _ => at.format("%b %d").to_string(),
    }
}

/// Rounded panel block; the border lights up when focused.
pub fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

/// Key hints, e.g. `[("enter", "send"), ("esc", "back")]`.
pub fn help_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

/// Options of a picker as chips; picked ones are filled, the cursor is
/// underlined while focused.
pub fn tag_picker_line(picker: &TagPicker, focused: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, option) in picker.options().iter().enumerate() {
        let picked = picker.selected.contains(option);
        let mut style = if picked {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        if focused && idx == picker.cursor() {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        let marker = if picked { "●" } else { "○" };
        spans.push(Span::styled(format!("{} {}", marker, option), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Text progress bar, `width` cells wide.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer sentence", 10), "a longe...");
        assert_eq!(truncate_string("héllo wörld", 5), "h...");
    }

    #[test]
    fn test_format_age() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
        assert_eq!(format_age(now, now), "now");
        assert_eq!(format_age(now - Duration::minutes(5), now), "5m");
        assert_eq!(format_age(now - Duration::hours(3), now), "3h");
        assert_eq!(format_age(now - Duration::days(2), now), "2d");
        assert_eq!(format_age(now - Duration::days(30), now), "Sep 15");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(50, 4), "██░░");
        assert_eq!(progress_bar(150, 4), "████");
    }

    #[test]
    fn test_help_line_contains_keys() {
        let line = help_line(&[("enter", "send"), ("esc", "back")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("enter send"));
        assert!(text.contains("esc back"));
    }
}
