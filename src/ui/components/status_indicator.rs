//! Status Indicator Component
//!
//! One-line placeholders for panels whose data is loading, empty or failed.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_WARNING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks each spinner frame stays on screen.
const TICKS_PER_FRAME: u64 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Request in flight; `tick` drives the animation
    Loading { message: String, tick: u64 },
    /// Loaded, nothing to show
    Empty { message: String },
    Error { message: String },
}

impl StatusIndicatorType {
    pub fn loading(message: impl Into<String>, tick: u64) -> Self {
        Self::Loading {
            message: message.into(),
            tick,
        }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        Self::Empty {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Spinner character for an event-loop tick count.
pub fn get_spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Loading { message, tick } => Line::from(vec![
            Span::styled(
                format!(" {} ", get_spinner_char(*tick)),
                Style::default().fg(COLOR_WARNING),
            ),
            Span::styled(message.clone(), Style::default().fg(COLOR_WARNING)),
        ]),
        StatusIndicatorType::Empty { message } => Line::from(Span::styled(
            format!(" {}", message),
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::ITALIC),
        )),
        StatusIndicatorType::Error { message } => Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(COLOR_ERROR)),
            Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_advances_every_few_ticks() {
        assert_eq!(get_spinner_char(0), '◐');
        assert_eq!(get_spinner_char(5), '◐');
        assert_eq!(get_spinner_char(6), '◓');
        assert_eq!(get_spinner_char(24), '◐');
    }

    #[test]
    fn test_render_loading_includes_message() {
        let line = render_status_indicator(&StatusIndicatorType::loading("Loading goals", 0));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains('◐'));
        assert!(text.contains("Loading goals"));
    }

    #[test]
    fn test_render_empty() {
        let line = render_status_indicator(&StatusIndicatorType::empty("No posts yet"));
        assert_eq!(line.spans.len(), 1);
        assert!(line.spans[0].content.contains("No posts yet"));
    }
}
