//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions screens ask: proportional widths, compact mode, how many list
//! rows fit.

use ratatui::layout::Rect;

/// Terminal size breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let dialog_width = ctx.bounded_width(50, 30, 60);
/// if ctx.should_stack_panels() {
///     // history below the check-in form
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Height as a percentage of terminal height, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `min..=max`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Proportional height clamped to `min..=max`.
    pub fn bounded_height(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_height(percentage).clamp(min, max)
    }

    /// Usable text width inside a bordered, padded block.
    pub fn text_wrap_width(&self, indent_level: u16) -> u16 {
        let border_margin = 4;
        self.width.saturating_sub(border_margin + indent_level * 2)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short; UI elements should be condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Side panels go below the main one on narrow terminals.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// `(left, right)` widths for a two-column screen.
    ///
    /// - Very narrow (< 60): 50/50
    /// - Medium (< 120): 40/60
    /// - Wide: 35/65 with the left column capped at 60
    pub fn two_column_widths(&self) -> (u16, u16) {
        if self.width < breakpoints::XS_WIDTH {
            let half = self.width / 2;
            (half, self.width - half)
        } else if self.width < breakpoints::MD_WIDTH {
            let left = (self.width * 40) / 100;
            (left, self.width - left)
        } else {
            let left = ((self.width * 35) / 100).min(60);
            (left, self.width - left)
        }
    }

    /// List rows that fit in `area_height` at `row_height` rows each.
    pub fn max_visible_items(&self, area_height: u16, row_height: u16) -> usize {
        if row_height == 0 {
            return 0;
        }
        (area_height / row_height) as usize
    }
}

/// First index of a window of `visible` rows that keeps `selected` in view.
pub fn scroll_window(selected: usize, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    selected
        .saturating_sub(visible - 1)
        .min(total - visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(ctx.percent_width(0), 1);
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
        let ctx = LayoutContext::new(40, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 20);
    }

    #[test]
    fn test_compact_states() {
        assert!(LayoutContext::new(70, 40).is_compact());
        assert!(LayoutContext::new(100, 20).is_compact());
        assert!(!LayoutContext::new(100, 30).is_compact());
        assert!(LayoutContext::new(50, 30).is_extra_small());
    }

    #[test]
    fn test_two_column_widths() {
        assert_eq!(LayoutContext::new(50, 30).two_column_widths(), (25, 25));
        assert_eq!(LayoutContext::new(100, 30).two_column_widths(), (40, 60));
        assert_eq!(LayoutContext::new(200, 30).two_column_widths(), (60, 140));
    }

    #[test]
    fn test_scroll_window_keeps_selection_visible() {
        assert_eq!(scroll_window(0, 20, 5), 0);
        assert_eq!(scroll_window(4, 20, 5), 0);
        assert_eq!(scroll_window(5, 20, 5), 1);
        assert_eq!(scroll_window(19, 20, 5), 15);
        assert_eq!(scroll_window(3, 3, 5), 0);
    }
}
