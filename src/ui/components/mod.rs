//! Reusable UI Components
//!
//! Pieces shared by several screens. They all draw with the rounded border
//! style and take a [`LayoutContext`](crate::ui::layout::LayoutContext) for
//! responsive sizing.
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal tab bar with an arrow marker
//! - `StatusIndicator` - Spinner, empty-state and error lines
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};
