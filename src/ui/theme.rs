//! Color theme constants for the mindwell UI
//!
//! A soft dark palette; the accent is a calm teal.

use ratatui::style::Color;

use crate::breathing::BreathPhase;

// ============================================================================
// Base Palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for focus and selection
pub const COLOR_ACCENT: Color = Color::Rgb(94, 186, 170);

/// Header and title text
pub const COLOR_HEADER: Color = Color::White;

/// Active/running elements
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_WARNING: Color = Color::Yellow;

/// Crisis support screen and the global crisis hint
pub const COLOR_CRISIS: Color = Color::Rgb(232, 93, 117);

/// Messages from the assistant
pub const COLOR_AI: Color = Color::Rgb(150, 160, 255);

// ============================================================================
// Domain Colors
// ============================================================================

/// Color for a mood level on the 1..=5 scale.
pub fn mood_color(level: u8) -> Color {
    match level {
        1 => Color::Rgb(214, 92, 92),
        2 => Color::Rgb(230, 150, 80),
        3 => Color::Rgb(220, 200, 90),
        4 => Color::Rgb(140, 200, 110),
        _ => Color::Rgb(80, 190, 130),
    }
}

pub fn phase_color(phase: BreathPhase) -> Color {
    match phase {
        BreathPhase::Inhale => COLOR_ACCENT,
        BreathPhase::Hold => COLOR_AI,
        BreathPhase::Exhale => COLOR_SUCCESS,
        BreathPhase::Rest => COLOR_DIM,
    }
}
