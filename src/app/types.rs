//! Per-screen UI state.
//!
//! Everything here is local to one screen: cursors, open dialogs and form
//! drafts. Domain data lives in the stores.

use crate::breathing::{BreathingExercise, BreathingTimer};
use crate::models::{
    CommunicationStyle, CrisisSeverity, MoodLevel, NotificationSetting, PersonalizationPreferences,
    CONTENT_TYPES,
};
use crate::selection::TagPicker;
use crate::widgets::InputBox;

use super::forms::{CommentForm, ContactForm, GoalForm, JournalForm, MoodForm, PostForm};

/// Move a list cursor by one, clamped to `len`.
pub fn step_index(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (index + 1).min(len - 1)
    } else {
        index.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatView {
    pub input: InputBox,
    /// Lines scrolled up from the bottom
    pub scroll: u16,
}

#[derive(Debug, Clone, Default)]
pub struct MoodView {
    pub form: MoodForm,
    pub show_insights: bool,
}

/// Which tool the tools screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolPanel {
    #[default]
    Menu,
    Breathing,
    Mindfulness,
    Journal,
    Goals,
}

impl ToolPanel {
    pub const MENU: [ToolPanel; 4] = [
        ToolPanel::Breathing,
        ToolPanel::Mindfulness,
        ToolPanel::Journal,
        ToolPanel::Goals,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolPanel::Menu => "Tools",
            ToolPanel::Breathing => "Breathing exercises",
            ToolPanel::Mindfulness => "Mindfulness sessions",
            ToolPanel::Journal => "CBT thought journal",
            ToolPanel::Goals => "Wellness goals",
        }
    }
}

/// A therapy session opened when a breathing exercise starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    /// Server id, once the start request has returned
    pub id: Option<String>,
    /// Seconds actually breathed
    pub elapsed_secs: u32,
    pub mood_before: Option<MoodLevel>,
}

#[derive(Debug, Clone, Default)]
pub struct ToolsView {
    pub panel: ToolPanel,
    pub menu_index: usize,
    pub timer: BreathingTimer,
    pub preset_index: usize,
    pub session: Option<ActiveSession>,
    /// Mood picked before the run starts
    pub mood_before: Option<MoodLevel>,
    /// Mood picked during or after the run
    pub mood_after: Option<MoodLevel>,
    pub mindfulness_index: usize,
    pub journal: JournalForm,
    pub goal_index: usize,
    pub goal_form: Option<GoalForm>,
}

impl ToolsView {
    /// Switch to the neighbouring exercise in `exercises`. The timer resets.
    pub fn cycle_preset(&mut self, exercises: &[BreathingExercise], forward: bool) {
        let len = exercises.len();
        if len == 0 {
            return;
        }
        self.preset_index = if forward {
            (self.preset_index + 1) % len
        } else {
            (self.preset_index + len - 1) % len
        };
        self.timer.select(exercises[self.preset_index].clone());
    }

    /// Point the idle timer at the current entry of a fresh exercise list.
    /// A running timer keeps its exercise.
    pub fn reselect(&mut self, exercises: &[BreathingExercise]) {
        if !self.timer.is_stopped() || exercises.is_empty() {
            return;
        }
        self.preset_index = self.preset_index.min(exercises.len() - 1);
        self.timer.select(exercises[self.preset_index].clone());
    }

    /// Record a 1..=5 mood key: before the run while idle, after it once
    /// a run is under way.
    pub fn rate_mood(&mut self, level: MoodLevel) {
        if self.session.is_some() {
            self.mood_after = Some(level);
        } else {
            self.mood_before = Some(level);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Profile,
    Settings,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileView {
    pub tab: ProfileTab,
    pub setting_index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CommunityView {
    pub selected: usize,
    pub compose: Option<PostForm>,
    pub comment: Option<CommentForm>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationsView {
    pub selected: usize,
    /// Reminder settings panel is open
    pub settings_open: bool,
    pub setting_index: usize,
}

impl NotificationsView {
    pub fn selected_setting(&self) -> NotificationSetting {
        NotificationSetting::ALL[self.setting_index.min(NotificationSetting::ALL.len() - 1)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrisisTab {
    #[default]
    Resources,
    Contacts,
}

#[derive(Debug, Clone, Default)]
pub struct CrisisView {
    pub tab: CrisisTab,
    pub selected: usize,
    pub contact_form: Option<ContactForm>,
    /// Open while the user confirms a support request at this severity
    pub support_confirm: Option<CrisisSeverity>,
}

#[derive(Debug, Clone)]
pub struct PersonalizationView {
    pub content: TagPicker,
    pub style: CommunicationStyle,
    pub selected: usize,
}

impl PersonalizationView {
    /// Seed the pickers from saved preferences.
    pub fn load(&mut self, prefs: &PersonalizationPreferences) {
        self.content.selected = prefs.content_types.iter().map(String::as_str).collect();
        self.style = prefs.communication_style;
    }

    /// Preferences built from the pickers on top of `base`.
    pub fn preferences(&self, base: PersonalizationPreferences) -> PersonalizationPreferences {
        PersonalizationPreferences {
            content_types: self.content.selected.to_vec(),
            communication_style: self.style,
            ..base
        }
    }
}

impl Default for PersonalizationView {
    fn default() -> Self {
        Self {
            content: TagPicker::new(CONTENT_TYPES),
            style: CommunicationStyle::default(),
            selected: 0,
        }
    }
}
