//! Wellness goals with incremental progress.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    #[default]
    Mental,
    Physical,
    Social,
    Sleep,
    Mindfulness,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 5] = [
        GoalCategory::Mental,
        GoalCategory::Physical,
        GoalCategory::Social,
        GoalCategory::Sleep,
        GoalCategory::Mindfulness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Mental => "Mental",
            GoalCategory::Physical => "Physical",
            GoalCategory::Social => "Social",
            GoalCategory::Sleep => "Sleep",
            GoalCategory::Mindfulness => "Mindfulness",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

pub const MAX_PROGRESS: u8 = 100;

/// Clamp an arbitrary progress value into 0..=100.
pub fn clamp_progress(value: i32) -> u8 {
    value.clamp(0, MAX_PROGRESS as i32) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessGoal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub category: GoalCategory,
    #[serde(default, rename = "isCompleted", alias = "completed")]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    pub category: GoalCategory,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressUpdate {
    pub progress: u8,
}
