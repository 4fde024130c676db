//! Server-aggregated analytics.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl AnalyticsPeriod {
    pub const ALL: [AnalyticsPeriod; 4] = [
        AnalyticsPeriod::Week,
        AnalyticsPeriod::Month,
        AnalyticsPeriod::Quarter,
        AnalyticsPeriod::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Week => "week",
            AnalyticsPeriod::Month => "month",
            AnalyticsPeriod::Quarter => "quarter",
            AnalyticsPeriod::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Week => "Week",
            AnalyticsPeriod::Month => "Month",
            AnalyticsPeriod::Quarter => "Quarter",
            AnalyticsPeriod::Year => "Year",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            AnalyticsPeriod::Week => AnalyticsPeriod::Month,
            AnalyticsPeriod::Month => AnalyticsPeriod::Quarter,
            AnalyticsPeriod::Quarter => AnalyticsPeriod::Year,
            AnalyticsPeriod::Year => AnalyticsPeriod::Week,
        }
    }
}

/// Trend arrays hold one value per day: mood on the 1..=5 scale, stress and
/// sleep on 1..=10.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsData {
    pub period: Option<AnalyticsPeriod>,
    pub mood_trend: Vec<f64>,
    pub stress_trend: Vec<f64>,
    pub sleep_trend: Vec<f64>,
    pub therapy_session_count: u32,
    /// Percent, 0..=100.
    pub goal_progress: f64,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Scale `values` from `0..=max` onto `0..=100` for a sparkline.
pub fn sparkline(values: &[f64], max: f64) -> Vec<u64> {
    values
        .iter()
        .map(|v| (v.clamp(0.0, max) * 100.0 / max).round() as u64)
        .collect()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

impl AnalyticsData {
    pub fn mood_sparkline(&self) -> Vec<u64> {
        sparkline(&self.mood_trend, 5.0)
    }

    pub fn average_mood(&self) -> Option<f64> {
        mean(&self.mood_trend)
    }

    pub fn average_stress(&self) -> Option<f64> {
        mean(&self.stress_trend)
    }

    pub fn average_sleep(&self) -> Option<f64> {
        mean(&self.sleep_trend)
    }
}

/// Summary of progress across goals, sessions and mood.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressReport {
    pub summary: String,
    pub goals_completed: u32,
    pub sessions_completed: u32,
    /// Change in average mood over the report window.
    pub mood_change: Option<f64>,
    pub highlights: Vec<String>,
}
