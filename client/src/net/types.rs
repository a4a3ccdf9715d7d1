//! Meeting-analysis data schema.
//!
//! DESIGN
//! ======
//! Field names follow the camelCase JSON a backend would serve, so the mock
//! fixtures and any future API share one set of types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Overall tone of a meeting as reported by analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Neutral => "😐",
            Self::Negative => "😞",
        }
    }

    /// Badge modifier class for this sentiment.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Positive => "badge badge--success",
            Self::Neutral => "badge badge--muted",
            Self::Negative => "badge badge--danger",
        }
    }
}

/// Analysed meeting shown on the dashboard summary tab.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    pub duration: String,
    pub participants: Vec<String>,
    pub summary: String,
    pub key_decisions: Vec<String>,
    pub sentiment: Sentiment,
    /// Analysis confidence, 0-100.
    pub confidence: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ActionStatus {
    /// Human-readable status, e.g. `in progress`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

/// A follow-up task extracted from a meeting.
///
/// `is_overdue` is stored as delivered and never recomputed from `deadline`,
/// which is a display string only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub deadline: String,
    pub priority: Priority,
    pub status: ActionStatus,
    pub is_overdue: bool,
}

impl ActionItem {
    pub fn is_completed(&self) -> bool {
        self.status == ActionStatus::Completed
    }

    /// Whether the item is presented as past due.
    pub fn shows_overdue(&self) -> bool {
        self.is_overdue && !self.is_completed()
    }

    /// Text of the priority badge. Overdue wins over priority.
    pub fn priority_badge(&self) -> &'static str {
        if self.is_overdue { "Overdue" } else { self.priority.label() }
    }

    pub fn priority_badge_class(&self) -> &'static str {
        if self.is_overdue {
            return "badge badge--danger";
        }
        match self.priority {
            Priority::High => "badge badge--danger",
            Priority::Medium => "badge badge--warning",
            Priority::Low => "badge badge--muted",
        }
    }

    pub fn status_badge_class(&self) -> &'static str {
        match self.status {
            ActionStatus::Completed => "badge badge--success",
            ActionStatus::InProgress => "badge badge--primary",
            ActionStatus::Pending => "badge badge--muted",
        }
    }
}

/// One point of the weekly sentiment trend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentPoint {
    pub date: String,
    /// Sentiment score in `0.0..=1.0`.
    pub sentiment: f64,
    pub meetings: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineWeek {
    pub week: String,
    pub completed: u32,
    pub missed: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingTypeSlice {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
    /// CSS color used for the pie slice.
    pub color: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    #[default]
    Up,
    Down,
}

impl TrendDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "Improving",
            Self::Down => "Declining",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Up => "📈",
            Self::Down => "📉",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub total_meetings: u32,
    /// Percentage, 0-100.
    pub completion_rate: u8,
    pub avg_sentiment: f64,
    pub trend_direction: TrendDirection,
}

/// Aggregated analytics for the insights page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsData {
    pub sentiment_trend: Vec<SentimentPoint>,
    pub deadline_performance: Vec<DeadlineWeek>,
    pub meeting_types: Vec<MeetingTypeSlice>,
    pub monthly_stats: MonthlyStats,
}

/// Coarse label for a sentiment score.
pub fn sentiment_label(score: f64) -> &'static str {
    if score >= 0.6 {
        "Positive"
    } else if score >= 0.4 {
        "Neutral"
    } else {
        "Negative"
    }
}
