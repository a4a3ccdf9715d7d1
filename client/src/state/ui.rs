//! UI chrome: the shared toast slot and the page tab enums.
//!
//! DESIGN
//! ======
//! Only the toast is shared through context. Each page holds its selected
//! tab in its own signal, so a tab resets to the first panel on every mount.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(5);

/// UI state provided via context from the root component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub toast: Option<Toast>,
    /// Bumped on every toast so a stale dismiss timer can tell it was
    /// superseded.
    pub toast_seq: u64,
}

impl UiState {
    /// Show `toast`, replacing any visible one. Returns its sequence number.
    pub fn show_toast(&mut self, toast: Toast) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(toast);
        self.toast_seq
    }

    /// Dismiss the toast if it is still the one numbered `seq`.
    pub fn dismiss_toast(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

/// Tabs on the meeting dashboard. The default is the first panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Summary,
    Actions,
    Transcript,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Summary, Self::Actions, Self::Transcript];

    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary & Insights",
            Self::Actions => "Action Items",
            Self::Transcript => "Full Transcript",
        }
    }
}

/// Chart tabs on the insights page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InsightsTab {
    #[default]
    Sentiment,
    Deadlines,
    Types,
}

impl InsightsTab {
    pub const ALL: [Self; 3] = [Self::Sentiment, Self::Deadlines, Self::Types];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sentiment => "Sentiment Trends",
            Self::Deadlines => "Deadline Performance",
            Self::Types => "Meeting Types",
        }
    }
}
