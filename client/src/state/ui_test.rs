use super::*;

fn toast(title: &str) -> Toast {
    Toast { title: title.to_owned(), description: String::new() }
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_toast() {
    let state = UiState::default();
    assert_eq!(state.toast, None);
    assert_eq!(state.toast_seq, 0);
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn dismiss_with_current_seq_hides_toast() {
    let mut state = UiState::default();
    let seq = state.show_toast(toast("Upload Complete!"));
    state.dismiss_toast(seq);
    assert_eq!(state.toast, None);
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = UiState::default();
    let first = state.show_toast(toast("first"));
    let second = state.show_toast(toast("second"));
    assert_ne!(first, second);
    state.dismiss_toast(first);
    assert_eq!(state.toast, Some(toast("second")));
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn freshly_mounted_pages_open_the_first_tab() {
    assert_eq!(DashboardTab::default(), DashboardTab::ALL[0]);
    assert_eq!(DashboardTab::default(), DashboardTab::Summary);
    assert_eq!(InsightsTab::default(), InsightsTab::ALL[0]);
    assert_eq!(InsightsTab::default(), InsightsTab::Sentiment);
}

#[test]
fn dashboard_tab_labels() {
    let labels: Vec<&str> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Summary & Insights", "Action Items", "Full Transcript"]);
}

#[test]
fn insights_tab_labels() {
    let labels: Vec<&str> = InsightsTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Sentiment Trends", "Deadline Performance", "Meeting Types"]);
}
