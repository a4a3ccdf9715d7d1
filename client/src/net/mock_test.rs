use super::*;
use crate::net::types::{ActionStatus, Sentiment, TrendDirection};

#[test]
fn meeting_fixture_parses() {
    let meeting = mock_meeting().unwrap();
    assert_eq!(meeting.id, "meeting-1");
    assert_eq!(meeting.title, "Q4 Strategic Planning Session");
    assert_eq!(meeting.participants.len(), 5);
    assert_eq!(meeting.key_decisions.len(), 5);
    assert_eq!(meeting.sentiment, Sentiment::Positive);
    assert_eq!(meeting.confidence, 87);
}

#[test]
fn actions_fixture_parses_with_mixed_statuses() {
    let actions = mock_actions().unwrap();
    assert_eq!(actions.len(), 4);
    assert_eq!(actions[0].status, ActionStatus::InProgress);
    assert!(actions[1].is_overdue);
    assert_eq!(actions[3].status, ActionStatus::Completed);
}

#[test]
fn insights_fixture_parses() {
    let insights = mock_insights().unwrap();
    assert_eq!(insights.sentiment_trend.len(), 7);
    assert_eq!(insights.deadline_performance.len(), 6);
    assert_eq!(insights.meeting_types.len(), 5);
    assert_eq!(insights.monthly_stats.total_meetings, 45);
    assert_eq!(insights.monthly_stats.trend_direction, TrendDirection::Up);
}

#[test]
fn transcript_starts_with_first_speaker() {
    let transcript = mock_transcript();
    assert!(transcript.starts_with("[00:00:00] Sarah Johnson:"));
    assert!(!transcript.ends_with('\n'));
}

#[test]
fn loaders_return_independent_copies() {
    let mut first = mock_actions().unwrap();
    first[0].status = ActionStatus::Completed;
    let second = mock_actions().unwrap();
    assert_eq!(second[0].status, ActionStatus::InProgress);
}

#[test]
fn malformed_fixture_reports_name() {
    let err = parse_fixture::<MeetingRecord>("broken.json", "{").unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn or_empty_falls_back_to_default() {
    let err = parse_fixture::<Vec<ActionItem>>("broken.json", "nope");
    assert!(or_empty(err).is_empty());
}
