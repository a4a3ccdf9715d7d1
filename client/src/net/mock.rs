//! Embedded mock fixtures standing in for backend responses.
//!
//! Each loader parses its fixture on every call, so a page that loads data on
//! mount gets a fresh copy for the session and edits never leak between pages.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use serde::de::DeserializeOwned;

use super::types::{ActionItem, InsightsData, MeetingRecord};

const MEETING_JSON: &str = include_str!("../../mock/meeting.json");
const ACTIONS_JSON: &str = include_str!("../../mock/actions.json");
const INSIGHTS_JSON: &str = include_str!("../../mock/insights.json");
const TRANSCRIPT_TXT: &str = include_str!("../../mock/transcript.txt");

/// Transcript confidence shown under the transcript tab.
pub const TRANSCRIPT_CONFIDENCE: u8 = 94;

#[derive(Debug, thiserror::Error)]
pub enum MockDataError {
    #[error("mock fixture {fixture} is malformed: {source}")]
    Malformed {
        fixture: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn parse_fixture<T: DeserializeOwned>(fixture: &'static str, raw: &str) -> Result<T, MockDataError> {
    serde_json::from_str(raw).map_err(|source| MockDataError::Malformed { fixture, source })
}

/// The analysed meeting shown on the dashboard.
///
/// # Errors
///
/// Returns [`MockDataError::Malformed`] if the embedded fixture does not match
/// [`MeetingRecord`].
pub fn mock_meeting() -> Result<MeetingRecord, MockDataError> {
    parse_fixture("meeting.json", MEETING_JSON)
}

/// Action items extracted from the dashboard meeting.
///
/// # Errors
///
/// Returns [`MockDataError::Malformed`] if the embedded fixture is invalid.
pub fn mock_actions() -> Result<Vec<ActionItem>, MockDataError> {
    parse_fixture("actions.json", ACTIONS_JSON)
}

/// Analytics for the insights page.
///
/// # Errors
///
/// Returns [`MockDataError::Malformed`] if the embedded fixture is invalid.
pub fn mock_insights() -> Result<InsightsData, MockDataError> {
    parse_fixture("insights.json", INSIGHTS_JSON)
}

pub fn mock_transcript() -> String {
    TRANSCRIPT_TXT.trim_end().to_owned()
}

/// Unwrap a fixture load for rendering, logging and falling back to an empty
/// value when it fails.
pub fn or_empty<T: Default>(loaded: Result<T, MockDataError>) -> T {
    loaded.unwrap_or_else(|e| {
        leptos::logging::warn!("mock data unavailable: {e}");
        T::default()
    })
}
