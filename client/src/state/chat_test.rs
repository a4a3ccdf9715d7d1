use futures::executor::block_on;

use super::*;
use crate::net::assistant::{Responder, respond};

fn with_input(text: &str) -> ChatState {
    let mut state = ChatState::new(1.0);
    state.input = text.to_owned();
    state
}

fn no_wait(_: std::time::Duration) -> std::future::Ready<()> {
    std::future::ready(())
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_state_holds_welcome_only() {
    let state = ChatState::new(5.0);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::Bot);
    assert_eq!(state.messages[0].content, WELCOME_MESSAGE);
    assert!(!state.loading);
    assert!(state.shows_suggestions());
}

#[test]
fn stamp_welcome_takes_the_client_clock() {
    let mut state = ChatState::new(0.0);
    state.stamp_welcome(1_734_253_530_000.0);
    assert_eq!(state.messages[0].timestamp, 1_734_253_530_000.0);
}

#[test]
fn stamp_welcome_ignores_started_conversation() {
    let mut state = with_input("hello");
    state.begin_send(2.0);
    state.stamp_welcome(99.0);
    assert_eq!(state.messages[0].timestamp, 1.0);
}

#[test]
fn time_label_is_withheld_until_mounted() {
    let state = ChatState::new(1_734_253_530_000.0);
    let id = state.messages[0].id.clone();
    assert_eq!(state.time_label(&id, false), None);
}

#[test]
fn welcome_time_label_uses_the_restamped_clock() {
    let mut state = ChatState::new(0.0);
    let id = state.messages[0].id.clone();
    state.stamp_welcome(1_734_253_530_000.0);
    assert_eq!(state.time_label(&id, true), Some(format_clock(1_734_253_530_000.0)));
    assert_ne!(state.time_label(&id, true), Some(format_clock(0.0)));
}

#[test]
fn time_label_unknown_id_is_none() {
    let state = ChatState::new(1.0);
    assert_eq!(state.time_label("missing", true), None);
}

#[test]
fn use_suggestion_fills_input() {
    let mut state = ChatState::default();
    state.use_suggestion(SUGGESTED_QUERIES[1]);
    assert_eq!(state.input, "What action items are pending?");
    assert!(state.can_send());
}

// =============================================================
// begin_send guard
// =============================================================

#[test]
fn begin_send_posts_user_message_and_typing_indicator() {
    let mut state = with_input("  any deadlines?  ");
    let prompt = state.begin_send(2.0);

    assert_eq!(prompt.as_deref(), Some("any deadlines?"));
    assert!(state.input.is_empty());
    assert!(state.loading);
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[1].sender, Sender::User);
    assert_eq!(state.messages[1].content, "any deadlines?");
    assert!(state.messages[2].is_typing);
    assert_eq!(state.messages[2].id, TYPING_MESSAGE_ID);
    assert!(!state.shows_suggestions());
}

#[test]
fn blank_input_is_not_sent() {
    let mut state = with_input("   ");
    assert_eq!(state.begin_send(2.0), None);
    assert_eq!(state.messages.len(), 1);
    assert!(!state.loading);
}

#[test]
fn send_while_in_flight_is_a_no_op() {
    let mut state = with_input("first");
    state.begin_send(2.0);
    state.input = "second".to_owned();
    let before = state.clone();

    assert!(!state.can_send());
    assert_eq!(state.begin_send(3.0), None);
    assert_eq!(state, before);
    assert_eq!(state.messages.iter().filter(|m| m.sender == Sender::User).count(), 1);
}

// =============================================================
// finish_send
// =============================================================

#[test]
fn successful_round_trip_replaces_typing_with_one_reply() {
    let mut state = with_input("hello");
    let prompt = state.begin_send(2.0).unwrap();
    let reply = block_on(respond(None, prompt, no_wait));
    state.finish_send(reply, 3.0);

    assert!(!state.is_typing());
    assert!(!state.loading);
    assert_eq!(state.messages.len(), 3);
    let last = state.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert!(last.content.starts_with("I can help you with information about"));
}

#[test]
fn responder_failure_posts_apology() {
    let failing = Responder::new(|_m: String| async { Err(ResponderError::Failed("boom".to_owned())) });
    let mut state = with_input("summary");
    let prompt = state.begin_send(2.0).unwrap();
    let outcome = block_on(respond(Some(&failing), prompt, no_wait));
    state.finish_send(outcome, 3.0);

    assert!(!state.is_typing());
    assert!(!state.loading);
    assert_eq!(state.messages.last().unwrap().content, APOLOGY_MESSAGE);
    assert_eq!(state.messages.iter().filter(|m| m.content == APOLOGY_MESSAGE).count(), 1);
}

#[test]
fn injected_responder_reply_is_appended() {
    let echo = Responder::new(|m: String| async move { Ok(m.to_uppercase()) });
    let mut state = with_input("ping");
    let prompt = state.begin_send(2.0).unwrap();
    state.finish_send(block_on(respond(Some(&echo), prompt, no_wait)), 3.0);
    assert_eq!(state.messages.last().unwrap().content, "PING");
}

#[test]
fn sending_is_possible_again_after_finish() {
    let mut state = with_input("one");
    state.begin_send(2.0);
    state.finish_send(Ok("ok".to_owned()), 3.0);
    state.input = "two".to_owned();
    assert!(state.begin_send(4.0).is_some());
}

#[test]
fn message_ids_are_unique() {
    let mut state = with_input("one");
    state.begin_send(2.0);
    state.finish_send(Ok("ok".to_owned()), 3.0);
    let mut ids: Vec<&str> = state.messages.iter().map(|m| m.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.messages.len());
}
