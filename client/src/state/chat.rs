#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::assistant::ResponderError;
use crate::util::time::format_clock;

/// Id of the transient "Thinking..." message.
pub const TYPING_MESSAGE_ID: &str = "typing";

pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI meeting assistant. I can help you find information about your meetings, action items, participants, and more. What would you like to know?";

pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I'm having trouble processing your request right now. Please try again.";

/// Prompts offered before the first exchange.
pub const SUGGESTED_QUERIES: [&str; 4] = [
    "Show me my latest meeting summary",
    "What action items are pending?",
    "How is team sentiment trending?",
    "Who attended my last meeting?",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: f64,
    /// Placeholder shown while a reply is outstanding.
    pub is_typing: bool,
}

impl ChatMessage {
    fn new(sender: Sender, content: String, timestamp: f64) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), content, sender, timestamp, is_typing: false }
    }

    fn typing(timestamp: f64) -> Self {
        Self {
            id: TYPING_MESSAGE_ID.to_owned(),
            content: String::new(),
            sender: Sender::Bot,
            timestamp,
            is_typing: true,
        }
    }
}

/// Conversation, draft input and the single-in-flight guard for the
/// assistant panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// A reply is outstanding; further sends are refused.
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ChatState {
    /// Fresh conversation holding only the assistant greeting.
    pub fn new(now: f64) -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Bot, WELCOME_MESSAGE.to_owned(), now)],
            input: String::new(),
            loading: false,
        }
    }

    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Suggestions are offered until the first message is sent.
    pub fn shows_suggestions(&self) -> bool {
        self.messages.len() == 1
    }

    pub fn use_suggestion(&mut self, query: &str) {
        query.clone_into(&mut self.input);
    }

    /// Start an exchange: post the user's message and the typing indicator.
    ///
    /// Returns the prompt to answer, or `None` (nothing changed) when the
    /// input is blank or a reply is already outstanding.
    pub fn begin_send(&mut self, now: f64) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let prompt = self.input.trim().to_owned();
        self.messages.push(ChatMessage::new(Sender::User, prompt.clone(), now));
        self.input.clear();
        self.loading = true;
        self.messages.push(ChatMessage::typing(now));
        Some(prompt)
    }

    /// Finish the outstanding exchange with the responder's outcome.
    ///
    /// The typing indicator is always removed and `loading` always cleared;
    /// a failure posts [`APOLOGY_MESSAGE`] in place of a reply.
    pub fn finish_send(&mut self, outcome: Result<String, ResponderError>, now: f64) {
        self.messages.retain(|m| m.id != TYPING_MESSAGE_ID);
        let content = outcome.unwrap_or_else(|e| {
            leptos::logging::warn!("{e}");
            APOLOGY_MESSAGE.to_owned()
        });
        self.messages.push(ChatMessage::new(Sender::Bot, content, now));
        self.loading = false;
    }

    /// Re-stamp the greeting with the viewer's clock. Does nothing once the
    /// conversation has started.
    pub fn stamp_welcome(&mut self, now: f64) {
        if let [welcome] = self.messages.as_mut_slice() {
            welcome.timestamp = now;
        }
    }

    /// `HH:MM` label for message `id`. `None` until the view is mounted in
    /// the browser, so server-rendered markup never carries a server clock.
    pub fn time_label(&self, id: &str, mounted: bool) -> Option<String> {
        if !mounted {
            return None;
        }
        self.messages.iter().find(|m| m.id == id).map(|m| format_clock(m.timestamp))
    }

    pub fn is_typing(&self) -> bool {
        self.messages.iter().any(|m| m.is_typing)
    }
}
