//! Assistant responder seam for the chat panel.
//!
//! DESIGN
//! ======
//! The chat panel never knows where answers come from. A page may inject a
//! [`Responder`]; without one the panel falls back to [`canned_response`], a
//! keyword table that stands in for a real assistant backend.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Delay before the built-in canned answer is returned.
pub const CANNED_RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Delay of the mock backend responder injected by the chat page.
pub const MOCK_BACKEND_DELAY: Duration = Duration::from_millis(1000);

pub const MOCK_BACKEND_REPLY: &str =
    "This is a mock response. In a real implementation, this would call your backend API.";

const SUMMARY_REPLY: &str = "I found your most recent meeting summary: 'Q4 Planning Session' held on December 15th. The team discussed budget allocation, project timelines, and resource planning. Key decisions included increasing the marketing budget by 15% and moving the product launch to Q1 2024.";

const ACTIONS_REPLY: &str = "Here are your pending action items:\n\n1. Review Q4 budget proposal (Due: Dec 20) - Assigned to Sarah\n2. Update project timeline (Due: Dec 18) - Assigned to Mike\n3. Prepare marketing materials (Due: Dec 22) - Assigned to Jessica\n\nWould you like more details on any of these items?";

const PARTICIPANTS_REPLY: &str = "Your recent meetings included these participants:\n\n• Sarah Johnson (Project Manager)\n• Mike Chen (Developer)\n• Jessica Williams (Marketing)\n• Alex Thompson (Designer)\n• David Rodriguez (Product Owner)\n\nWould you like to see meeting participation patterns or contact information?";

const SENTIMENT_REPLY: &str = "Based on the analysis of your recent meetings:\n\n📈 Overall sentiment: Positive (72%)\n😊 Most positive meeting: 'Team Retrospective' (85% positive)\n😐 Most neutral meeting: 'Budget Review' (60% neutral)\n\nThe team seems engaged and optimistic about upcoming projects!";

const DEADLINES_REPLY: &str = "Here's your deadline overview:\n\n✅ Completed on time: 8 out of 10 items (80%)\n⏰ Upcoming deadlines:\n• Project proposal review (2 days)\n• Client presentation prep (5 days)\n• Team performance reviews (1 week)\n\nYour team has been performing well with deadline management!";

const HELP_REPLY: &str = "I can help you with information about:\n\n• Meeting summaries and transcripts\n• Action items and deadlines\n• Participant information\n• Meeting sentiment analysis\n• Deadline performance\n\nWhat specific information would you like to explore?";

/// Failure reported by a responder.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResponderError {
    #[error("assistant request failed: {0}")]
    Failed(String),
}

/// Boxed, browser-local future produced by a responder.
pub type ResponseFuture = Pin<Box<dyn Future<Output = Result<String, ResponderError>>>>;

/// Injectable async answer source: user message in, reply text out.
#[derive(Clone)]
pub struct Responder(Arc<dyn Fn(String) -> ResponseFuture + Send + Sync>);

impl Responder {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, ResponderError>> + 'static,
    {
        Self(Arc::new(move |message| Box::pin(f(message))))
    }

    pub fn call(&self, message: String) -> ResponseFuture {
        (self.0)(message)
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Responder(..)")
    }
}

/// Keyword-matched reply for a user message. First matching rule wins.
pub fn canned_response(input: &str) -> &'static str {
    let input = input.to_lowercase();
    let has = |needle: &str| input.contains(needle);

    if has("meeting") && has("summary") {
        SUMMARY_REPLY
    } else if has("action") || has("task") {
        ACTIONS_REPLY
    } else if has("participant") || has("attendee") {
        PARTICIPANTS_REPLY
    } else if has("sentiment") || has("mood") {
        SENTIMENT_REPLY
    } else if has("deadline") || has("due") {
        DEADLINES_REPLY
    } else {
        HELP_REPLY
    }
}

/// Answer `prompt` with the injected responder, or the canned table after
/// [`CANNED_RESPONSE_DELAY`] when none is set.
pub async fn respond<S, Fut>(
    responder: Option<&Responder>,
    prompt: String,
    sleep: S,
) -> Result<String, ResponderError>
where
    S: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    match responder {
        Some(responder) => responder.call(prompt).await,
        None => {
            sleep(CANNED_RESPONSE_DELAY).await;
            Ok(canned_response(&prompt).to_owned())
        }
    }
}

/// Responder used by the chat page until a real backend exists.
pub fn mock_backend_responder() -> Responder {
    Responder::new(|_message: String| async {
        crate::util::timer::sleep(MOCK_BACKEND_DELAY).await;
        Ok(MOCK_BACKEND_REPLY.to_owned())
    })
}
