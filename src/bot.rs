use tracing::{debug, error};

use crate::morning::MorningDetector;
use crate::platform::{IncomingMessage, Outbox};

pub const HELP_COMMAND: &str = "/help";
pub const HELP_TEXT: &str = "Напиши Доброе утро";
pub const MORNING_REPLY: &str = "Хуютра!";

/// What the dispatcher decided to do with a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Help,
    Greeted,
    Ignored,
}

/// Decide how to answer `text` without sending anything.
pub fn decide(detector: &MorningDetector, text: &str) -> Outcome {
    if text == HELP_COMMAND {
        return Outcome::Help;
    }

    if detector.detect(&text.to_lowercase()) {
        Outcome::Greeted
    } else {
        Outcome::Ignored
    }
}

/// Answer one inbound message. Send failures are logged, never returned,
/// so one bad send cannot stop the polling loop.
pub async fn handle(
    detector: &MorningDetector,
    outbox: &dyn Outbox,
    msg: &IncomingMessage,
) -> Outcome {
    let outcome = decide(detector, &msg.text);
    debug!("Message {} in chat {}: {:?}", msg.message_id, msg.chat_id, outcome);

    let sent = match outcome {
        Outcome::Help => outbox.send_text(msg.chat_id, HELP_TEXT).await,
        Outcome::Greeted => {
            outbox
                .send_reply(msg.chat_id, msg.message_id, MORNING_REPLY)
                .await
        }
        Outcome::Ignored => Ok(()),
    };

    if let Err(e) = sent {
        error!("Failed to answer chat {}: {:#}", msg.chat_id, e);
    }

    outcome
}
