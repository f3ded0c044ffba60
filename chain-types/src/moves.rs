use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UserId;

/// Who played a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Bot,
    Human(UserId),
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Bot => write!(f, "bot"),
            Speaker::Human(id) => write!(f, "human:{id}"),
        }
    }
}

/// One turn in a game. Appended to the session history in turn order and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub speaker: Speaker,
    pub word: String,
}

impl Move {
    pub fn bot(word: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            word: word.into(),
        }
    }

    pub fn human(user: UserId, word: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Human(user),
            word: word.into(),
        }
    }
}

/// Resting states of a room's session. A finished game falls back to
/// `Idle` immediately after its end summary goes out, so there is no
/// `Ended` resting value; the end is observable through the
/// [`GameEnded`](crate::SessionEvent::GameEnded) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No game open in the room.
    Idle,
    /// Start command issued, opening word not yet chosen.
    AwaitingStart,
    /// Turns alternating between a human and the bot.
    InProgress,
}
