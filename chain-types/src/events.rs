use serde::{Deserialize, Serialize};

use crate::Move;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A player or command ended the game explicitly.
    ManualEnd,
    /// The bot could not find an unused continuation; the player wins.
    BotForfeit,
}

/// Outbound broadcast produced by a state-changing transition, delivered
/// by the external messaging layer. Exactly one event per transition;
/// rejected submissions produce no event at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    StatusUpdate {
        current_word: String,
        prompt: String,
        history: Vec<Move>,
    },
    GameEnded {
        reason: EndReason,
        history: Vec<Move>,
    },
}

impl SessionEvent {
    /// Transcript line in the `speaker: word > speaker: word` format the
    /// status and end-of-game messages use.
    pub fn render_history(history: &[Move]) -> String {
        history
            .iter()
            .map(|m| format!("{}: {}", m.speaker, m.word))
            .collect::<Vec<_>>()
            .join(" > ")
    }

    pub fn history(&self) -> &[Move] {
        match self {
            SessionEvent::StatusUpdate { history, .. } => history,
            SessionEvent::GameEnded { history, .. } => history,
        }
    }
}
