use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info};

use chain_types::{
    CommandError, EndReason, Move, RejectReason, RoomId, SessionEvent, SessionPhase, UserId,
};

use crate::Dictionary;
use crate::{dueum, selector};

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Bot replied; the game continues.
    Continue(SessionEvent),
    /// Bot had no reply; the submitting player wins and the game ends.
    Won(SessionEvent),
}

impl SubmitOutcome {
    pub fn into_event(self) -> SessionEvent {
        match self {
            SubmitOutcome::Continue(event) | SubmitOutcome::Won(event) => event,
        }
    }
}

/// One room's word-chain game.
///
/// All mutation goes through the methods below; each state-changing call
/// yields exactly one event for the messaging layer to deliver. Rejected
/// submissions come back as errors and leave the session untouched.
#[derive(Debug)]
pub struct GameSession {
    room_id: RoomId,
    phase: SessionPhase,
    history: Vec<Move>,
    current_word: Option<String>,
    // Materialized view of history, maintained alongside it.
    used_words: HashSet<String>,
}

impl GameSession {
    pub fn new(room_id: RoomId) -> Self {
        Self {
            room_id,
            phase: SessionPhase::Idle,
            history: Vec::new(),
            current_word: None,
            used_words: HashSet::new(),
        }
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn current_word(&self) -> Option<&str> {
        self.current_word.as_deref()
    }

    /// Start command: Idle -> AwaitingStart. Refused while a game is
    /// already open or running in the room.
    pub fn start(&mut self) -> Result<(), CommandError> {
        match self.phase {
            SessionPhase::AwaitingStart | SessionPhase::InProgress => {
                Err(CommandError::GameAlreadyActive)
            }
            SessionPhase::Idle => {
                self.reset();
                self.phase = SessionPhase::AwaitingStart;
                info!(room = %self.room_id, "game opened, waiting for start control");
                Ok(())
            }
        }
    }

    /// Start control pressed: AwaitingStart -> InProgress. The bot opens
    /// with a uniformly random dictionary word.
    pub fn begin<R: Rng + ?Sized>(
        &mut self,
        dict: &Dictionary,
        rng: &mut R,
    ) -> Result<SessionEvent, CommandError> {
        if self.phase != SessionPhase::AwaitingStart {
            return Err(CommandError::NotAwaitingStart);
        }
        let Some(word) = selector::opening_word(dict, rng) else {
            return Err(CommandError::NoWordsAvailable);
        };
        self.record(Move::bot(word.clone()));
        self.phase = SessionPhase::InProgress;
        info!(room = %self.room_id, opening = %word, "game started");
        Ok(self.status_update())
    }

    /// Validate and record a human move, then let the bot answer.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        user: UserId,
        raw_word: &str,
        dict: &Dictionary,
        rng: &mut R,
    ) -> Result<SubmitOutcome, CommandError> {
        if self.phase != SessionPhase::InProgress {
            return Err(CommandError::NoActiveGame);
        }
        let word = raw_word.trim();
        let last = self.validate(word, dict)?;
        self.record(Move::human(user, word));
        debug!(room = %self.room_id, user = %user, word = %word, "word accepted");

        match selector::bot_move(dict, last, &self.used_words, rng) {
            Some(reply) => {
                self.record(Move::bot(reply));
                Ok(SubmitOutcome::Continue(self.status_update()))
            }
            None => {
                info!(room = %self.room_id, "bot has no reply, player wins");
                Ok(SubmitOutcome::Won(self.finish(EndReason::BotForfeit)))
            }
        }
    }

    /// Manual end, allowed from either active phase.
    pub fn end(&mut self) -> Result<SessionEvent, CommandError> {
        match self.phase {
            SessionPhase::Idle => Err(CommandError::NoActiveGame),
            SessionPhase::AwaitingStart | SessionPhase::InProgress => {
                Ok(self.finish(EndReason::ManualEnd))
            }
        }
    }

    /// Pipeline from the game rules, first failure wins. Returns the final
    /// syllable of the accepted word for the bot's continuation.
    fn validate(&self, word: &str, dict: &Dictionary) -> Result<char, RejectReason> {
        if word.chars().count() < 2 {
            return Err(RejectReason::TooShort);
        }
        if !dueum::is_playable_word(word) {
            return Err(RejectReason::InvalidFormat);
        }
        let known = dict.contains(word) || dict.contains(&dueum::apply_substitution(word));
        if !known || self.used_words.contains(word) {
            return Err(RejectReason::InvalidOrUsed);
        }
        let current = self
            .current_word
            .as_deref()
            .ok_or(RejectReason::WrongStartingSyllable)?;
        let first = word.chars().next().ok_or(RejectReason::TooShort)?;
        if !dueum::matches_chain_rule(current, first) {
            return Err(RejectReason::WrongStartingSyllable);
        }
        word.chars().last().ok_or(RejectReason::TooShort)
    }

    fn record(&mut self, mv: Move) {
        self.used_words.insert(mv.word.clone());
        self.current_word = Some(mv.word.clone());
        self.history.push(mv);
    }

    fn status_update(&self) -> SessionEvent {
        let current = self.current_word.clone().unwrap_or_default();
        let prompt = match current.chars().last() {
            Some(next) => format!("다음 단어는 '{next}'(으)로 시작해야 해요."),
            None => String::new(),
        };
        SessionEvent::StatusUpdate {
            current_word: current,
            prompt,
            history: self.history.clone(),
        }
    }

    /// Terminal transition: hand the transcript out and fall back to Idle
    /// so the room can start again without another command.
    fn finish(&mut self, reason: EndReason) -> SessionEvent {
        let history = std::mem::take(&mut self.history);
        self.used_words.clear();
        self.current_word = None;
        self.phase = SessionPhase::Idle;
        info!(room = %self.room_id, ?reason, moves = history.len(), "game ended");
        SessionEvent::GameEnded { reason, history }
    }

    fn reset(&mut self) {
        self.history.clear();
        self.used_words.clear();
        self.current_word = None;
    }
}
