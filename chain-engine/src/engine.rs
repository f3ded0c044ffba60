use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::sync::{MutexGuard, PoisonError};

use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::debug;

use chain_core::{Dictionary, GameSession};
use chain_types::{CommandError, RoomId, SessionEvent, SessionPhase, UserId};

/// Process-wide registry of per-room game sessions.
///
/// Sessions are created lazily on the first start command for a room and
/// kept for the life of the process, so a room can start again after an
/// end. A per-session mutex serializes same-room commands (double-clicked
/// controls included) while the sharded map keeps rooms independent of
/// each other.
///
/// Every command commits session state before its event is handed back to
/// the caller; delivering the event to the chat platform is the caller's
/// fire-and-forget concern and cannot affect game state.
pub struct WordChainEngine<R: Rng = StdRng> {
    dictionary: Arc<Dictionary>,
    sessions: DashMap<RoomId, Arc<Mutex<GameSession>>>,
    rng: StdMutex<R>,
}

impl WordChainEngine<StdRng> {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self::with_rng(dictionary, StdRng::from_entropy())
    }
}

impl<R: Rng> WordChainEngine<R> {
    /// Injectable randomness source, for deterministic tests.
    pub fn with_rng(dictionary: Arc<Dictionary>, rng: R) -> Self {
        Self {
            dictionary,
            sessions: DashMap::new(),
            rng: StdMutex::new(rng),
        }
    }

    /// Start command for a room: open a game and surface the start control.
    pub async fn start_command(&self, room: RoomId) -> Result<(), CommandError> {
        let session = self.session(room);
        let mut session = session.lock().await;
        session.start()
    }

    /// Start control pressed: pick the opening word and begin play.
    pub async fn start_control_pressed(&self, room: RoomId) -> Result<SessionEvent, CommandError> {
        let session = self.session(room);
        let mut session = session.lock().await;
        let mut rng = self.lock_rng();
        session.begin(&self.dictionary, &mut *rng)
    }

    /// Word submitted in a room. Returns the resulting broadcast; reject
    /// reasons come back as errors addressed to the submitting player only.
    pub async fn submit_word(
        &self,
        room: RoomId,
        user: UserId,
        raw_text: &str,
    ) -> Result<SessionEvent, CommandError> {
        let session = self.session(room);
        let mut session = session.lock().await;
        let outcome = {
            let mut rng = self.lock_rng();
            session.submit(user, raw_text, &self.dictionary, &mut *rng)?
        };
        Ok(outcome.into_event())
    }

    /// Manual end command.
    pub async fn manual_end(&self, room: RoomId) -> Result<SessionEvent, CommandError> {
        let session = self.session(room);
        let mut session = session.lock().await;
        session.end()
    }

    /// End control pressed; same handling as the manual end command.
    pub async fn end_control_pressed(&self, room: RoomId) -> Result<SessionEvent, CommandError> {
        self.manual_end(room).await
    }

    /// Current phase of a room's session, if one was ever created.
    pub async fn phase(&self, room: RoomId) -> Option<SessionPhase> {
        let session = self.sessions.get(&room)?.value().clone();
        let session = session.lock().await;
        Some(session.phase())
    }

    pub fn room_count(&self) -> usize {
        self.sessions.len()
    }

    fn session(&self, room: RoomId) -> Arc<Mutex<GameSession>> {
        self.sessions
            .entry(room)
            .or_insert_with(|| {
                debug!(%room, "tracking new room");
                Arc::new(Mutex::new(GameSession::new(room)))
            })
            .value()
            .clone()
    }

    fn lock_rng(&self) -> MutexGuard<'_, R> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
