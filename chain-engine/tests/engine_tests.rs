use std::sync::Arc;

use rand::rngs::mock::StepRng;

use chain_core::Dictionary;
use chain_engine::WordChainEngine;
use chain_types::{
    CommandError, EndReason, RejectReason, RoomId, SessionEvent, SessionPhase, UserId,
};

const ROOM: RoomId = RoomId(1);
const OTHER_ROOM: RoomId = RoomId(2);
const ALICE: UserId = UserId(10);
const BOB: UserId = UserId(11);

/// StepRng(0, 0) always picks the first candidate, so games open with 사과.
fn test_engine() -> WordChainEngine<StepRng> {
    let dict = Arc::new(Dictionary::from_lines("사과\n과일\n일기\n기린"));
    WordChainEngine::with_rng(dict, StepRng::new(0, 0))
}

#[tokio::test]
async fn double_start_in_same_room_is_rejected() {
    let engine = test_engine();

    engine.start_command(ROOM).await.unwrap();
    assert_eq!(
        engine.start_command(ROOM).await,
        Err(CommandError::GameAlreadyActive)
    );

    // Still rejected once play has begun.
    engine.start_control_pressed(ROOM).await.unwrap();
    assert_eq!(
        engine.start_command(ROOM).await,
        Err(CommandError::GameAlreadyActive)
    );
}

#[tokio::test]
async fn rooms_are_independent() {
    let engine = test_engine();

    engine.start_command(ROOM).await.unwrap();
    engine.start_command(OTHER_ROOM).await.unwrap();
    engine.start_control_pressed(ROOM).await.unwrap();
    engine.start_control_pressed(OTHER_ROOM).await.unwrap();

    // A word played in one room stays usable in the other.
    engine.submit_word(ROOM, ALICE, "과일").await.unwrap();
    engine.submit_word(OTHER_ROOM, BOB, "과일").await.unwrap();

    assert_eq!(engine.phase(ROOM).await, Some(SessionPhase::InProgress));
    assert_eq!(
        engine.phase(OTHER_ROOM).await,
        Some(SessionPhase::InProgress)
    );
    assert_eq!(engine.room_count(), 2);
}

#[tokio::test]
async fn ending_an_idle_room_is_an_error() {
    let engine = test_engine();
    assert_eq!(
        engine.manual_end(ROOM).await,
        Err(CommandError::NoActiveGame)
    );
    // The manual end command never ran a game, but the session is tracked.
    assert_eq!(engine.phase(ROOM).await, Some(SessionPhase::Idle));
}

#[tokio::test]
async fn untracked_room_has_no_phase() {
    let engine = test_engine();
    assert_eq!(engine.phase(ROOM).await, None);
    assert_eq!(engine.room_count(), 0);
}

#[tokio::test]
async fn full_game_through_the_engine() {
    let engine = test_engine();

    engine.start_command(ROOM).await.unwrap();
    assert_eq!(engine.phase(ROOM).await, Some(SessionPhase::AwaitingStart));

    let opening = engine.start_control_pressed(ROOM).await.unwrap();
    match &opening {
        SessionEvent::StatusUpdate { current_word, .. } => assert_eq!(current_word, "사과"),
        other => panic!("expected status update, got {other:?}"),
    }

    engine.submit_word(ROOM, ALICE, "과일").await.unwrap();
    let ended = engine.submit_word(ROOM, ALICE, "기린").await;
    // 일기 was the bot's reply; 기린 ends the game because nothing starts
    // with 린.
    match ended.unwrap() {
        SessionEvent::GameEnded { reason, history } => {
            assert_eq!(reason, EndReason::BotForfeit);
            assert_eq!(history.len(), 4);
        }
        other => panic!("expected game end, got {other:?}"),
    }

    // The room can start right away again.
    assert_eq!(engine.phase(ROOM).await, Some(SessionPhase::Idle));
    engine.start_command(ROOM).await.unwrap();
}

#[tokio::test]
async fn rejected_submission_surfaces_the_reason() {
    let engine = test_engine();
    engine.start_command(ROOM).await.unwrap();
    engine.start_control_pressed(ROOM).await.unwrap();

    assert_eq!(
        engine.submit_word(ROOM, ALICE, "사").await,
        Err(CommandError::Rejected(RejectReason::TooShort))
    );
    assert_eq!(
        engine.submit_word(ROOM, ALICE, "일기").await,
        Err(CommandError::Rejected(RejectReason::WrongStartingSyllable))
    );
}

#[tokio::test]
async fn concurrent_same_room_submissions_serialize() {
    let engine = Arc::new(test_engine());
    engine.start_command(ROOM).await.unwrap();
    engine.start_control_pressed(ROOM).await.unwrap();

    // Two players race the same word, as with a double-submitted form.
    let first = tokio::spawn({
        let engine = engine.clone();
        async move { engine.submit_word(ROOM, ALICE, "과일").await }
    });
    let second = tokio::spawn({
        let engine = engine.clone();
        async move { engine.submit_word(ROOM, BOB, "과일").await }
    });

    let results = futures::future::join_all([first, second]).await;
    let results: Vec<_> = results.into_iter().map(|r| r.unwrap()).collect();

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(accepted, 1, "exactly one racing submission may win");
    let rejected = results
        .iter()
        .find_map(|r| r.as_ref().err())
        .expect("the losing submission is rejected");
    assert_eq!(
        rejected,
        &CommandError::Rejected(RejectReason::InvalidOrUsed)
    );

    // 과일 appears exactly once in the session's history.
    let status = engine.manual_end(ROOM).await.unwrap();
    let uses = status
        .history()
        .iter()
        .filter(|m| m.word == "과일")
        .count();
    assert_eq!(uses, 1);
}
