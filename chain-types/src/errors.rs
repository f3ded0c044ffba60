use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submitted word was refused. Surfaced only to the submitting
/// player; the session state is untouched and the word can simply be
/// resubmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum RejectReason {
    #[error("두 글자 이상의 단어를 입력하세요.")]
    TooShort,
    #[error("유효한 한글 단어가 아닙니다. 다시 시도하세요.")]
    InvalidFormat,
    #[error("유효하지 않은 단어이거나 이미 사용된 단어입니다. 다른 단어를 입력하세요.")]
    InvalidOrUsed,
    #[error("이전 단어의 마지막 글자로 시작해야 해요. 다시 시도하세요.")]
    WrongStartingSyllable,
}

/// Failure of an inbound command against a room's session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("이미 진행 중인 게임이 있어요.")]
    GameAlreadyActive,
    #[error("시작을 기다리는 게임이 없어요.")]
    NotAwaitingStart,
    #[error("진행 중인 게임이 없어요.")]
    NoActiveGame,
    #[error("단어 목록이 비어 있어요.")]
    NoWordsAvailable,
    #[error(transparent)]
    Rejected(#[from] RejectReason),
}
