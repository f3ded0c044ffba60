use chain_core::{Dictionary, GameSession};
use chain_types::RoomId;
use rand::rngs::mock::StepRng;

/// The chain from the design scenarios: 사과 > 과일 > 일기 > 기린, with no
/// continuation for 린.
pub fn scenario_dictionary() -> Dictionary {
    Dictionary::from_lines("사과\n과일\n일기\n기린")
}

/// Always selects the first candidate, making bot moves deterministic.
pub fn fixed_rng() -> StepRng {
    StepRng::new(0, 0)
}

pub fn session_in_progress(dict: &Dictionary, rng: &mut StepRng) -> GameSession {
    let mut session = GameSession::new(RoomId(100));
    session.start().unwrap();
    session.begin(dict, rng).unwrap();
    session
}
