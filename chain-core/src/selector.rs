use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::Dictionary;
use crate::dueum;

/// Uniform random opening word for a fresh game.
pub fn opening_word<R: Rng + ?Sized>(dict: &Dictionary, rng: &mut R) -> Option<String> {
    dict.words().choose(rng).cloned()
}

/// The bot's reply to a word ending in `last_char`.
///
/// Literal continuations are tried first; when none are left the softened
/// form of `last_char` is tried, matching the alternate spellings a human
/// could legally play. `None` means the bot forfeits.
pub fn bot_move<R: Rng + ?Sized>(
    dict: &Dictionary,
    last_char: char,
    used: &HashSet<String>,
    rng: &mut R,
) -> Option<String> {
    let candidates: Vec<&str> = dict
        .words_starting_with(last_char)
        .filter(|w| !used.contains(*w))
        .collect();
    if let Some(word) = candidates.choose(rng) {
        return Some((*word).to_string());
    }
    let softened = dueum::substitute_syllable(last_char);
    if softened == last_char {
        return None;
    }
    let candidates: Vec<&str> = dict
        .words_starting_with(softened)
        .filter(|w| !used.contains(*w))
        .collect();
    candidates.choose(rng).map(|w| (*w).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn used(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn picks_a_literal_continuation() {
        let dict = Dictionary::from_lines("사과\n과일\n과자");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = bot_move(&dict, '과', &used(&[]), &mut rng).unwrap();
            assert!(word.starts_with('과'));
        }
    }

    #[test]
    fn excludes_used_words() {
        let dict = Dictionary::from_lines("과일\n과자");
        let mut rng = StdRng::seed_from_u64(7);
        let word = bot_move(&dict, '과', &used(&["과일"]), &mut rng).unwrap();
        assert_eq!(word, "과자");
    }

    #[test]
    fn falls_back_to_softened_syllable() {
        // Nothing starts with 라, but 라 softens to 나 and 나비 is free.
        let dict = Dictionary::from_lines("나비\n사과");
        let mut rng = StdRng::seed_from_u64(7);
        let word = bot_move(&dict, '라', &used(&[]), &mut rng).unwrap();
        assert_eq!(word, "나비");
    }

    #[test]
    fn forfeits_when_no_candidate_remains() {
        let dict = Dictionary::from_lines("사과\n과일");
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(bot_move(&dict, '린', &used(&[]), &mut rng), None);
        assert_eq!(bot_move(&dict, '과', &used(&["과일"]), &mut rng), None);
    }

    #[test]
    fn opening_word_is_deterministic_with_fixed_rng() {
        let dict = Dictionary::from_lines("사과\n과일\n일기");
        let mut rng = StepRng::new(0, 0);
        assert_eq!(opening_word(&dict, &mut rng).as_deref(), Some("사과"));
    }

    #[test]
    fn opening_word_on_empty_dictionary_is_none() {
        let dict = Dictionary::from_lines("");
        let mut rng = StepRng::new(0, 0);
        assert_eq!(opening_word(&dict, &mut rng), None);
    }
}
