//! Initial-sound (dueum) rule: certain syllables soften when they open a
//! native Korean word, so 리 and 이 can open the same noun. Word
//! validation and bot continuations accept either spelling.

/// First-syllable substitutions. Fixed historical table, not derived.
const SUBSTITUTIONS: [(char, char); 16] = [
    ('녀', '여'),
    ('뇨', '요'),
    ('뉴', '유'),
    ('니', '이'),
    ('랴', '야'),
    ('려', '여'),
    ('례', '예'),
    ('료', '요'),
    ('류', '유'),
    ('리', '이'),
    ('라', '나'),
    ('래', '내'),
    ('로', '노'),
    ('뢰', '뇌'),
    ('루', '누'),
    ('르', '느'),
];

/// Softened form of a single syllable, or the syllable itself when the
/// table has no entry for it.
pub fn substitute_syllable(syllable: char) -> char {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == syllable)
        .map_or(syllable, |(_, to)| *to)
}

/// True for bare jamo (Hangul compatibility consonants and vowels,
/// U+3131..U+318F). A precomposed syllable block like 간 is not bare jamo.
pub fn is_bare_jamo(c: char) -> bool {
    (0x3131..0x318F).contains(&(c as u32))
}

/// True for precomposed Hangul syllables (가..힣).
pub fn is_hangul_syllable(c: char) -> bool {
    ('가'..='힣').contains(&c)
}

/// A word the game will accept at all: 2-10 Hangul syllables, nothing else.
pub fn is_playable_word(word: &str) -> bool {
    let mut count = 0usize;
    for c in word.chars() {
        if !is_hangul_syllable(c) {
            return false;
        }
        count += 1;
    }
    (2..=10).contains(&count)
}

/// Rewrite the first syllable of `word` through the substitution table.
///
/// When the second character is bare jamo the word is returned unchanged:
/// the head of such a sequence composes with what follows, and rewriting
/// it would corrupt the compound syllable. This skip is deliberate policy.
pub fn apply_substitution(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if word.chars().nth(1).is_some_and(is_bare_jamo) {
        return word.to_string();
    }
    let mut out = String::with_capacity(word.len());
    out.push(substitute_syllable(first));
    out.push_str(chars.as_str());
    out
}

/// Does `first_char` legally continue `last_word`? The literal final
/// syllable and its softened form are both accepted.
pub fn matches_chain_rule(last_word: &str, first_char: char) -> bool {
    let Some(last) = last_word.chars().last() else {
        return false;
    };
    first_char == last || first_char == substitute_syllable(last)
}
