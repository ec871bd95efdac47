//! Pronounceable nonsense text: syllables, words and sentences.
//!
//! Each layer only calls the one below it: a sentence is a list of words,
//! a word is a run of syllables, a syllable is an alternating run of
//! consonants and vowels.

use std::sync::LazyLock;

use chance_core::{CONSONANTS, Result, VOWELS, ensure_range};
use tracing::trace;

use crate::primitives::draw;
use crate::random::RandomSource;

const WORD_CONFLICT: &str = "length and syllables shall not be specified together";
const SENTENCE_CONFLICT: &str = "length and words shall not be specified together";

/// Remaining budget under which a bounded sentence emits one last word
/// that fills it exactly.
const SHORT_TAIL: i64 = 5;

static CONSONANT_POOL: LazyLock<Vec<char>> = LazyLock::new(|| CONSONANTS.chars().collect());
static VOWEL_POOL: LazyLock<Vec<char>> = LazyLock::new(|| VOWELS.chars().collect());
static LETTER_POOL: LazyLock<Vec<char>> =
    LazyLock::new(|| CONSONANTS.chars().chain(VOWELS.chars()).collect());

/// A syllable of `length` characters, or 2 to 3 characters when `length`
/// is zero.
///
/// Every letter is a character draw. The first comes from consonants and
/// vowels alike. After that a vowel is always followed by a consonant and a
/// consonant by a vowel.
pub fn syllable<S>(rng: &mut S, length: usize) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    let length = if length == 0 {
        rng.random_int(2, 3) as usize
    } else {
        length
    };
    trace!(length, "syllable");

    let mut text = String::with_capacity(length);
    let mut previous: Option<char> = None;
    for _ in 0..length {
        let pool = match previous {
            None => &*LETTER_POOL,
            Some(prev) if !CONSONANTS.contains(prev) => &*CONSONANT_POOL,
            Some(_) => &*VOWEL_POOL,
        };
        let next = draw(rng, pool)?;
        text.push(next);
        previous = Some(next);
    }
    Ok(text)
}

/// A nonsense word bounded either by `length` characters or by a number of
/// `syllables`; never both. With neither, 1 to 3 syllables are used.
///
/// A length-bounded word appends whole syllables until it is long enough and
/// then cuts the excess, so its last syllable may be partial.
pub fn word<S>(rng: &mut S, length: usize, syllables: usize) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    ensure_range(length != 0 && syllables != 0, WORD_CONFLICT)?;

    let mut text = String::new();
    if length > 0 {
        while text.len() < length {
            text.push_str(&syllable(rng, 0)?);
        }
        text.truncate(length);
        return Ok(text);
    }

    let syllables = if syllables == 0 {
        rng.random_int(1, 3) as usize
    } else {
        syllables
    };
    trace!(syllables, "word");
    for _ in 0..syllables {
        text.push_str(&syllable(rng, 0)?);
    }
    Ok(text)
}

/// A capitalised sentence ending in `.`, bounded either by roughly `length`
/// characters or by a number of `words`; never both. With neither, 12 to 18
/// words are used.
pub fn sentence<S>(rng: &mut S, length: usize, words: usize) -> Result<String>
where
    S: RandomSource + ?Sized,
{
    ensure_range(length != 0 && words != 0, SENTENCE_CONFLICT)?;

    let list = if length > 0 {
        bounded_words(rng, length)?
    } else {
        let count = if words == 0 {
            rng.random_int(12, 18) as usize
        } else {
            words
        };
        trace!(words = count, "sentence");
        let mut list = Vec::with_capacity(count);
        for _ in 0..count {
            list.push(word(rng, 0, 0)?);
        }
        list
    };

    let mut text = capitalize(&list.join(" "));
    text.push('.');
    Ok(text)
}

/// Words whose lengths plus one separator each use up `length`.
///
/// Words are 2 to 8 characters long until fewer than five characters remain;
/// the last word then takes exactly what is left.
fn bounded_words<S>(rng: &mut S, length: usize) -> Result<Vec<String>>
where
    S: RandomSource + ?Sized,
{
    let mut remaining = i64::try_from(length).unwrap_or(i64::MAX);
    let mut list = Vec::new();
    while remaining > 0 {
        let target = if remaining < SHORT_TAIL {
            remaining
        } else {
            rng.random_int(2, 8)
        };
        let next = word(rng, target as usize, 0)?;
        remaining -= next.len() as i64 + 1;
        trace!(remaining, "sentence word");
        list.push(next);
    }
    Ok(list)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
