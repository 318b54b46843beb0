#![doc = include_str!("../README.md")]

mod error;
mod furigana;
mod kana;
mod sentence;
mod tokenizer;
mod utils;

pub use self::{
    error::{FuriganaError, FuriganaResult},
    furigana::{Furigana, FuriganaSegment},
    kana::to_hiragana,
    sentence::get_furigana,
    tokenizer::{Token, Tokenizer, VibratoTokenizer},
    utils::{classify, is_kanji, is_katakana, CharClass},
};

/// Places the reading of a word on its kanji, leaving the kana around the kanji without furigana.
///
/// `reading` is the pronunciation of the whole word in katakana or hiragana.
/// If the kana in `surface` can't be found at the ends of `reading`, the whole word is given the whole reading.
pub fn annotate<'a>(surface: &'a str, reading: Option<&str>) -> Furigana<'a> {
    match reading_hint(surface, reading) {
        Some(hiragana) => annotate_hiragana(surface, hiragana),
        None => Furigana::plain(surface),
    }
}

/// Returns the reading in hiragana if it should be shown for `surface`.
/// Returns `None` if there is no reading or if it's just the surface itself.
pub fn reading_hint(surface: &str, reading: Option<&str>) -> Option<String> {
    let reading = reading?;
    if reading == surface {
        return None;
    }
    let hiragana = to_hiragana(reading);
    if hiragana == surface {
        // kana words, typically particles
        return None;
    }
    Some(hiragana)
}

// assumes that reading_hint has already decided the word needs furigana
pub(crate) fn annotate_hiragana(surface: &str, hiragana: String) -> Furigana<'_> {
    let Some(first_kanji_idx) = surface.find(is_kanji) else {
        // no kanji to put the reading on
        return Furigana::plain(surface);
    };
    let kanji_end_idx = surface
        .char_indices()
        .rev()
        .find(|(_, c)| is_kanji(*c))
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(surface.len());

    let leading_kana = &surface[..first_kanji_idx];
    // may contain kana between kanji, e.g. 物の怪
    let kanji = &surface[first_kanji_idx..kanji_end_idx];
    let trailing_kana = &surface[kanji_end_idx..];

    match kanji_reading(&hiragana, leading_kana, trailing_kana) {
        Some(kanji_reading) => Furigana::split(leading_kana, kanji, kanji_reading, trailing_kana),
        None => {
            tracing::debug!("Failed to align {hiragana} with {surface}, annotating the whole word");
            Furigana::ruby(surface, hiragana)
        }
    }
}

// the part of the reading between the leading and trailing kana, which may be empty
// None if the kana don't match the reading or overlap within it
fn kanji_reading<'a>(reading: &'a str, leading_kana: &str, trailing_kana: &str) -> Option<&'a str> {
    reading
        .strip_prefix(leading_kana)?
        .strip_suffix(trailing_kana)
}
