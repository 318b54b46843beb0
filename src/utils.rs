//! Character classification by Unicode block.

/// The class of a single character, as far as furigana placement is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Kanji,
    Hiragana,
    Katakana,
    Other,
}

/// Classifies a character using fixed code point ranges.
pub fn classify(c: char) -> CharClass {
    if is_kanji(c) {
        CharClass::Kanji
    } else if is_katakana(c) {
        CharClass::Katakana
    } else if is_hiragana(c) {
        CharClass::Hiragana
    } else {
        CharClass::Other
    }
}

/// Unicode CJK Unified Ideographs.
pub fn is_kanji(c: char) -> bool {
    (0x4E00..=0x9FFF).contains(&(c as u32))
}

/// The katakana that have a hiragana counterpart, ァ through ヶ.
/// Marks such as ー and ・ are not included.
pub fn is_katakana(c: char) -> bool {
    (0x30A1..=0x30F6).contains(&(c as u32))
}

pub fn is_hiragana(c: char) -> bool {
    (0x3040..=0x309F).contains(&(c as u32))
}
