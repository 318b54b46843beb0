//! Katakana to hiragana conversion.

use crate::utils;

// the hiragana block starts 0x60 code points before the katakana block
const UNICODE_KANA_TABLE_DISTANCE: u32 = 0x60;

/// Converts the katakana in `text` to hiragana, leaving every other character as is.
pub fn to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if utils::is_katakana(c) {
                char::from_u32(c as u32 - UNICODE_KANA_TABLE_DISTANCE).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn converts_katakana() {
        assert_eq!(to_hiragana("カタカナ"), "かたかな");
        assert_eq!(to_hiragana("ア"), "あ");
        assert_eq!(to_hiragana("ン"), "ん");
        assert_eq!(to_hiragana("ガ"), "が");
        assert_eq!(to_hiragana("ヶ"), "ゖ");
    }

    #[test]
    fn preserves_non_katakana() {
        assert_eq!(to_hiragana("ABCカタカナ123"), "ABCかたかな123");
        assert_eq!(to_hiragana("ラーメン"), "らーめん");
        assert_eq!(to_hiragana("日本"), "日本");
    }

    #[test]
    fn empty() {
        assert_eq!(to_hiragana(""), "");
    }

    #[test]
    fn idempotent_on_hiragana() {
        let hiragana = "ひらがな";
        assert_eq!(to_hiragana(hiragana), hiragana);
        assert_eq!(to_hiragana(&to_hiragana("キビシイ")), "きびしい");
    }

    #[test]
    fn shifts_whole_range() {
        for c in '\u{30A1}'..='\u{30F6}' {
            let converted = to_hiragana(&c.to_string());
            let expected = char::from_u32(c as u32 - 0x60).unwrap().to_string();
            assert_eq!(converted, expected);
        }
    }

    #[test]
    fn agrees_with_wana_kana() {
        use wana_kana::ConvertJapanese;

        for katakana in ["キビシイ", "ニホンゴ", "テンキ", "ガッコウ", "オネガイ", "ジョウズ"] {
            assert_eq!(to_hiragana(katakana), katakana.to_hiragana());
        }
    }
}
