//! `anki_furigana::annotate` places a reading given by a tokenizer on the kanji of a word.
//! Readings that can't be lined up with the word's kana are put on the whole word instead.

fn main() {
    for (word, reading) in [
        ("厳しい", "キビシイ"),
        ("お願い", "オネガイ"),
        ("日本語", "ニホンゴ"),
        ("ひらがな", "ヒラガナ"),
        ("行った", "イッテ"),
    ] {
        let furigana = anki_furigana::annotate(word, Some(reading));
        println!("{word} {reading} => {furigana}");
    }
}
