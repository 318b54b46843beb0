//! Assembles the furigana for a whole sentence.

use crate::{annotate_hiragana, reading_hint, tokenizer::Tokenizer};

/// Returns `text` with furigana in Anki's format: `天気[てんき]が 厳[きび]しい。`
///
/// Each word that needs a reading is preceded by a space so that Anki knows where the reading's base starts.
/// Words without a reading are appended directly to whatever came before them.
pub fn get_furigana<T>(tokenizer: &T, text: &str) -> String
where
    T: Tokenizer + ?Sized,
{
    tracing::debug!("Annotating {text}");
    let tokens = tokenizer.tokenize(text);
    tracing::trace!("{tokens:#?}");

    let mut annotated = String::with_capacity(text.len() * 2);
    for token in &tokens {
        match reading_hint(&token.surface, token.reading.as_deref()) {
            Some(hiragana) => {
                let furigana = annotate_hiragana(&token.surface, hiragana);
                debug_assert_eq!(furigana.text(), token.surface);
                annotated.push(' ');
                annotated.push_str(&furigana.to_string());
            }
            None => annotated.push_str(&token.surface),
        }
    }
    annotated.trim().to_string()
}
