use std::fmt::Display;

/// A word split into segments, some of which carry furigana.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Furigana<'a> {
    /// The segments of the word in order.
    pub furigana: Vec<FuriganaSegment<'a>>,
}

impl<'a> Furigana<'a> {
    /// A word shown without any reading.
    pub fn plain(text: &'a str) -> Self {
        Self {
            furigana: vec![FuriganaSegment {
                segment: text,
                furigana: None,
            }],
        }
    }

    /// A word where the whole of `base` is given `reading`.
    pub fn ruby(base: &'a str, reading: String) -> Self {
        Self {
            furigana: vec![FuriganaSegment {
                segment: base,
                furigana: Some(reading),
            }],
        }
    }

    /// Kana around a kanji core, where only the core gets a reading.
    /// Empty kana segments are left out.
    pub(crate) fn split(
        leading: &'a str,
        kanji: &'a str,
        reading: &str,
        trailing: &'a str,
    ) -> Self {
        let mut furigana = Vec::with_capacity(3);
        if !leading.is_empty() {
            furigana.push(FuriganaSegment {
                segment: leading,
                furigana: None,
            });
        }
        furigana.push(FuriganaSegment {
            segment: kanji,
            furigana: Some(reading.to_string()),
        });
        if !trailing.is_empty() {
            furigana.push(FuriganaSegment {
                segment: trailing,
                furigana: None,
            });
        }
        Self { furigana }
    }

    /// Whether any segment has a reading.
    #[cfg(test)]
    pub(crate) fn is_annotated(&self) -> bool {
        self.furigana.iter().any(|f| f.furigana.is_some())
    }

    /// The original text without readings.
    pub(crate) fn text(&self) -> String {
        self.furigana.iter().map(|f| f.segment).collect()
    }
}

/// Prints the word in Anki's furigana format, e.g. `厳[きび]しい`.
impl Display for Furigana<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.furigana {
            write!(f, "{}", segment.segment)?;
            if let Some(furigana) = &segment.furigana {
                write!(f, "[{}]", furigana)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FuriganaSegment<'a> {
    /// A segment of the original word.
    pub segment: &'a str,
    /// The reading of the segment in hiragana, if it is shown.
    pub furigana: Option<String>,
}
