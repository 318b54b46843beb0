//! Splitting sentences into words with readings.

use crate::error::{FuriganaError, FuriganaResult};
use std::{fs::File, path::Path};
use vibrato::Dictionary;

/// A word in a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The word as it appears in the sentence.
    pub surface: String,
    /// The pronunciation in katakana, if the tokenizer knows it.
    pub reading: Option<String>,
}

/// Splits a sentence into words.
pub trait Tokenizer {
    /// Returns the words of `text` in order.
    /// Concatenating the surfaces should give back `text`.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Tokenizes with vibrato, a Viterbi-based morphological analyzer using MeCab-compatible dictionaries.
pub struct VibratoTokenizer {
    inner: vibrato::Tokenizer,
    reading_field: usize,
}

impl VibratoTokenizer {
    /// Position of the reading in IPADIC's feature string:
    /// `pos1,pos2,pos3,pos4,conj_type,conj_form,base,reading,pronunciation`
    pub const IPADIC_READING_FIELD: usize = 7;

    /// `reading_field` is the 0-based index of the reading in the dictionary's comma separated features.
    pub fn new(dictionary: Dictionary, reading_field: usize) -> Self {
        Self {
            inner: vibrato::Tokenizer::new(dictionary),
            reading_field,
        }
    }

    /// Loads a compiled system dictionary.
    /// Files ending in `.zst` are decompressed first, which is how vibrato's dictionaries are distributed.
    pub fn from_path(path: &Path, reading_field: usize) -> FuriganaResult<Self> {
        tracing::info!("Loading dictionary from {}", path.display());
        let file = File::open(path).map_err(|source| FuriganaError::OpenDictionary {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = if path.extension().is_some_and(|ext| ext == "zst") {
            let decoder = zstd::Decoder::new(file).map_err(FuriganaError::Decompress)?;
            Dictionary::read(decoder)?
        } else {
            Dictionary::read(file)?
        };
        tracing::info!("Loaded dictionary");
        Ok(Self::new(dictionary, reading_field))
    }
}

impl Tokenizer for VibratoTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        // workers hold the lattice, so each call gets its own
        let mut worker = self.inner.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        (0..worker.num_tokens())
            .map(|i| {
                let token = worker.token(i);
                Token {
                    surface: token.surface().to_string(),
                    reading: reading_from_feature(token.feature(), self.reading_field)
                        .map(str::to_string),
                }
            })
            .collect()
    }
}

// dictionaries use * for unknown fields, and unknown words may have fewer fields altogether
fn reading_from_feature(feature: &str, reading_field: usize) -> Option<&str> {
    feature
        .split(',')
        .nth(reading_field)
        .filter(|reading| !reading.is_empty() && *reading != "*")
}
