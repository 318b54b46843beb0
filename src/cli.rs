use anki_furigana::VibratoTokenizer;
use clap::Parser;
use std::path::PathBuf;

/// Prints Japanese sentences with furigana in Anki's format.
#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// The path to a compiled vibrato system dictionary, optionally compressed with zstd.
    #[arg(short, long, env = "FURIGANA_DICTIONARY")]
    pub dictionary: PathBuf,
    /// The 0-based position of the katakana reading in the dictionary's features.
    #[arg(
        short,
        long,
        env = "FURIGANA_READING_FIELD",
        default_value_t = VibratoTokenizer::IPADIC_READING_FIELD
    )]
    pub reading_field: usize,
    /// The sentence to annotate. If not given, each line of stdin is annotated instead.
    pub sentence: Vec<String>,
}
