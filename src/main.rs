//! Prints furigana for the given sentence, or for each line of stdin.

mod cli;

use anki_furigana::VibratoTokenizer;
use clap::Parser;
use cli::Cli;
use eyre::WrapErr;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    // stdout is reserved for the output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let tokenizer = VibratoTokenizer::from_path(&cli.dictionary, cli.reading_field)
        .wrap_err("Failed to load tokenizer")?;

    let mut stdout = io::stdout().lock();
    if cli.sentence.is_empty() {
        tracing::info!("Reading sentences from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.wrap_err("Failed to read from stdin")?;
            let furigana = anki_furigana::get_furigana(&tokenizer, &line);
            writeln!(stdout, "{furigana}").wrap_err("Failed to write to stdout")?;
        }
    } else {
        let sentence = cli.sentence.join(" ");
        let furigana = anki_furigana::get_furigana(&tokenizer, &sentence);
        writeln!(stdout, "{furigana}").wrap_err("Failed to write to stdout")?;
    }
    Ok(())
}
