//! Errors that can occur while setting up a tokenizer.

use std::{io, path::PathBuf};
use thiserror::Error;

pub type FuriganaResult<T> = Result<T, FuriganaError>;

#[derive(Debug, Error)]
pub enum FuriganaError {
    #[error("Failed to open dictionary at '{}'", path.display())]
    OpenDictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to decompress dictionary")]
    Decompress(#[source] io::Error),
    #[error("Failed to read dictionary")]
    ReadDictionary(#[from] vibrato::errors::VibratoError),
}
