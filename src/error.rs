use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the index and the wordlist loader. Rejecting a single
/// malformed word is a local decision of the loader and never aborts a scan.
#[derive(Debug, Error)]
pub enum Error {
    #[error("word {word:?} contains {ch:?}, which is outside the a-z alphabet")]
    InvalidCharacter { word: String, ch: char },

    #[error("failed to read wordlist {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
