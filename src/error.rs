use std::{io, path::PathBuf};

use simdutf8::basic::Utf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid utf-8")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("terminal i/o failed: {0}")]
    Repl(#[source] io::Error),
}
