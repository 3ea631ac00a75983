use std::{fs, path::Path};

use log::debug;
use simdutf8::basic::from_utf8;

use crate::error::LexError;

/// Reads the whole file and checks it is UTF-8.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, LexError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = from_utf8(&bytes)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(text.to_owned())
}
