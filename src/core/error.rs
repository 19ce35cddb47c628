//! Typed errors for loading localization files.
//!
//! Everything else in the crate propagates `anyhow::Error`; these exist
//! because callers branch on "file missing" vs "file unreadable".

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
