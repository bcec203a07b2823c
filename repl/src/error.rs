use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error, derive_more::From)]
pub enum Error {
    /// Input or output of the session failed.
    #[error("{0}")]
    Io(io::Error),

    #[error("could not read `{path:?}`: {error}")]
    #[from(skip)]
    ReadFile {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
}
