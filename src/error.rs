use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("no candidate ports were given")]
    NoCandidatePorts,

    /// Every candidate port failed to bind. `source` is the failure of the last one.
    #[error("could not bind any of ports {ports:?}: {source}")]
    PortsExhausted {
        ports: Vec<u16>,
        #[source]
        source: io::Error,
    },

    #[error("cannot resolve serving root {}: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serving root {} is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("server I/O error: {0}")]
    Io(#[from] io::Error),
}
