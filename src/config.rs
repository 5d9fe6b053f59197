use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::ServeError;

/// Ports tried in order until one binds.
pub const DEFAULT_PORTS: [u16; 5] = [8000, 8001, 8002, 8003, 8004];

/// Build step expected to have produced the assets being served. Its output
/// lands in `pkg/` under the package directory, which is the default root.
pub const BUILD_COMMAND: &str = "wasm-pack build --target web";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "serve",
    version,
    about = "Serve WASM builds with cross-origin isolation headers"
)]
pub struct Cli {
    /// Directory to serve. Defaults to this package's directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Candidate ports, tried in the order given
    #[arg(
        short,
        long = "port",
        value_name = "PORT",
        value_delimiter = ',',
        default_values_t = DEFAULT_PORTS.to_vec()
    )]
    pub ports: Vec<u16>,

    /// Interface address to bind
    #[arg(long, value_name = "IP", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub root: PathBuf,
    pub bind: IpAddr,
    pub ports: Vec<u16>,
}

impl ServeConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ServeError> {
        let root = match cli.root {
            Some(path) => resolve_root(&path)?,
            None => package_dir()?,
        };

        Ok(Self {
            root,
            bind: cli.bind,
            ports: cli.ports,
        })
    }
}

/// Directory holding the server's own sources, fixed at compile time so
/// serving does not depend on where the process was launched from.
pub fn package_dir() -> Result<PathBuf, ServeError> {
    resolve_root(Path::new(env!("CARGO_MANIFEST_DIR")))
}

fn resolve_root(path: &Path) -> Result<PathBuf, ServeError> {
    let root = path.canonicalize().map_err(|source| ServeError::Root {
        path: path.to_path_buf(),
        source,
    })?;

    if !root.is_dir() {
        return Err(ServeError::RootNotDirectory(root));
    }
    Ok(root)
}
