//! Development server for statically built WASM packages.
//!
//! Files are served from an explicit root directory, and every response gets
//! the cross-origin isolation headers browsers require before enabling shared
//! memory for WebAssembly.

use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use tokio::net::TcpListener;

pub mod config;
pub mod error;
pub mod listener;
pub mod router;

pub use config::{Cli, ServeConfig};
pub use error::ServeError;

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Binds the first free candidate port and serves `config.root` until Ctrl+C.
pub async fn run(config: ServeConfig) -> Result<(), ServeError> {
    let bound = listener::bind_first_available(config.bind, &config.ports).await?;

    println!(
        "Serving {} at {}",
        config.root.display(),
        server_url(config.bind, bound.port)
    );
    println!(
        "Make sure to build the WASM package first with: {}",
        config::BUILD_COMMAND
    );
    println!("Press Ctrl+C to stop");

    serve(bound.listener, &config.root, shutdown_signal()).await?;
    log::info!("Server stopped");
    Ok(())
}

/// Serves files under `root` on `listener` until `shutdown` completes.
pub async fn serve<F>(listener: TcpListener, root: &Path, shutdown: F) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router::router(root))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// URL to announce for a server bound on `bind`. Wildcard binds are reachable
/// through localhost, anything else only through the address itself.
fn server_url(bind: IpAddr, port: u16) -> String {
    if bind.is_unspecified() {
        format!("http://localhost:{port}")
    } else {
        format!("http://{}", SocketAddr::new(bind, port))
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server keeps running until killed.
        log::error!("Failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
}
