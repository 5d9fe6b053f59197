use std::io;
use std::net::{IpAddr, SocketAddr};

use tokio::net::TcpListener;

use crate::error::ServeError;

/// A candidate port that could not be bound.
#[derive(Debug)]
pub struct PortUnavailable {
    pub port: u16,
    pub error: io::Error,
}

#[derive(Debug)]
pub struct BoundListener {
    pub listener: TcpListener,
    /// Port actually bound, resolved from the socket so that a candidate of 0 reports the OS choice
    pub port: u16,
    /// Candidates that failed before this one, in order
    pub skipped: Vec<PortUnavailable>,
}

/// Binds the first port in `ports` that is free on `ip`.
///
/// Ports are tried strictly in order and the list is walked once. If the last
/// candidate fails too, the error names the whole list along with that last
/// failure.
pub async fn bind_first_available(ip: IpAddr, ports: &[u16]) -> Result<BoundListener, ServeError> {
    let mut skipped = Vec::new();

    for (index, &port) in ports.iter().enumerate() {
        match TcpListener::bind(SocketAddr::new(ip, port)).await {
            Ok(listener) => {
                let port = listener.local_addr()?.port();
                return Ok(BoundListener {
                    listener,
                    port,
                    skipped,
                });
            }
            Err(source) => match ports.get(index + 1) {
                Some(next) => {
                    log::info!("Port {port} is unavailable ({source}), trying port {next}");
                    skipped.push(PortUnavailable {
                        port,
                        error: source,
                    });
                }
                None => {
                    return Err(ServeError::PortsExhausted {
                        ports: ports.to_vec(),
                        source,
                    });
                }
            },
        }
    }

    Err(ServeError::NoCandidatePorts)
}
