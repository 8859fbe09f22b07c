//! TCP transport
//!
//! `std::net::TcpStream`-backed transport with connect, read, and write
//! timeouts taken from [`Config`].

use std::io::{ErrorKind, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use super::Transport;
use crate::config::Config;
use crate::error::{RconError, Result};

/// Blocking TCP transport for the RCON stream
pub struct TcpTransport {
    /// Connected stream with both timeouts applied
    stream: TcpStream,

    /// Peer address for logging
    peer_addr: String,
}

impl TcpTransport {
    /// Connect to the configured server
    ///
    /// Resolves the address, connects within the read timeout, disables
    /// Nagle's algorithm, and applies both stream timeouts. A failure at
    /// any of the connect steps is reported as `ConnectionFailed` with
    /// the OS error text.
    pub fn connect(config: &Config) -> Result<Self> {
        let peer_addr = config.addr();

        let addr = peer_addr
            .to_socket_addrs()
            .map_err(|e| RconError::ConnectionFailed(format!("{peer_addr}: {e}")))?
            .next()
            .ok_or_else(|| {
                RconError::ConnectionFailed(format!("{peer_addr}: no address resolved"))
            })?;

        let stream =
            TcpStream::connect_timeout(&addr, Duration::from_millis(config.read_timeout_ms))
                .map_err(|e| RconError::ConnectionFailed(format!("{peer_addr}: {e}")))?;

        // RCON frames are small; don't let Nagle batch them
        stream.set_nodelay(true)?;
        stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;

        tracing::debug!("Connected to RCON server at {}", peer_addr);

        Ok(Self { stream, peer_addr })
    }

    /// Peer address this transport is connected to
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(self.stream.write(buf)?)
    }

    fn recv(&mut self, max: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; max];

        match self.stream.read(&mut buf) {
            Ok(n) => {
                buf.truncate(n);
                Ok(buf)
            }
            // A timed-out read means nothing arrived, not a broken stream.
            // Windows reports TimedOut where Unix reports WouldBlock.
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                tracing::trace!("Read from {} timed out", self.peer_addr);
                Ok(Vec::new())
            }
            Err(e) => Err(RconError::Io(e)),
        }
    }
}
