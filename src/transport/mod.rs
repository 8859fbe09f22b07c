//! Transport Module
//!
//! The blocking byte stream the protocol engine runs over.
//!
//! ## Contract
//! - `send` pushes bytes toward the server and reports how many the
//!   stream accepted.
//! - `recv` returns up to `max` bytes. Short reads are normal. An empty
//!   buffer means nothing arrived before the timeout, or the peer closed
//!   the stream; what an empty read *means* for the exchange (framing
//!   error vs. end of a multi-packet response) is the reader's call, not
//!   the transport's.

mod tcp;

pub use tcp::TcpTransport;

use crate::error::Result;

/// Blocking byte-stream transport with configured timeouts
pub trait Transport {
    /// Write bytes, returning the number accepted by the stream
    fn send(&mut self, buf: &[u8]) -> Result<usize>;

    /// Read up to `max` bytes; empty means timeout or closed stream
    fn recv(&mut self, max: usize) -> Result<Vec<u8>>;
}
