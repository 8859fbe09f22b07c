//! Packet definitions
//!
//! Packet type constants and the response cursor.

use bytes::{Buf, Bytes};

use crate::error::{RconError, Result};

/// Authentication request (client → server)
pub const SERVERDATA_AUTH: i32 = 3;

/// Authentication verdict (server → client)
///
/// Shares the value 2 with [`SERVERDATA_EXECCOMMAND`]; the exchange
/// state, not the value, decides which one a frame means.
pub const SERVERDATA_AUTH_RESPONSE: i32 = 2;

/// Command execution request (client → server)
pub const SERVERDATA_EXECCOMMAND: i32 = 2;

/// Command response payload (server → client)
pub const SERVERDATA_RESPONSE_VALUE: i32 = 0;

/// Body of the frame that terminates a multi-packet response
///
/// Four marker bytes plus the frame's own double-NUL terminator, exactly
/// as they arrive off the wire.
pub const MULTI_PACKET_TERMINATOR: &[u8] = &[0x00, 0x01, 0x00, 0x00, 0x00, 0x00];

/// A fully-read response frame, positioned for sequential field extraction
///
/// Wraps the raw frame bytes (request id, type, body, terminator) behind a
/// consuming cursor: two [`get_long`](RawResponse::get_long) calls pull
/// the header fields, then [`take_remaining`](RawResponse::take_remaining)
/// yields the body including its trailing double NUL, which callers strip.
#[derive(Debug, Clone)]
pub struct RawResponse {
    buf: Bytes,
}

impl RawResponse {
    /// Wrap raw frame bytes in a cursor positioned at offset 0
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            buf: Bytes::from(data),
        }
    }

    /// Number of unconsumed bytes
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Consume the next 4 bytes as a little-endian i32
    pub fn get_long(&mut self) -> Result<i32> {
        if self.buf.remaining() < 4 {
            return Err(RconError::BufferEmpty(format!(
                "expected 4 bytes for a long, {} available",
                self.buf.remaining()
            )));
        }
        Ok(self.buf.get_i32_le())
    }

    /// Consume and return all remaining bytes
    pub fn take_remaining(&mut self) -> Bytes {
        let len = self.buf.remaining();
        self.buf.copy_to_bytes(len)
    }
}
