//! Response reading
//!
//! Pulls one complete frame off the transport: length prefix, body,
//! length-driven continuation reads, and the wide-character detour for
//! the commands that need it.

use crate::error::{RconError, Result};
use crate::protocol::{
    is_wide_command, looks_wide_encoded, repair_wide_body, RawResponse, WIDE_PREFIX_LEN,
};
use crate::transport::Transport;

/// Largest announced frame size the reader will accept
///
/// The length prefix is peer-controlled; bound it before allocating.
/// Real RCON frames top out around 4 KiB.
const MAX_PACKET_SIZE: usize = 4 * 1024 * 1024;

/// Read one frame, or `None` at the end of a multi-packet stream
///
/// Steps:
/// 1. Read the 4-byte length prefix. Anything shorter is a dead read:
///    a `BufferEmpty` error mid-exchange, the end of the stream when
///    `is_multi` is set.
/// 2. Read the announced number of body bytes (one read; may be short).
/// 3. For wide-command responses whose tail classifies as wide-encoded,
///    issue the compensating read and widen the expected size. The
///    server's prefix undercounts a wide payload by `size - 9` bytes;
///    observed Squad behavior, reproduced exactly.
/// 4. Keep reading until the full body is held; a zero-byte read here is
///    a framing error naming what was read and what remains.
/// 5. Repair the body if step 3 fired; hand back a cursor over the frame.
pub(crate) fn read_response<T: Transport>(
    transport: &mut T,
    is_multi: bool,
    called_command: &str,
) -> Result<Option<RawResponse>> {
    let prefix = transport.recv(4)?;
    if prefix.len() < 4 {
        if is_multi {
            return Ok(None);
        }
        return Err(RconError::BufferEmpty(
            "rcon read: failed to read any data from socket".to_string(),
        ));
    }

    let announced = i32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]);
    if announced < 0 || announced as usize > MAX_PACKET_SIZE {
        return Err(RconError::PacketHeaderMismatch(format!(
            "announced packet size {announced} is outside 0..={MAX_PACKET_SIZE}"
        )));
    }
    let mut packet_size = announced as usize;

    let mut data = transport.recv(packet_size)?;

    let mut wide = false;
    if is_wide_command(called_command)
        && data.len() > WIDE_PREFIX_LEN
        && looks_wide_encoded(&data[WIDE_PREFIX_LEN..])
    {
        let extra = transport.recv(packet_size - 9)?;
        data.extend_from_slice(&extra);
        packet_size += packet_size - 9;
        wide = true;
    }

    while data.len() < packet_size {
        let remaining = packet_size - data.len();
        let chunk = transport.recv(remaining)?;

        if chunk.is_empty() {
            return Err(RconError::BufferEmpty(format!(
                "read {} bytes from socket, {} remaining",
                data.len(),
                remaining
            )));
        }

        data.extend_from_slice(&chunk);
    }

    if wide {
        data = repair_wide_body(&data);
    }

    tracing::trace!(
        "Read frame: {} bytes{}",
        data.len(),
        if wide { " (wide-repaired)" } else { "" }
    );

    Ok(Some(RawResponse::new(data)))
}
