//! Frame codec
//!
//! Builds outgoing frames and splits incoming ones into header fields.

use crate::error::Result;
use super::RawResponse;

/// Terminator appended to every frame body
const FRAME_TERMINATOR: [u8; 2] = [0x00, 0x00];

/// Encode one outgoing frame
///
/// Layout: `[len][request_id][kind][payload][00 00]` with every integer
/// field little-endian; `len` counts everything after itself.
pub fn encode_frame(request_id: i32, kind: i32, payload: &[u8]) -> Vec<u8> {
    let body_len = 4 + 4 + payload.len() + FRAME_TERMINATOR.len();

    let mut frame = Vec::with_capacity(4 + body_len);
    frame.extend_from_slice(&(body_len as i32).to_le_bytes());
    frame.extend_from_slice(&request_id.to_le_bytes());
    frame.extend_from_slice(&kind.to_le_bytes());
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&FRAME_TERMINATOR);

    frame
}

/// Consume a response frame's header fields
///
/// Pulls the first 8 bytes off the cursor as request id and packet type;
/// what remains is the body up to and including the double-NUL terminator.
pub fn decode_header(response: &mut RawResponse) -> Result<(i32, i32)> {
    let request_id = response.get_long()?;
    let kind = response.get_long()?;
    Ok((request_id, kind))
}
