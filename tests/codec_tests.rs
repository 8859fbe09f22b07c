//! Codec Tests
//!
//! These tests verify:
//! - Wire layout of encoded frames (byte-exact)
//! - Encode/decode round-trips through the response cursor
//! - Cursor behavior on short buffers

use squadrcon::protocol::{
    decode_header, encode_frame, RawResponse, SERVERDATA_AUTH, SERVERDATA_EXECCOMMAND,
    SERVERDATA_RESPONSE_VALUE,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// Wrap an encoded frame's post-length-prefix bytes in a cursor,
/// the way the reader hands frames to the exchange layer
fn as_response(frame: &[u8]) -> RawResponse {
    RawResponse::new(frame[4..].to_vec())
}

// =============================================================================
// Wire Format Tests
// =============================================================================

#[test]
fn test_wire_format_auth_frame() {
    let frame = encode_frame(1, SERVERDATA_AUTH, b"secret");

    // Expected: [len=16][request_id=1][type=3][s e c r e t][00 00]
    assert_eq!(&frame[0..4], &16i32.to_le_bytes());
    assert_eq!(&frame[4..8], &1i32.to_le_bytes());
    assert_eq!(&frame[8..12], &3i32.to_le_bytes());
    assert_eq!(&frame[12..18], b"secret");
    assert_eq!(&frame[18..20], &[0x00, 0x00]);
    assert_eq!(frame.len(), 20);
}

#[test]
fn test_wire_format_empty_payload() {
    let frame = encode_frame(7, SERVERDATA_RESPONSE_VALUE, b"");

    // Length counts request id + type + terminator only
    assert_eq!(&frame[0..4], &10i32.to_le_bytes());
    assert_eq!(&frame[4..8], &7i32.to_le_bytes());
    assert_eq!(&frame[8..12], &0i32.to_le_bytes());
    assert_eq!(&frame[12..14], &[0x00, 0x00]);
    assert_eq!(frame.len(), 14);
}

#[test]
fn test_length_prefix_counts_everything_after_itself() {
    for payload_len in [0usize, 1, 13, 4096] {
        let payload = vec![b'x'; payload_len];
        let frame = encode_frame(3, SERVERDATA_EXECCOMMAND, &payload);

        let announced = i32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]) as usize;
        assert_eq!(announced, frame.len() - 4);
        assert_eq!(announced, 4 + 4 + payload_len + 2);
    }
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_encode_decode_round_trip() {
    for kind in [
        SERVERDATA_AUTH,
        SERVERDATA_EXECCOMMAND,
        SERVERDATA_RESPONSE_VALUE,
    ] {
        let frame = encode_frame(42, kind, b"ShowNextMap");
        let mut response = as_response(&frame);

        let (request_id, decoded_kind) = decode_header(&mut response).unwrap();
        assert_eq!(request_id, 42);
        assert_eq!(decoded_kind, kind);

        // The body comes back with its double-NUL terminator attached
        assert_eq!(&response.take_remaining()[..], b"ShowNextMap\x00\x00");
    }
}

#[test]
fn test_round_trip_negative_request_id() {
    let frame = encode_frame(-1, SERVERDATA_RESPONSE_VALUE, b"");
    let mut response = as_response(&frame);

    let (request_id, kind) = decode_header(&mut response).unwrap();
    assert_eq!(request_id, -1);
    assert_eq!(kind, SERVERDATA_RESPONSE_VALUE);
}

#[test]
fn test_round_trip_binary_payload() {
    let payload: Vec<u8> = (0..=255).collect();
    let frame = encode_frame(9, SERVERDATA_RESPONSE_VALUE, &payload);
    let mut response = as_response(&frame);

    decode_header(&mut response).unwrap();
    let body = response.take_remaining();
    assert_eq!(&body[..payload.len()], &payload[..]);
    assert_eq!(&body[payload.len()..], &[0x00, 0x00]);
}

// =============================================================================
// Cursor Tests
// =============================================================================

#[test]
fn test_cursor_sequential_longs() {
    let mut data = Vec::new();
    data.extend_from_slice(&5i32.to_le_bytes());
    data.extend_from_slice(&2i32.to_le_bytes());
    data.extend_from_slice(b"tail");

    let mut response = RawResponse::new(data);
    assert_eq!(response.remaining(), 12);
    assert_eq!(response.get_long().unwrap(), 5);
    assert_eq!(response.get_long().unwrap(), 2);
    assert_eq!(response.remaining(), 4);
    assert_eq!(&response.take_remaining()[..], b"tail");
    assert_eq!(response.remaining(), 0);
}

#[test]
fn test_cursor_short_buffer_errors() {
    let mut response = RawResponse::new(vec![0x01, 0x02]);

    let err = response.get_long().unwrap_err();
    assert!(err.to_string().contains("Invalid packet"));
}

#[test]
fn test_cursor_take_remaining_empty() {
    let mut response = RawResponse::new(Vec::new());
    assert_eq!(response.remaining(), 0);
    assert!(response.take_remaining().is_empty());
}
