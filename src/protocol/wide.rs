//! Wide-character response repair
//!
//! Squad servers answer a small set of admin commands with a body whose
//! first 8 bytes are ordinary bytes followed by 2-byte little-endian code
//! units instead of single-byte text. This module classifies that shape
//! and decodes it back into UTF-8.
//!
//! The behavior here is reverse-engineered from a real server, not taken
//! from protocol documentation. The matching compensating read (the
//! server's length prefix undercounts a wide payload by `size - 9` bytes)
//! lives in `client::reader`.

/// Bytes at the start of the frame data kept as-is during repair
///
/// These are the request id and packet type fields; only the body after
/// them is ever wide-encoded.
pub const WIDE_PREFIX_LEN: usize = 8;

/// Does this command's response need the wide-character check?
///
/// Matching is case-insensitive: `listplayers` must be the whole command
/// line, `adminban` and `adminkick` match as prefixes so every argument
/// form is covered.
pub fn is_wide_command(called_command: &str) -> bool {
    let name = called_command.to_ascii_lowercase();
    name == "listplayers" || name.starts_with("adminban") || name.starts_with("adminkick")
}

/// Classify a body tail as wide-encoded
///
/// `tail` is the frame data after the first [`WIDE_PREFIX_LEN`] bytes.
/// Stripping only trailing NULs removes a true suffix; removing every NUL
/// also removes the interior ones a 2-byte encoding leaves between ASCII
/// characters. A strictly longer trailing-stripped form therefore means
/// interior NULs are present and the tail is wide-encoded.
pub fn looks_wide_encoded(tail: &[u8]) -> bool {
    let mut trailing_stripped = tail.len();
    while trailing_stripped > 0 && tail[trailing_stripped - 1] == 0 {
        trailing_stripped -= 1;
    }

    let nul_free = tail.iter().filter(|&&b| b != 0).count();

    trailing_stripped > nul_free
}

/// Decode a wide-encoded frame back to UTF-8 text
///
/// The first 8 bytes are kept raw. The tail is consumed 2 bytes at a
/// time: an all-zero unit emits one NUL, anything else is the
/// little-endian u16 code point of one character. A lone trailing byte
/// decodes as its own code point. The server occasionally ships an
/// apostrophe as the literal entity `&#x0027;`; those are rewritten to
/// `'` once the tail is decoded.
///
/// Pure function: bytes in, bytes out, no I/O.
pub fn repair_wide_body(data: &[u8]) -> Vec<u8> {
    if data.len() <= WIDE_PREFIX_LEN {
        return data.to_vec();
    }

    let (prefix, tail) = data.split_at(WIDE_PREFIX_LEN);

    let mut decoded = String::with_capacity(tail.len() / 2);
    for unit in tail.chunks(2) {
        let code_point = match unit {
            [0x00] | [0x00, 0x00] => {
                decoded.push('\0');
                continue;
            }
            [b0] => u16::from_le_bytes([*b0, 0x00]),
            [b0, b1] => u16::from_le_bytes([*b0, *b1]),
            _ => unreachable!("chunks(2) yields 1 or 2 bytes"),
        };

        // Unpaired surrogates cannot form a char; substitute U+FFFD.
        decoded.push(char::from_u32(u32::from(code_point)).unwrap_or('\u{FFFD}'));
    }

    let decoded = decoded.replace("&#x0027;", "'");

    let mut repaired = Vec::with_capacity(prefix.len() + decoded.len());
    repaired.extend_from_slice(prefix);
    repaired.extend_from_slice(decoded.as_bytes());
    repaired
}
