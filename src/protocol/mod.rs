//! Protocol Module
//!
//! Defines the Source RCON wire protocol.
//!
//! ## Frame Format (little-endian throughout)
//!
//! ```text
//! ┌──────────┬────────────┬──────────┬────────────┬─────────┐
//! │ Len (4)  │ ReqId (4)  │ Type (4) │    Body    │  00 00  │
//! └──────────┴────────────┴──────────┴────────────┴─────────┘
//! ```
//!
//! `Len` counts everything after itself: 4 (request id) + 4 (type) +
//! body + 2 (terminator).
//!
//! ### Packet Types
//! - 3: SERVERDATA_AUTH
//! - 2: SERVERDATA_AUTH_RESPONSE and SERVERDATA_EXECCOMMAND (the protocol
//!   reuses the value; which one a frame means depends on whether the
//!   exchange is awaiting an auth verdict or a command response)
//! - 0: SERVERDATA_RESPONSE_VALUE
//!
//! Long responses are split across multiple RESPONSE_VALUE frames and,
//! when the client probes with an empty RESPONSE_VALUE frame, terminated
//! by a frame whose body is the fixed sentinel `00 01 00 00 00 00`.

mod packet;
mod codec;
mod wide;

pub use packet::{
    RawResponse, MULTI_PACKET_TERMINATOR, SERVERDATA_AUTH, SERVERDATA_AUTH_RESPONSE,
    SERVERDATA_EXECCOMMAND, SERVERDATA_RESPONSE_VALUE,
};
pub use codec::{decode_header, encode_frame};
pub use wide::{is_wide_command, looks_wide_encoded, repair_wide_body, WIDE_PREFIX_LEN};
