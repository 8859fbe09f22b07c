//! # SquadRcon
//!
//! A Source RCON client for Squad game servers with:
//! - Wire-level frame encoding and decoding (little-endian, NUL-terminated)
//! - The authentication handshake, including the empty-frame echo quirk
//! - Valve's multi-packet response workaround for long command output
//! - Repair of the non-standard wide-character encoding Squad emits for
//!   `ListPlayers` / `AdminBan*` / `AdminKick*` responses
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   RconClient                    │
//! │      (authorize / command, session state)       │
//! └─────────┬──────────────────────────┬────────────┘
//!           │                          │
//!           ▼                          ▼
//!   ┌────────────────┐        ┌────────────────┐
//!   │ ResponseReader │        │   FrameCodec   │
//!   │ (client)       │        │ (protocol)     │
//!   └───────┬────┬───┘        └────────────────┘
//!           │    │
//!           │    ▼
//!           │  ┌────────────────┐
//!           │  │ WideCharRepair │
//!           │  │ (protocol)     │
//!           │  └────────────────┘
//!           ▼
//!   ┌────────────────┐
//!   │   Transport    │
//!   │ (blocking TCP) │
//!   └────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use squadrcon::{Config, RconClient};
//!
//! fn main() -> squadrcon::Result<()> {
//!     let config = Config::builder()
//!         .host("203.0.113.7")
//!         .port(21114)
//!         .build();
//!
//!     let mut client = RconClient::connect(config)?;
//!     client.authorize("hunter2")?;
//!
//!     let players = client.command("ListPlayers")?;
//!     println!("{players}");
//!     Ok(())
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transport;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RconError, Result};
pub use config::Config;
pub use client::RconClient;
pub use transport::{TcpTransport, Transport};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of squadrcon
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
