//! Error types for squadrcon
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RconError
pub type Result<T> = std::result::Result<T, RconError>;

/// Unified error type for RCON operations
#[derive(Debug, Error)]
pub enum RconError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Can't connect to RCON server: {0}")]
    ConnectionFailed(String),

    // -------------------------------------------------------------------------
    // Packet Errors
    // -------------------------------------------------------------------------
    /// A frame or field could not be fully read when one was required
    #[error("Invalid packet: {0}")]
    BufferEmpty(String),

    /// The response carried a packet type the current exchange does not accept
    #[error("Invalid RCON response: {0}")]
    PacketHeaderMismatch(String),

    // -------------------------------------------------------------------------
    // Authentication Errors
    // -------------------------------------------------------------------------
    /// The server rejected the password, or demanded auth mid-exchange
    #[error("Bad rcon_password")]
    BadPassword,
}
