//! Fixed-layout response frame decoding for the deCONZ serial protocol.
//!
//! Frames arrive here already delimited: SLIP unescaping and CRC checking
//! happen upstream in the transport. Every response frame starts with:
//! - A 1-byte command id
//! - A 1-byte sequence number (echoed from the request)
//! - A 1-byte status (0 = success)
//! - A 2-byte little-endian frame length
//!
//! What follows depends on the command id; see [`decode`] for the full
//! layout. Decoding is pure and borrows the buffer for a single call.

pub mod command;
pub mod decode;
pub mod error;

pub use command::{CommandId, CommandResult, NetworkParameter};
pub use decode::{decode, DecodedFrame, MIN_FRAME_SIZE, STATUS_SUCCESS};
pub use error::{DecodeError, Result};
