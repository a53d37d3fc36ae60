use tracing::debug;

use crate::command::{CommandId, CommandResult, NetworkParameter};
use crate::error::{DecodeError, Result};

/// Smallest buffer worth looking at: command id + sequence + status.
pub const MIN_FRAME_SIZE: usize = 3;

/// Status byte value indicating success.
pub const STATUS_SUCCESS: u8 = 0;

/// Fixed header offsets shared by every response frame.
mod offset {
    pub const COMMAND_ID: usize = 0;
    pub const SEQ: usize = 1;
    pub const STATUS: usize = 2;
    pub const FRAME_LENGTH: usize = 3;
    pub const PAYLOAD_LENGTH: usize = 5;
    pub const PARAMETER_ID: usize = 7;
    pub const PARAMETER_VALUE: usize = 8;
    pub const FIRMWARE_VERSION: usize = 5;
}

/// One fully decoded response frame.
///
/// Built once per successfully parsed buffer and handed straight to the
/// correlation layer; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    pub command: CommandId,
    pub seq: u8,
    pub status: u8,
    /// Frame length as claimed by the coprocessor. Recorded, not verified
    /// against the buffer (see crate docs on the permissive length policy).
    pub frame_len: u16,
    /// Payload length as claimed. For firmware frames this overlaps the
    /// first two version bytes, exactly as the device lays it out.
    pub payload_len: u16,
    pub payload: CommandResult,
}

impl DecodedFrame {
    /// Whether the coprocessor reported success for this frame.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Decode a single delimited response frame.
///
/// Layout (all multi-byte fields little-endian):
///
/// ```text
/// ┌────────────┬───────┬────────┬──────────────┬────────────────┬─────────────┐
/// │ Command    │ Seq   │ Status │ Frame length │ Payload length │ Payload...  │
/// │ (1B)       │ (1B)  │ (1B)   │ (2B LE)      │ (2B LE)        │             │
/// └────────────┴───────┴────────┴──────────────┴────────────────┴─────────────┘
/// ```
///
/// Read/write parameter frames carry a parameter id at offset 7 and the
/// value at offset 8; firmware frames carry four raw version bytes at
/// offsets 5..9 (overlapping the payload-length slot).
///
/// Pure: no side effects beyond debug logging, and the buffer is only
/// borrowed for this call. Failure never yields a partial frame.
pub fn decode(buf: &[u8]) -> Result<DecodedFrame> {
    if buf.len() < MIN_FRAME_SIZE {
        return Err(DecodeError::TooShort {
            len: buf.len(),
            min: MIN_FRAME_SIZE,
        });
    }

    let raw_command = buf[offset::COMMAND_ID];
    let seq = buf[offset::SEQ];
    let status = buf[offset::STATUS];

    let command =
        CommandId::from_wire(raw_command).ok_or(DecodeError::UnknownCommand(raw_command))?;

    let frame_len = read_u16(buf, offset::FRAME_LENGTH, "frame length")?;
    let payload_len = read_u16(buf, offset::PAYLOAD_LENGTH, "payload length")?;

    let payload = match command {
        CommandId::ReadParameter => decode_read_parameter(buf)?,
        CommandId::WriteParameter => {
            let parameter_id = read_u8(buf, offset::PARAMETER_ID, "parameter id")?;
            debug!(parameter_id, "write parameter response");
            CommandResult::ParameterWriteAck(parameter_id)
        }
        CommandId::ReadFirmwareVersion => {
            let version: [u8; 4] = read_array(buf, offset::FIRMWARE_VERSION, "firmware version")?;
            debug!(?version, "read firmware version response");
            CommandResult::FirmwareVersion(version)
        }
    };

    Ok(DecodedFrame {
        command,
        seq,
        status,
        frame_len,
        payload_len,
        payload,
    })
}

fn decode_read_parameter(buf: &[u8]) -> Result<CommandResult> {
    let raw_id = read_u8(buf, offset::PARAMETER_ID, "parameter id")?;
    let parameter =
        NetworkParameter::from_wire(raw_id).ok_or(DecodeError::UnknownParameter(raw_id))?;

    let at = offset::PARAMETER_VALUE;
    let result = match parameter {
        NetworkParameter::Mac => {
            let mac = format!("{:x}", read_u64(buf, at, "mac")?);
            debug!(%mac, "MAC");
            CommandResult::NetworkMac(mac)
        }
        NetworkParameter::PanId => {
            let pan_id = read_u16(buf, at, "pan id")?;
            debug!(pan_id = %format_args!("{pan_id:#x}"), "PANID");
            CommandResult::NetworkPanId(pan_id)
        }
        NetworkParameter::NwkAddress => {
            let nwk_addr = read_u16(buf, at, "network address")?;
            debug!(nwk_addr = %format_args!("{nwk_addr:#x}"), "NWKADDR");
            CommandResult::NetworkAddress(nwk_addr)
        }
        NetworkParameter::ExtPanId => {
            let ext_pan_id = format!("{:x}", read_u64(buf, at, "extended pan id")?);
            debug!(%ext_pan_id, "EXT_PANID");
            CommandResult::NetworkExtendedPanId(ext_pan_id)
        }
        NetworkParameter::Channel => {
            let channel = read_u8(buf, at, "channel")?;
            debug!(channel, "CHANNEL");
            CommandResult::NetworkChannel(channel)
        }
        NetworkParameter::ChannelMask => {
            let mask = read_u32(buf, at, "channel mask")?;
            debug!(mask = %format_args!("{mask:#x}"), "CHANNELMASK");
            CommandResult::NetworkChannelMask(mask)
        }
    };
    Ok(result)
}

fn read_array<const N: usize>(buf: &[u8], at: usize, field: &'static str) -> Result<[u8; N]> {
    let end = at + N;
    if buf.len() < end {
        return Err(DecodeError::Truncated {
            field,
            need: end,
            len: buf.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[at..end]);
    Ok(out)
}

fn read_u8(buf: &[u8], at: usize, field: &'static str) -> Result<u8> {
    read_array::<1>(buf, at, field).map(|b| b[0])
}

fn read_u16(buf: &[u8], at: usize, field: &'static str) -> Result<u16> {
    read_array(buf, at, field).map(u16::from_le_bytes)
}

fn read_u32(buf: &[u8], at: usize, field: &'static str) -> Result<u32> {
    read_array(buf, at, field).map(u32::from_le_bytes)
}

fn read_u64(buf: &[u8], at: usize, field: &'static str) -> Result<u64> {
    read_array(buf, at, field).map(u64::from_le_bytes)
}
