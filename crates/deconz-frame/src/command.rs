//! Wire tags and decoded payload kinds.
//!
//! Both tag spaces are closed: dispatch is an exhaustive match, and ids
//! outside the enums are rejected during decode rather than falling through.

/// Response command ids this decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandId {
    /// Read a network parameter (response carries the value).
    ReadParameter = 0x0A,
    /// Write a network parameter (response acknowledges the id).
    WriteParameter = 0x0B,
    /// Firmware version query.
    ReadFirmwareVersion = 0x0D,
}

impl CommandId {
    /// Map a wire byte to a command id, if known.
    pub fn from_wire(id: u8) -> Option<Self> {
        match id {
            0x0A => Some(CommandId::ReadParameter),
            0x0B => Some(CommandId::WriteParameter),
            0x0D => Some(CommandId::ReadFirmwareVersion),
            _ => None,
        }
    }
}

/// Network parameter ids carried inside read/write parameter frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NetworkParameter {
    /// 64-bit IEEE MAC address.
    Mac = 0x01,
    /// 16-bit network PAN id.
    PanId = 0x02,
    /// 16-bit short network address.
    NwkAddress = 0x03,
    /// 64-bit extended PAN id.
    ExtPanId = 0x04,
    /// Current radio channel.
    Channel = 0x05,
    /// 32-bit channel mask.
    ChannelMask = 0x06,
}

impl NetworkParameter {
    /// Map a wire byte to a parameter id, if known.
    pub fn from_wire(id: u8) -> Option<Self> {
        match id {
            0x01 => Some(NetworkParameter::Mac),
            0x02 => Some(NetworkParameter::PanId),
            0x03 => Some(NetworkParameter::NwkAddress),
            0x04 => Some(NetworkParameter::ExtPanId),
            0x05 => Some(NetworkParameter::Channel),
            0x06 => Some(NetworkParameter::ChannelMask),
            _ => None,
        }
    }

    /// Value width in bytes on the wire.
    pub fn value_width(self) -> usize {
        match self {
            NetworkParameter::Mac | NetworkParameter::ExtPanId => 8,
            NetworkParameter::PanId | NetworkParameter::NwkAddress => 2,
            NetworkParameter::Channel => 1,
            NetworkParameter::ChannelMask => 4,
        }
    }
}

/// Decoded, command-specific payload. Exactly one variant per frame.
///
/// 64-bit values (MAC, extended PAN id) are rendered as lowercase hex
/// strings so downstream consumers never lose precision coercing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    NetworkMac(String),
    NetworkPanId(u16),
    NetworkAddress(u16),
    NetworkExtendedPanId(String),
    NetworkChannel(u8),
    NetworkChannelMask(u32),
    FirmwareVersion([u8; 4]),
    ParameterWriteAck(u8),
}
