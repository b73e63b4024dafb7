//! Frame encoding and decoding.
//!
//! [`FrameBuilder`] accumulates a command's payload bytes and serializes
//! them into a complete wire frame; [`Frame`] is the validated, parsed form
//! of a received frame. The outer layout is:
//!
//! ```text
//! +------+------+-----+-----+---------+---------+---------------+--------+
//! | 0x55 | 0xAA | ver | cmd | dlen_hi | dlen_lo | data[0..dlen] | chksum |
//! +------+------+-----+-----+---------+---------+---------------+--------+
//! ```

use bytes::{BufMut, BytesMut};

use crate::checksum::{checksum, verify};
use crate::constants::*;
use crate::entity::DataEntity;
use crate::error::ProtocolError;
use crate::firmware::FirmwareUpdate;
use crate::schedule::{decode_schedule_list, ScheduleEntry};
use crate::types::{CommandId, EntityType, Group};

/// Builder for one outgoing frame.
///
/// The builder enforces no payload length limit of its own; keeping the
/// payload within what the peer accepts is the caller's responsibility.
#[derive(Debug)]
pub struct FrameBuilder {
    version: u8,
    command: CommandId,
    payload: BytesMut,
}

impl FrameBuilder {
    /// Create a builder for a frame of the given protocol version and
    /// command.
    pub fn new(version: u8, command: CommandId) -> Self {
        FrameBuilder {
            version,
            command,
            payload: BytesMut::with_capacity(32),
        }
    }

    /// Append one byte to the payload.
    pub fn push(&mut self, byte: u8) {
        self.payload.put_u8(byte);
    }

    /// Append a slice of bytes to the payload.
    pub fn extend(&mut self, data: &[u8]) {
        self.payload.extend_from_slice(data);
    }

    /// Append a big-endian u16 to the payload.
    pub fn push_u16(&mut self, value: u16) {
        self.payload.put_u16(value);
    }

    /// Append a big-endian u32 to the payload.
    pub fn push_u32(&mut self, value: u32) {
        self.payload.put_u32(value);
    }

    /// Append an entity sub-frame with a caller-controlled length.
    ///
    /// Writes the 3-byte entity header, the declared length big-endian, and
    /// exactly `declared_len` bytes from `data`. `data` must hold at least
    /// `declared_len` bytes; passing less is a programming error and panics.
    pub fn append_entity(
        &mut self,
        group: Group,
        id: u8,
        entity_type: EntityType,
        declared_len: u16,
        data: &[u8],
    ) {
        self.extend(&[group.into(), id, entity_type.into()]);
        self.push_u16(declared_len);
        self.extend(&data[..declared_len as usize]);
    }

    /// Append a fixed-width entity sub-frame.
    ///
    /// The declared length is first normalized to the type's canonical
    /// width (see [`EntityType::enforce_len`]), then `value` is written
    /// truncated or widened to exactly 1, 2, or 4 bytes big-endian.
    pub fn append_entity_fixed(
        &mut self,
        group: Group,
        id: u8,
        entity_type: EntityType,
        declared_len: u16,
        value: u32,
    ) {
        let len = entity_type.enforce_len(declared_len);
        self.extend(&[group.into(), id, entity_type.into()]);
        self.push_u16(len);
        match len {
            1 => self.push(value as u8),
            2 => self.push_u16(value as u16),
            4 => self.push_u32(value),
            _ => {}
        }
    }

    /// Serialize the frame: headers, version, command, big-endian payload
    /// length, payload, and trailing checksum.
    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(FRAME_MIN_LEN + self.payload.len());
        buf.push(FRAME_HEAD1);
        buf.push(FRAME_HEAD2);
        buf.push(self.version);
        buf.push(self.command.into());
        buf.extend_from_slice(&(self.payload.len() as u16).to_be_bytes());
        buf.extend_from_slice(&self.payload);
        buf.push(checksum(&buf));
        buf
    }
}

/// A validated, parsed frame.
///
/// Produced by [`Frame::parse`] and consumed by the command-specific
/// extractors; immutable once built. The declared data length is validated
/// during parsing and thereafter implied by `payload.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Protocol version byte.
    pub version: u8,
    /// Raw command id. Unknown ids survive parsing and are only rejected
    /// by the typed extractors.
    pub command_id: u8,
    /// Payload bytes.
    pub payload: Vec<u8>,
    /// The complete frame as received, checksum included.
    pub raw: Vec<u8>,
}

impl Frame {
    /// Parse and validate a wire buffer.
    ///
    /// Checks run in a fixed order: minimum length, header bytes, checksum,
    /// then declared-length consistency. A corrupted header is therefore
    /// never misreported as a checksum failure.
    pub fn parse(buf: &[u8]) -> Result<Self, ProtocolError> {
        if buf.len() < FRAME_MIN_LEN {
            return Err(ProtocolError::TooShort {
                expected: FRAME_MIN_LEN,
                actual: buf.len(),
            });
        }
        if buf[0] != FRAME_HEAD1 || buf[1] != FRAME_HEAD2 {
            return Err(ProtocolError::InvalidData(format!(
                "bad frame header 0x{:02X} 0x{:02X}",
                buf[0], buf[1]
            )));
        }

        let last = buf.len() - 1;
        verify(&buf[..last], buf[last])?;

        let declared = u16::from_be_bytes([buf[4], buf[5]]) as usize;
        if buf.len() != FRAME_MIN_LEN + declared {
            return Err(ProtocolError::LengthMismatch {
                declared,
                actual: buf.len() - FRAME_MIN_LEN,
            });
        }

        log::trace!(
            "parsed frame ver={} cmd={} dlen={}",
            buf[2],
            buf[3],
            declared
        );

        Ok(Frame {
            version: buf[2],
            command_id: buf[3],
            payload: buf[6..6 + declared].to_vec(),
            raw: buf.to_vec(),
        })
    }

    /// The typed command id, if this frame carries a known one.
    pub fn command(&self) -> Result<CommandId, ProtocolError> {
        CommandId::try_from(self.command_id)
    }

    /// Extract the single data entity from an entity-set or entity-report
    /// frame.
    ///
    /// Only valid when the payload contains exactly one entity sub-frame.
    pub fn entity(&self) -> Result<DataEntity, ProtocolError> {
        if self.command_id != CMD_ENTITY_SET && self.command_id != CMD_ENTITY_REPORT {
            return Err(ProtocolError::WrongCommand {
                expected: CommandId::EntitySet,
                actual: self.command_id,
            });
        }
        DataEntity::decode(&self.payload)
    }

    /// Extract the schedule entry list from a schedule-set frame.
    pub fn schedule_list(&self) -> Result<Vec<ScheduleEntry>, ProtocolError> {
        if self.command_id != CMD_SCHEDULE {
            return Err(ProtocolError::WrongCommand {
                expected: CommandId::Schedule,
                actual: self.command_id,
            });
        }
        decode_schedule_list(&self.payload)
    }

    /// Extract and classify the firmware-update sub-command.
    pub fn firmware_update(&self) -> Result<FirmwareUpdate, ProtocolError> {
        if self.command_id != CMD_FIRMWARE_UPDATE {
            return Err(ProtocolError::WrongCommand {
                expected: CommandId::FirmwareUpdate,
                actual: self.command_id,
            });
        }
        Ok(FirmwareUpdate::decode(&self.payload))
    }
}
