//! Data-entity sub-codec.
//!
//! A data entity is one typed value (sensor reading, control setting, or
//! info field). On the wire it is a sub-frame of `group + id + type +
//! 2-byte big-endian length + data`, nested inside entity-set,
//! entity-report, and schedule frames.

use crate::constants::*;
use crate::error::ProtocolError;
use crate::types::{EntityType, Group};

/// One typed data entity.
///
/// The wire length is implied by `raw.len()`; it is validated against the
/// declared length at decode time and normalized at encode time, never
/// stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntity {
    /// Functional group.
    pub group: Group,
    /// Entity id within the group.
    pub id: u8,
    /// Value type.
    pub entity_type: EntityType,
    /// Raw value bytes as they appear on the wire.
    pub raw: Vec<u8>,
    /// Decoded numeric value; only meaningful for fixed-width types, 0 for
    /// `Raw` and `String` entities.
    pub value: u32,
}

impl DataEntity {
    /// Create a raw-bytes entity.
    pub fn raw(group: Group, id: u8, data: &[u8]) -> Self {
        DataEntity {
            group,
            id,
            entity_type: EntityType::Raw,
            raw: data.to_vec(),
            value: 0,
        }
    }

    /// Create a UTF-8 string entity.
    pub fn string(group: Group, id: u8, text: &str) -> Self {
        DataEntity {
            group,
            id,
            entity_type: EntityType::String,
            raw: text.as_bytes().to_vec(),
            value: 0,
        }
    }

    /// Create a boolean entity. Any non-zero input is clamped to 1.
    pub fn boolean(group: Group, id: u8, value: bool) -> Self {
        Self::fixed(group, id, EntityType::Bool, u32::from(value))
    }

    /// Create an enumeration entity.
    pub fn enumeration(group: Group, id: u8, value: u8) -> Self {
        Self::fixed(group, id, EntityType::Enum, u32::from(value))
    }

    /// Create an unsigned-integer entity.
    pub fn uint(group: Group, id: u8, value: u32) -> Self {
        Self::fixed(group, id, EntityType::Uint, value)
    }

    /// Create a 1-byte bitmap entity.
    pub fn bitmap1(group: Group, id: u8, value: u8) -> Self {
        Self::fixed(group, id, EntityType::Bitmap1, u32::from(value))
    }

    /// Create a 2-byte bitmap entity.
    pub fn bitmap2(group: Group, id: u8, value: u16) -> Self {
        Self::fixed(group, id, EntityType::Bitmap2, u32::from(value))
    }

    /// Create a 4-byte bitmap entity.
    pub fn bitmap4(group: Group, id: u8, value: u32) -> Self {
        Self::fixed(group, id, EntityType::Bitmap4, value)
    }

    /// Create a fixed-width entity with canonical raw bytes for its type.
    fn fixed(group: Group, id: u8, entity_type: EntityType, value: u32) -> Self {
        // fixed() is only called with fixed-width types, which all have a
        // canonical length of 1, 2, or 4.
        let raw = match entity_type.fixed_len() {
            Some(1) => vec![value as u8],
            Some(2) => (value as u16).to_be_bytes().to_vec(),
            _ => value.to_be_bytes().to_vec(),
        };
        DataEntity {
            group,
            id,
            entity_type,
            raw,
            value,
        }
    }

    /// Wire length of this entity: 5-byte header plus value bytes.
    pub fn encoded_len(&self) -> usize {
        ENTITY_MIN_LEN + self.raw.len()
    }

    /// Decode one entity sub-frame from the start of `buf`.
    ///
    /// Trailing bytes past the declared length are ignored, so a caller can
    /// decode an entity embedded mid-payload and use [`Self::encoded_len`]
    /// to find where it ends.
    pub fn decode(buf: &[u8]) -> Result<Self, ProtocolError> {
        if buf.len() < ENTITY_MIN_LEN {
            return Err(ProtocolError::TooShort {
                expected: ENTITY_MIN_LEN,
                actual: buf.len(),
            });
        }

        let group = Group::try_from(buf[0])?;
        let id = buf[1];
        let entity_type = EntityType::try_from(buf[2])?;
        let declared = u16::from_be_bytes([buf[3], buf[4]]) as usize;

        if buf.len() < ENTITY_MIN_LEN + declared {
            return Err(ProtocolError::LengthMismatch {
                declared,
                actual: buf.len() - ENTITY_MIN_LEN,
            });
        }

        let raw = buf[ENTITY_MIN_LEN..ENTITY_MIN_LEN + declared].to_vec();
        let value = match entity_type {
            EntityType::Raw | EntityType::String => 0,
            _ => decode_fixed_value(&raw),
        };

        log::trace!(
            "decoded entity group={group:?} id={id} type={entity_type:?} len={declared}"
        );

        Ok(DataEntity {
            group,
            id,
            entity_type,
            raw,
            value,
        })
    }
}

/// Reinterpret raw entity bytes as a big-endian unsigned integer.
///
/// Returns the value for lengths 1, 2, and 4, and 0 for any other length
/// (a defensive default, not an error).
pub fn decode_fixed_value(raw: &[u8]) -> u32 {
    match raw.len() {
        1 => u32::from(raw[0]),
        2 => u32::from(u16::from_be_bytes([raw[0], raw[1]])),
        4 => u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_string_entity() {
        let buf = [
            0x01, 0x07, 0x01, 0x00, 0x03, // Sensor, id 7, String, len 3
            b'a', b'b', b'c',
        ];
        let entity = DataEntity::decode(&buf).expect("valid entity");
        assert_eq!(entity.group, Group::Sensor);
        assert_eq!(entity.id, 7);
        assert_eq!(entity.entity_type, EntityType::String);
        assert_eq!(entity.raw, b"abc");
        assert_eq!(entity.value, 0);
        assert_eq!(entity.encoded_len(), 8);
    }

    #[test]
    fn test_decode_uint_entity() {
        let buf = [0x02, 0x01, 0x04, 0x00, 0x04, 0xDE, 0xAD, 0xBE, 0xEF];
        let entity = DataEntity::decode(&buf).expect("valid entity");
        assert_eq!(entity.entity_type, EntityType::Uint);
        assert_eq!(entity.value, 0xDEAD_BEEF);
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let buf = [0x00, 0x01, 0x02, 0x00, 0x01, 0x01, 0xFF, 0xFF];
        let entity = DataEntity::decode(&buf).expect("valid entity");
        assert_eq!(entity.raw, [0x01]);
        assert_eq!(entity.value, 1);
    }

    #[test]
    fn test_decode_too_short() {
        let err = DataEntity::decode(&[0x00, 0x01, 0x02, 0x00]).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TooShort {
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn test_decode_truncated_data() {
        let buf = [0x00, 0x01, 0x04, 0x00, 0x04, 0xAA, 0xBB];
        let err = DataEntity::decode(&buf).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::LengthMismatch {
                declared: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_decode_unknown_group() {
        let buf = [0x05, 0x01, 0x00, 0x00, 0x00];
        assert!(matches!(
            DataEntity::decode(&buf),
            Err(ProtocolError::InvalidData(_))
        ));
    }

    #[test]
    fn test_fixed_value_sizes() {
        assert_eq!(decode_fixed_value(&[0xFE]), 0xFE);
        assert_eq!(decode_fixed_value(&[0x12, 0x34]), 0x1234);
        assert_eq!(decode_fixed_value(&[0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
        assert_eq!(decode_fixed_value(&[0x01, 0x02, 0x03]), 0);
        assert_eq!(decode_fixed_value(&[]), 0);
    }

    #[test]
    fn test_bool_clamp() {
        assert_eq!(DataEntity::boolean(Group::Control, 1, true).raw, [1]);
        assert_eq!(DataEntity::boolean(Group::Control, 1, false).raw, [0]);
    }

    #[test]
    fn test_constructors_use_canonical_width() {
        assert_eq!(DataEntity::enumeration(Group::Info, 0, 9).raw.len(), 1);
        assert_eq!(DataEntity::uint(Group::Info, 0, 9).raw.len(), 4);
        assert_eq!(DataEntity::bitmap1(Group::Info, 0, 9).raw.len(), 1);
        assert_eq!(DataEntity::bitmap2(Group::Info, 0, 9).raw.len(), 2);
        assert_eq!(DataEntity::bitmap4(Group::Info, 0, 9).raw.len(), 4);
    }
}
