//! Schedule sub-codec.
//!
//! A schedule-set payload is a count byte followed by that many packed
//! entries. Each entry is a 4-byte header (id, weekday bitmap, hour,
//! minute) followed by one data-entity sub-frame describing the action to
//! apply when the schedule fires.

use crate::constants::*;
use crate::entity::DataEntity;
use crate::error::ProtocolError;
use crate::frame::FrameBuilder;
use crate::types::EntityType;

/// A weekly-recurring trigger paired with a data-entity action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Schedule id.
    pub id: u8,
    /// Weekday bitmap, bit 0 = Sunday .. bit 6 = Saturday.
    pub weekdays: u8,
    /// Hour to fire, 0-23.
    pub hour: u8,
    /// Minute to fire, 0-59.
    pub minute: u8,
    /// The data entity to apply.
    pub action: DataEntity,
}

impl ScheduleEntry {
    /// Wire length of this entry: 4-byte header plus the action sub-frame.
    pub fn encoded_len(&self) -> usize {
        SCHEDULE_HEAD_LEN + self.action.encoded_len()
    }
}

/// Append a schedule-set payload (count byte plus packed entries) to a
/// frame builder.
///
/// Fixed-width actions are written through the fixed entity path so their
/// canonical width is enforced; `Raw` and `String` actions keep their raw
/// bytes verbatim.
pub fn encode_schedule_set(builder: &mut FrameBuilder, entries: &[ScheduleEntry]) {
    builder.push(entries.len() as u8);
    for entry in entries {
        builder.push(entry.id);
        builder.push(entry.weekdays);
        builder.push(entry.hour);
        builder.push(entry.minute);
        let action = &entry.action;
        match action.entity_type {
            EntityType::Raw | EntityType::String => builder.append_entity(
                action.group,
                action.id,
                action.entity_type,
                action.raw.len() as u16,
                &action.raw,
            ),
            _ => builder.append_entity_fixed(
                action.group,
                action.id,
                action.entity_type,
                action.raw.len() as u16,
                action.value,
            ),
        }
    }
}

/// Decode a schedule-set payload into its entry list.
///
/// Entity-decode failures are wrapped with the offending entry's id; a
/// running offset guards against a truncated final entry.
pub fn decode_schedule_list(payload: &[u8]) -> Result<Vec<ScheduleEntry>, ProtocolError> {
    if payload.is_empty() {
        return Err(ProtocolError::TooShort {
            expected: 1,
            actual: 0,
        });
    }

    let count = payload[0] as usize;
    let mut entries = Vec::with_capacity(count);
    let mut offset = 1usize;

    for _ in 0..count {
        if payload.len() < offset + SCHEDULE_HEAD_LEN {
            return Err(ProtocolError::TooShort {
                expected: offset + SCHEDULE_HEAD_LEN,
                actual: payload.len(),
            });
        }
        let id = payload[offset];
        let weekdays = payload[offset + 1];
        let hour = payload[offset + 2];
        let minute = payload[offset + 3];

        let action = DataEntity::decode(&payload[offset + SCHEDULE_HEAD_LEN..])
            .map_err(|e| e.in_schedule(id))?;

        offset += SCHEDULE_HEAD_LEN + action.encoded_len();
        if offset > payload.len() + 1 {
            return Err(ProtocolError::LengthMismatch {
                declared: count,
                actual: entries.len(),
            });
        }

        entries.push(ScheduleEntry {
            id,
            weekdays,
            hour,
            minute,
            action,
        });
    }

    log::trace!("decoded schedule list with {} entries", entries.len());

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use crate::types::{CommandId, Group};

    fn sample_entries() -> Vec<ScheduleEntry> {
        vec![
            ScheduleEntry {
                id: 0,
                weekdays: 0b0100_0000,
                hour: 23,
                minute: 59,
                action: DataEntity::string(Group::Control, 255, "abc-test-cba"),
            },
            ScheduleEntry {
                id: 1,
                weekdays: 0b0001_0010,
                hour: 22,
                minute: 58,
                action: DataEntity::uint(Group::Control, 254, u32::MAX - 1),
            },
        ]
    }

    fn encode(entries: &[ScheduleEntry]) -> Vec<u8> {
        let mut builder = FrameBuilder::new(0, CommandId::Schedule);
        encode_schedule_set(&mut builder, entries);
        builder.build()
    }

    #[test]
    fn test_schedule_round_trip() {
        let entries = sample_entries();
        let frame = Frame::parse(&encode(&entries)).expect("valid frame");
        let decoded = frame.schedule_list().expect("valid schedule list");

        assert_eq!(decoded.len(), 2);
        for (got, want) in decoded.iter().zip(&entries) {
            assert_eq!(got.id, want.id);
            assert_eq!(got.weekdays, want.weekdays);
            assert_eq!(got.hour, want.hour);
            assert_eq!(got.minute, want.minute);
        }
        // String action compares by raw bytes, Uint action by value.
        assert_eq!(decoded[0].action.raw, b"abc-test-cba");
        assert_eq!(decoded[1].action.value, u32::MAX - 1);
        assert_eq!(decoded[1].action.raw.len(), 4);
    }

    #[test]
    fn test_empty_schedule_list() {
        let frame = Frame::parse(&encode(&[])).expect("valid frame");
        assert_eq!(frame.schedule_list().expect("valid list"), vec![]);
    }

    #[test]
    fn test_truncated_entry_reports_schedule_error() {
        let entries = sample_entries();
        let frame = Frame::parse(&encode(&entries)).expect("valid frame");

        // Chop the tail off the second entry's action and re-wrap the
        // payload in a fresh frame.
        let mut payload = frame.payload.clone();
        payload.truncate(payload.len() - 3);
        let mut builder = FrameBuilder::new(0, CommandId::Schedule);
        builder.extend(&payload);
        let reframed = Frame::parse(&builder.build()).expect("valid frame");

        let err = reframed.schedule_list().unwrap_err();
        match err {
            ProtocolError::Schedule { id, source } => {
                assert_eq!(id, 1);
                assert!(matches!(*source, ProtocolError::LengthMismatch { .. }));
            }
            other => panic!("expected schedule error, got {other:?}"),
        }
    }

    #[test]
    fn test_count_larger_than_payload() {
        let mut builder = FrameBuilder::new(0, CommandId::Schedule);
        builder.push(3); // claims 3 entries, provides none
        let frame = Frame::parse(&builder.build()).expect("valid frame");
        assert!(matches!(
            frame.schedule_list(),
            Err(ProtocolError::TooShort { .. })
        ));
    }

    #[test]
    fn test_fixed_action_width_enforced_in_schedule() {
        // A Uint action with corrupted raw bytes still encodes 4 wide.
        let mut entry = sample_entries().remove(1);
        entry.action.raw = vec![0xFF]; // wrong width on purpose
        let frame = Frame::parse(&encode(&[entry])).expect("valid frame");
        let decoded = frame.schedule_list().expect("valid list");
        assert_eq!(decoded[0].action.raw.len(), 4);
    }
}
