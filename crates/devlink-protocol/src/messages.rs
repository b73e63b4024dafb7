//! Message constructors.
//!
//! One method per protocol message: each picks the right command id, lays
//! out the payload, and returns the finished wire buffer. All methods are
//! pure functions of the builder's version byte and their arguments.

use crate::entity::DataEntity;
use crate::firmware::FirmwareUpdate;
use crate::frame::FrameBuilder;
use crate::schedule::{encode_schedule_set, ScheduleEntry};
use crate::types::{
    CalendarTime, CommandId, DeviceInfoField, EntityType, FaultKind, Group, NetworkStatus,
    ResetReason, TimeSyncScope,
};

/// Constructs complete wire frames for every protocol message.
///
/// The only state is the protocol version byte stamped into every built
/// frame (default 0). It is per-builder configuration, not ambient global
/// state: callers that need different versions concurrently use separate
/// builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageBuilder {
    version: u8,
}

impl MessageBuilder {
    /// Create a builder stamping the given protocol version.
    pub fn new(version: u8) -> Self {
        MessageBuilder { version }
    }

    /// Change the protocol version stamped into subsequent frames.
    pub fn set_version(&mut self, version: u8) {
        self.version = version;
    }

    /// The currently configured protocol version.
    pub fn version(&self) -> u8 {
        self.version
    }

    fn frame(&self, command: CommandId) -> FrameBuilder {
        FrameBuilder::new(self.version, command)
    }

    // ------------------------------------------------------------------
    // Handshake
    // ------------------------------------------------------------------

    /// Handshake message carrying the given data bytes (heartbeat codes).
    pub fn handshake(&self, data: &[u8]) -> Vec<u8> {
        let mut builder = self.frame(CommandId::Handshake);
        builder.extend(data);
        builder.build()
    }

    /// Connection-end handshake (empty payload).
    pub fn handshake_end(&self) -> Vec<u8> {
        self.frame(CommandId::Handshake).build()
    }

    // ------------------------------------------------------------------
    // Device Info
    // ------------------------------------------------------------------

    /// Request every device info field (empty payload).
    pub fn device_info_request_all(&self) -> Vec<u8> {
        self.frame(CommandId::DeviceInfo).build()
    }

    /// Request one device info field.
    pub fn device_info_request(&self, field: DeviceInfoField) -> Vec<u8> {
        let mut builder = self.frame(CommandId::DeviceInfo);
        builder.push(field.into());
        builder.build()
    }

    /// Respond with one device info field as UTF-8 text.
    pub fn device_info_response(&self, field: DeviceInfoField, text: &str) -> Vec<u8> {
        let mut builder = self.frame(CommandId::DeviceInfo);
        builder.push(field.into());
        builder.extend(text.as_bytes());
        builder.build()
    }

    // ------------------------------------------------------------------
    // Network Reset / Status
    // ------------------------------------------------------------------

    /// Request a network reset with the given reason.
    pub fn network_reset_request(&self, reason: ResetReason) -> Vec<u8> {
        let mut builder = self.frame(CommandId::NetworkReset);
        builder.push(reason.into());
        builder.build()
    }

    /// Acknowledge a network reset (empty payload).
    pub fn network_reset_ack(&self) -> Vec<u8> {
        self.frame(CommandId::NetworkReset).build()
    }

    /// Report the current network status.
    pub fn network_status_report(&self, status: NetworkStatus) -> Vec<u8> {
        let mut builder = self.frame(CommandId::NetworkStatus);
        builder.push(status.into());
        builder.build()
    }

    /// Acknowledge a network status report (empty payload).
    pub fn network_status_ack(&self) -> Vec<u8> {
        self.frame(CommandId::NetworkStatus).build()
    }

    // ------------------------------------------------------------------
    // Time Sync
    // ------------------------------------------------------------------

    /// Signal that time synchronization is not ready yet (empty payload).
    pub fn time_sync_not_ready(&self) -> Vec<u8> {
        self.frame(CommandId::TimeSync).build()
    }

    /// Request the current time for the given clock scope.
    pub fn time_sync_request(&self, scope: TimeSyncScope) -> Vec<u8> {
        let mut builder = self.frame(CommandId::TimeSync);
        builder.push(scope.into());
        builder.build()
    }

    /// Respond with a caller-supplied calendar time.
    ///
    /// The 7 time bytes are year minus 100 (truncated), month, day, weekday
    /// (0 = Sunday), hour, minute, second. No timezone conversion happens
    /// here; the caller picks the clock matching `scope`.
    pub fn time_sync_response(&self, scope: TimeSyncScope, time: &CalendarTime) -> Vec<u8> {
        let mut builder = self.frame(CommandId::TimeSync);
        builder.push(scope.into());
        builder.push(time.year.wrapping_sub(100) as u8);
        builder.push(time.month);
        builder.push(time.day);
        builder.push(time.weekday);
        builder.push(time.hour);
        builder.push(time.minute);
        builder.push(time.second);
        builder.build()
    }

    // ------------------------------------------------------------------
    // Data Entities
    // ------------------------------------------------------------------

    /// Set a data entity on the peer.
    pub fn entity_set(&self, entity: &DataEntity) -> Vec<u8> {
        self.entity_message(CommandId::EntitySet, entity)
    }

    /// Report a data entity's current value.
    pub fn entity_report(&self, entity: &DataEntity) -> Vec<u8> {
        self.entity_message(CommandId::EntityReport, entity)
    }

    /// Request a reset of all data entities (empty entity-set payload).
    pub fn entity_reset_all(&self) -> Vec<u8> {
        self.frame(CommandId::EntitySet).build()
    }

    fn entity_message(&self, command: CommandId, entity: &DataEntity) -> Vec<u8> {
        let mut builder = self.frame(command);
        match entity.entity_type {
            EntityType::Raw | EntityType::String => builder.append_entity(
                entity.group,
                entity.id,
                entity.entity_type,
                entity.raw.len() as u16,
                &entity.raw,
            ),
            _ => builder.append_entity_fixed(
                entity.group,
                entity.id,
                entity.entity_type,
                entity.raw.len() as u16,
                entity.value,
            ),
        }
        builder.build()
    }

    // ------------------------------------------------------------------
    // Faults
    // ------------------------------------------------------------------

    /// Request a fault report for all entities (empty payload).
    pub fn fault_report_request(&self) -> Vec<u8> {
        self.frame(CommandId::EntityFault).build()
    }

    /// Report that no entity is faulty.
    pub fn fault_none(&self) -> Vec<u8> {
        let mut builder = self.frame(CommandId::EntityFault);
        builder.push(0);
        builder.build()
    }

    /// Acknowledge a fault report for one entity.
    pub fn fault_ack(&self, group: Group, id: u8) -> Vec<u8> {
        let mut builder = self.frame(CommandId::EntityFault);
        builder.push(group.into());
        builder.push(id);
        builder.build()
    }

    /// Report one faulty entity.
    pub fn fault_report(&self, group: Group, id: u8, kind: FaultKind) -> Vec<u8> {
        let mut builder = self.frame(CommandId::EntityFault);
        builder.push(group.into());
        builder.push(id);
        builder.push(kind.into());
        builder.build()
    }

    // ------------------------------------------------------------------
    // Schedules
    // ------------------------------------------------------------------

    /// Request erasure of all schedules (empty payload).
    pub fn schedule_erase_all(&self) -> Vec<u8> {
        self.frame(CommandId::Schedule).build()
    }

    /// Report that the schedule with the given id was executed.
    pub fn schedule_exec_report(&self, id: u8) -> Vec<u8> {
        let mut builder = self.frame(CommandId::Schedule);
        builder.push(id);
        builder.build()
    }

    /// Install a list of schedules on the peer.
    pub fn schedule_set(&self, entries: &[ScheduleEntry]) -> Vec<u8> {
        let mut builder = self.frame(CommandId::Schedule);
        encode_schedule_set(&mut builder, entries);
        builder.build()
    }

    // ------------------------------------------------------------------
    // Firmware Update
    // ------------------------------------------------------------------

    /// Build any firmware-update sub-command.
    ///
    /// The payload shape is what classifies the sub-command on the
    /// receiving side; see [`FirmwareUpdate::decode`].
    pub fn firmware_update(&self, update: &FirmwareUpdate) -> Vec<u8> {
        let mut builder = self.frame(CommandId::FirmwareUpdate);
        builder.extend(&update.encode_payload());
        builder.build()
    }
}
