//! Common types used in the protocol.
//!
//! Every enum here has a fixed integer coding that is part of the wire
//! contract; the discriminants must never be renumbered.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::constants::*;
use crate::error::ProtocolError;

/// Command id carried in byte 3 of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandId {
    /// Handshake / heartbeat exchange.
    Handshake = CMD_HANDSHAKE,
    /// Device info request/response.
    DeviceInfo = CMD_DEVICE_INFO,
    /// Network reset request/acknowledgement.
    NetworkReset = CMD_NETWORK_RESET,
    /// Network status report/acknowledgement.
    NetworkStatus = CMD_NETWORK_STATUS,
    /// Time synchronization.
    TimeSync = CMD_TIME_SYNC,
    /// Set a data entity.
    EntitySet = CMD_ENTITY_SET,
    /// Report a data entity.
    EntityReport = CMD_ENTITY_REPORT,
    /// Report a faulty data entity.
    EntityFault = CMD_ENTITY_FAULT,
    /// Data entity scheduling.
    Schedule = CMD_SCHEDULE,
    /// Firmware update.
    FirmwareUpdate = CMD_FIRMWARE_UPDATE,
}

impl From<CommandId> for u8 {
    fn from(cmd: CommandId) -> Self {
        cmd as u8
    }
}

impl TryFrom<u8> for CommandId {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            CMD_HANDSHAKE => Ok(CommandId::Handshake),
            CMD_DEVICE_INFO => Ok(CommandId::DeviceInfo),
            CMD_NETWORK_RESET => Ok(CommandId::NetworkReset),
            CMD_NETWORK_STATUS => Ok(CommandId::NetworkStatus),
            CMD_TIME_SYNC => Ok(CommandId::TimeSync),
            CMD_ENTITY_SET => Ok(CommandId::EntitySet),
            CMD_ENTITY_REPORT => Ok(CommandId::EntityReport),
            CMD_ENTITY_FAULT => Ok(CommandId::EntityFault),
            CMD_SCHEDULE => Ok(CommandId::Schedule),
            CMD_FIRMWARE_UPDATE => Ok(CommandId::FirmwareUpdate),
            _ => Err(ProtocolError::InvalidData(format!(
                "unknown command id 0x{code:02X}"
            ))),
        }
    }
}

/// Functional group a data entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Group {
    /// Static device information.
    Info = 0,
    /// Sensor readings.
    Sensor = 1,
    /// Control settings.
    Control = 2,
}

impl From<Group> for u8 {
    fn from(group: Group) -> Self {
        group as u8
    }
}

impl TryFrom<u8> for Group {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Group::Info),
            1 => Ok(Group::Sensor),
            2 => Ok(Group::Control),
            _ => Err(ProtocolError::InvalidData(format!(
                "unknown entity group 0x{code:02X}"
            ))),
        }
    }
}

/// Value type of a data entity.
///
/// Types other than `Raw` and `String` have a canonical wire width; see
/// [`EntityType::fixed_len`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EntityType {
    /// Opaque bytes.
    Raw = 0,
    /// UTF-8 text.
    String = 1,
    /// Boolean, 1 byte.
    Bool = 2,
    /// Enumeration, 1 byte.
    Enum = 3,
    /// Unsigned integer, 4 bytes.
    Uint = 4,
    /// 1-byte bitmap.
    Bitmap1 = 5,
    /// 2-byte bitmap.
    Bitmap2 = 6,
    /// 4-byte bitmap.
    Bitmap4 = 7,
}

impl EntityType {
    /// Canonical wire width of this type, or `None` for variable-length
    /// types (`Raw`, `String`).
    pub fn fixed_len(self) -> Option<u16> {
        match self {
            EntityType::Raw | EntityType::String => None,
            EntityType::Bool => Some(LEN_BOOL),
            EntityType::Enum => Some(LEN_ENUM),
            EntityType::Uint => Some(LEN_UINT),
            EntityType::Bitmap1 => Some(LEN_BITMAP1),
            EntityType::Bitmap2 => Some(LEN_BITMAP2),
            EntityType::Bitmap4 => Some(LEN_BITMAP4),
        }
    }

    /// Normalize a caller-supplied length: fixed-width types always use
    /// their canonical width, variable-length types keep the given length.
    pub fn enforce_len(self, declared: u16) -> u16 {
        self.fixed_len().unwrap_or(declared)
    }
}

impl From<EntityType> for u8 {
    fn from(ty: EntityType) -> Self {
        ty as u8
    }
}

impl TryFrom<u8> for EntityType {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(EntityType::Raw),
            1 => Ok(EntityType::String),
            2 => Ok(EntityType::Bool),
            3 => Ok(EntityType::Enum),
            4 => Ok(EntityType::Uint),
            5 => Ok(EntityType::Bitmap1),
            6 => Ok(EntityType::Bitmap2),
            7 => Ok(EntityType::Bitmap4),
            _ => Err(ProtocolError::InvalidData(format!(
                "unknown entity type 0x{code:02X}"
            ))),
        }
    }
}

/// Reason byte sent with a network reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResetReason {
    /// Reset to default configuration.
    Default = 0,
    /// Reconfigure via access point.
    AccessPoint = 1,
    /// Reconfigure via smart config.
    SmartConfig = 2,
    /// Quick reconfiguration.
    Quick = 3,
}

impl From<ResetReason> for u8 {
    fn from(reason: ResetReason) -> Self {
        reason as u8
    }
}

/// Network status reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NetworkStatus {
    /// Not configured.
    NotConfigured = 0,
    /// Configured but a connection cannot be established.
    ConnectFailed = 1,
    /// Connected but uplink is not possible.
    UplinkFailed = 2,
    /// Uplink is working.
    UplinkOk = 3,
    /// Currently configuring via access point.
    ConfiguringAp = 0xA1,
    /// Currently configuring via smart config.
    ConfiguringSmart = 0xA2,
    /// Currently configuring via quick config.
    ConfiguringQuick = 0xA3,
}

impl From<NetworkStatus> for u8 {
    fn from(status: NetworkStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for NetworkStatus {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(NetworkStatus::NotConfigured),
            1 => Ok(NetworkStatus::ConnectFailed),
            2 => Ok(NetworkStatus::UplinkFailed),
            3 => Ok(NetworkStatus::UplinkOk),
            0xA1 => Ok(NetworkStatus::ConfiguringAp),
            0xA2 => Ok(NetworkStatus::ConfiguringSmart),
            0xA3 => Ok(NetworkStatus::ConfiguringQuick),
            _ => Err(ProtocolError::InvalidData(format!(
                "unknown network status 0x{code:02X}"
            ))),
        }
    }
}

/// Which clock a time-sync request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TimeSyncScope {
    /// Coordinated universal time.
    Utc = 0,
    /// Gateway-local time.
    Local = 1,
}

impl From<TimeSyncScope> for u8 {
    fn from(scope: TimeSyncScope) -> Self {
        scope as u8
    }
}

/// Fault status of a data entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaultKind {
    /// No fault.
    None = 0,
    /// Fault of unknown nature.
    Unknown = 1,
    /// Entity hardware is broken.
    Broken = 2,
    /// Entity is not available.
    NotAvailable = 3,
    /// Readings are unstable.
    Unstable = 4,
    /// Entity is malfunctioning.
    Malfunction = 5,
    /// Readings are anomalous.
    Anomalous = 6,
    /// Entity data is malformed.
    Malformed = 7,
}

impl From<FaultKind> for u8 {
    fn from(kind: FaultKind) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for FaultKind {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FaultKind::None),
            1 => Ok(FaultKind::Unknown),
            2 => Ok(FaultKind::Broken),
            3 => Ok(FaultKind::NotAvailable),
            4 => Ok(FaultKind::Unstable),
            5 => Ok(FaultKind::Malfunction),
            6 => Ok(FaultKind::Anomalous),
            7 => Ok(FaultKind::Malformed),
            _ => Err(ProtocolError::InvalidData(format!(
                "unknown fault kind 0x{code:02X}"
            ))),
        }
    }
}

/// Field selector in a device info request/response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DeviceInfoField {
    /// Uplink destination.
    UplinkDest = 0,
    /// Device type.
    DeviceType = 1,
    /// Device name.
    DeviceName = 2,
    /// Device id.
    DeviceId = 3,
}

impl From<DeviceInfoField> for u8 {
    fn from(field: DeviceInfoField) -> Self {
        field as u8
    }
}

/// Reply code of a 1-byte firmware-update reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UpdateReply {
    /// No update information available.
    NoInfo = 0,
    /// Device is ready to receive an update.
    Ready = 1,
    /// Device is busy, retry later.
    Busy = 2,
    /// Update refused.
    Refused = 3,
}

impl From<UpdateReply> for u8 {
    fn from(reply: UpdateReply) -> Self {
        reply as u8
    }
}

impl From<u8> for UpdateReply {
    fn from(code: u8) -> Self {
        match code {
            1 => UpdateReply::Ready,
            2 => UpdateReply::Busy,
            3 => UpdateReply::Refused,
            _ => UpdateReply::NoInfo,
        }
    }
}

/// Error code carried in a firmware-update status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UpdateErrorCode {
    /// No error.
    None = 0,
    /// Connection to the image source failed.
    Connection = 1,
    /// Image verification failed.
    Verify = 2,
    /// Writing to flash failed.
    Flash = 3,
    /// Update aborted by the peer.
    Aborted = 4,
}

impl From<UpdateErrorCode> for u8 {
    fn from(code: UpdateErrorCode) -> Self {
        code as u8
    }
}

impl From<u8> for UpdateErrorCode {
    fn from(code: u8) -> Self {
        match code {
            1 => UpdateErrorCode::Connection,
            2 => UpdateErrorCode::Verify,
            3 => UpdateErrorCode::Flash,
            4 => UpdateErrorCode::Aborted,
            _ => UpdateErrorCode::None,
        }
    }
}

/// A calendar time as formatted into a time-sync response.
///
/// The codec never reads a clock itself; callers supply the time. The wire
/// encoding is 7 bytes: year minus 100 (truncated to a byte), month, day,
/// weekday (0 = Sunday .. 6 = Saturday), hour, minute, second. No timezone
/// conversion is performed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTime {
    /// Full calendar year (e.g. 2026).
    pub year: u16,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl From<NaiveDateTime> for CalendarTime {
    fn from(dt: NaiveDateTime) -> Self {
        CalendarTime {
            year: dt.year() as u16,
            month: dt.month() as u8,
            day: dt.day() as u8,
            weekday: dt.weekday().num_days_from_sunday() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
        }
    }
}
