//! Protocol constants
//!
//! These constants define the frame header bytes, command codes, and other
//! wire-level values used in the DevLink device-gateway protocol. All of
//! them are part of the bit-exact contract with deployed peers.

// ============================================================================
// Frame Layout
// ============================================================================

/// First frame header byte.
pub const FRAME_HEAD1: u8 = 0x55;
/// Second frame header byte.
pub const FRAME_HEAD2: u8 = 0xAA;
/// Minimum total frame length (empty payload): 2 header + version + command
/// + 2 length + checksum.
pub const FRAME_MIN_LEN: usize = 7;
/// Size of the big-endian length field, in both frames and entity sub-frames.
pub const LEN_FIELD_SIZE: usize = 2;
/// Minimum data-entity sub-frame length: group + id + type + 2-byte length.
pub const ENTITY_MIN_LEN: usize = 5;
/// Fixed header of one schedule entry: id + weekday bitmap + hour + minute.
pub const SCHEDULE_HEAD_LEN: usize = 4;
/// Payload length of a time-sync response: request byte + 7 time bytes.
pub const TIME_SYNC_RESPONSE_LEN: usize = 8;

// ============================================================================
// Command Codes
// ============================================================================

/// Handshake / heartbeat exchange.
pub const CMD_HANDSHAKE: u8 = 0;
/// Device info request/response (uplink destination, type, name, id).
pub const CMD_DEVICE_INFO: u8 = 1;
/// Network reset request/acknowledgement.
pub const CMD_NETWORK_RESET: u8 = 2;
/// Network status report/acknowledgement.
pub const CMD_NETWORK_STATUS: u8 = 3;
/// Time synchronization.
pub const CMD_TIME_SYNC: u8 = 4;
/// Set a data entity.
pub const CMD_ENTITY_SET: u8 = 5;
/// Report a data entity.
pub const CMD_ENTITY_REPORT: u8 = 6;
/// Report a faulty data entity.
pub const CMD_ENTITY_FAULT: u8 = 7;
/// Data entity scheduling.
pub const CMD_SCHEDULE: u8 = 8;
/// Firmware update.
pub const CMD_FIRMWARE_UPDATE: u8 = 9;

// ============================================================================
// Handshake Data Bytes
// ============================================================================

/// This device is alive.
pub const HS_HEARTBEAT: u8 = 0;
/// Acknowledge the other device is alive.
pub const HS_HEARTBEAT_ACK: u8 = 1;
/// All data entities needed for uplink have been transmitted.
pub const HS_TX_FINISHED: u8 = 2;
/// All received data entities have been uplinked.
pub const HS_UPLINKED: u8 = 3;

// ============================================================================
// Fixed Entity Widths
// ============================================================================

/// Wire width of a Bool entity.
pub const LEN_BOOL: u16 = 1;
/// Wire width of an Enum entity.
pub const LEN_ENUM: u16 = 1;
/// Wire width of a Uint entity.
pub const LEN_UINT: u16 = 4;
/// Wire width of a 1-byte bitmap entity.
pub const LEN_BITMAP1: u16 = 1;
/// Wire width of a 2-byte bitmap entity.
pub const LEN_BITMAP2: u16 = 2;
/// Wire width of a 4-byte bitmap entity.
pub const LEN_BITMAP4: u16 = 4;

// ============================================================================
// Firmware-Update Classification Lengths
// ============================================================================

/// Payload length of an Initiate sub-command.
pub const UPDATE_LEN_INITIATE: usize = 0;
/// Payload length of a simple reply sub-command.
pub const UPDATE_LEN_REPLY: usize = 1;
/// Payload length of a set-chunk-size sub-command.
pub const UPDATE_LEN_SET_CHUNK_SIZE: usize = 2;
/// Payload length of a status sub-command.
pub const UPDATE_LEN_STATUS: usize = 3;
/// Payload length of a chunk-request sub-command.
pub const UPDATE_LEN_CHUNK_REQUEST: usize = 4;
/// Offset of chunk data inside a Chunk sub-command payload.
pub const UPDATE_CHUNK_DATA_OFFSET: usize = 4;
