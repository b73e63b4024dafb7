//! Protocol error types.

use thiserror::Error;

use crate::types::CommandId;

/// Errors that can occur when decoding DevLink frames and sub-frames.
///
/// Every error is terminal for the decode call that raised it; the codec has
/// no partial-result or retry semantics. Errors carry context values, never
/// references to the offending buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Buffer is below the minimum frame or sub-frame size.
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    TooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// Frame or sub-frame content is invalid (bad header bytes, unknown
    /// enum coding).
    #[error("invalid frame data: {0}")]
    InvalidData(String),

    /// The trailing checksum does not match the frame content.
    #[error("checksum mismatch: got 0x{actual:02X} but expected 0x{expected:02X}")]
    ChecksumMismatch {
        /// Checksum computed over the frame.
        expected: u8,
        /// Checksum byte found on the wire.
        actual: u8,
    },

    /// Declared and actual lengths diverge, at frame, entity, or schedule
    /// level.
    #[error("length mismatch: declared {declared} bytes but buffer holds {actual}")]
    LengthMismatch {
        /// Length declared on the wire.
        declared: usize,
        /// Length actually available.
        actual: usize,
    },

    /// An extractor was invoked against a frame of the wrong command family.
    #[error("wrong command id: expected {expected:?}, got 0x{actual:02X}")]
    WrongCommand {
        /// Command family the extractor handles.
        expected: CommandId,
        /// Command id found in the frame.
        actual: u8,
    },

    /// A schedule entry failed to decode.
    #[error("schedule entry {id}: {source}")]
    Schedule {
        /// Id of the offending schedule entry.
        id: u8,
        /// The underlying decode failure.
        #[source]
        source: Box<ProtocolError>,
    },
}

impl ProtocolError {
    /// Wrap a nested decode failure with the schedule entry it belongs to.
    pub fn in_schedule(self, id: u8) -> Self {
        ProtocolError::Schedule {
            id,
            source: Box::new(self),
        }
    }
}
