//! Firmware-update sub-codec.
//!
//! Firmware-update frames multiplex six sub-commands on a single command id
//! and carry no tag byte: the payload length alone selects the sub-command.
//! This saves one byte per frame at the cost of a sharp edge, documented on
//! [`FirmwareUpdate::decode`].

use crate::constants::*;
use crate::types::{UpdateErrorCode, UpdateReply};

/// One firmware-update sub-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirmwareUpdate {
    /// Start an update session (empty payload).
    Initiate,
    /// One-byte reply code.
    Reply(UpdateReply),
    /// Negotiate the chunk size.
    SetChunkSize(u16),
    /// Progress/status report.
    Status {
        /// Whether the update has finished.
        finished: bool,
        /// Whether it finished successfully.
        success: bool,
        /// Error code, [`UpdateErrorCode::None`] when successful.
        error: UpdateErrorCode,
    },
    /// Request the chunk at the given index.
    ChunkRequest(u32),
    /// One chunk of image data.
    Chunk {
        /// Chunk index.
        index: u32,
        /// Chunk bytes.
        data: Vec<u8>,
    },
}

impl FirmwareUpdate {
    /// Classify and decode a firmware-update payload.
    ///
    /// The sub-command is inferred purely from the payload length:
    /// 0 = Initiate, 1 = Reply, 2 = SetChunkSize, 3 = Status,
    /// 4 = ChunkRequest, anything else = Chunk. A closed, order-independent
    /// classification, never an error.
    ///
    /// Sharp edge inherited from the wire contract: a malformed or padded
    /// payload of exactly 1-4 bytes is silently classified as the matching
    /// sub-command rather than rejected, and a Chunk whose total payload
    /// would be 1-4 bytes cannot be expressed at all. Payload length is
    /// authoritative; peers depend on this behavior.
    pub fn decode(payload: &[u8]) -> Self {
        match payload.len() {
            UPDATE_LEN_INITIATE => FirmwareUpdate::Initiate,
            UPDATE_LEN_REPLY => FirmwareUpdate::Reply(UpdateReply::from(payload[0])),
            UPDATE_LEN_SET_CHUNK_SIZE => {
                FirmwareUpdate::SetChunkSize(u16::from_be_bytes([payload[0], payload[1]]))
            }
            UPDATE_LEN_STATUS => FirmwareUpdate::Status {
                finished: payload[0] > 0,
                success: payload[1] > 0,
                error: UpdateErrorCode::from(payload[2]),
            },
            UPDATE_LEN_CHUNK_REQUEST => FirmwareUpdate::ChunkRequest(u32::from_be_bytes([
                payload[0], payload[1], payload[2], payload[3],
            ])),
            _ => FirmwareUpdate::Chunk {
                index: u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]),
                data: payload[UPDATE_CHUNK_DATA_OFFSET..].to_vec(),
            },
        }
    }

    /// Encode this sub-command's payload bytes, mirroring [`Self::decode`].
    pub fn encode_payload(&self) -> Vec<u8> {
        match self {
            FirmwareUpdate::Initiate => Vec::new(),
            FirmwareUpdate::Reply(reply) => vec![(*reply).into()],
            FirmwareUpdate::SetChunkSize(size) => size.to_be_bytes().to_vec(),
            FirmwareUpdate::Status {
                finished,
                success,
                error,
            } => vec![u8::from(*finished), u8::from(*success), (*error).into()],
            FirmwareUpdate::ChunkRequest(index) => index.to_be_bytes().to_vec(),
            FirmwareUpdate::Chunk { index, data } => {
                let mut buf = Vec::with_capacity(UPDATE_CHUNK_DATA_OFFSET + data.len());
                buf.extend_from_slice(&index.to_be_bytes());
                buf.extend_from_slice(data);
                buf
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_classification() {
        assert_eq!(FirmwareUpdate::decode(&[]), FirmwareUpdate::Initiate);
        assert_eq!(
            FirmwareUpdate::decode(&[0x01]),
            FirmwareUpdate::Reply(UpdateReply::Ready)
        );
        assert_eq!(
            FirmwareUpdate::decode(&[0x04, 0x00]),
            FirmwareUpdate::SetChunkSize(0x0400)
        );
        assert_eq!(
            FirmwareUpdate::decode(&[0x01, 0x00, 0x01]),
            FirmwareUpdate::Status {
                finished: true,
                success: false,
                error: UpdateErrorCode::Connection,
            }
        );
        assert_eq!(
            FirmwareUpdate::decode(&[0x00, 0x00, 0x01, 0x00]),
            FirmwareUpdate::ChunkRequest(0x100)
        );
    }

    #[test]
    fn test_six_byte_payload_is_chunk_with_two_data_bytes() {
        let decoded = FirmwareUpdate::decode(&[0x00, 0x00, 0x00, 0x07, 0xAA, 0xBB]);
        assert_eq!(
            decoded,
            FirmwareUpdate::Chunk {
                index: 7,
                data: vec![0xAA, 0xBB],
            }
        );
    }

    #[test]
    fn test_five_byte_payload_is_chunk_with_one_data_byte() {
        let decoded = FirmwareUpdate::decode(&[0x00, 0x00, 0x00, 0x01, 0xCC]);
        assert_eq!(
            decoded,
            FirmwareUpdate::Chunk {
                index: 1,
                data: vec![0xCC],
            }
        );
    }

    #[test]
    fn test_encode_decode_symmetry() {
        let cases = vec![
            FirmwareUpdate::Initiate,
            FirmwareUpdate::Reply(UpdateReply::Busy),
            FirmwareUpdate::SetChunkSize(u16::MAX - 1),
            FirmwareUpdate::Status {
                finished: true,
                success: true,
                error: UpdateErrorCode::None,
            },
            FirmwareUpdate::ChunkRequest(u32::MAX - 1),
            FirmwareUpdate::Chunk {
                index: 42,
                data: vec![1, 2, 3, 4, 5],
            },
        ];
        for case in cases {
            assert_eq!(FirmwareUpdate::decode(&case.encode_payload()), case);
        }
    }

    #[test]
    fn test_status_flags_treat_any_nonzero_as_true() {
        let decoded = FirmwareUpdate::decode(&[0x02, 0xFF, 0x00]);
        assert_eq!(
            decoded,
            FirmwareUpdate::Status {
                finished: true,
                success: true,
                error: UpdateErrorCode::None,
            }
        );
    }
}
