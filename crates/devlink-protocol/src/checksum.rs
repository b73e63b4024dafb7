//! 8-bit additive checksum.
//!
//! Every DevLink frame is sealed with the wrapping sum of all preceding
//! bytes. The same function is used to seal outgoing frames and verify
//! incoming ones.

use crate::error::ProtocolError;

/// Compute the 8-bit additive checksum of a byte slice.
///
/// The sum wraps around at 256; it never saturates.
pub fn checksum(buf: &[u8]) -> u8 {
    buf.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Verify that `expected` is the checksum of `buf`.
pub fn verify(buf: &[u8], expected: u8) -> Result<(), ProtocolError> {
    let computed = checksum(buf);
    if computed == expected {
        Ok(())
    } else {
        Err(ProtocolError::ChecksumMismatch {
            expected: computed,
            actual: expected,
        })
    }
}
