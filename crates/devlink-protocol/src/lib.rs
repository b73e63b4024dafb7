//! DevLink Device-Gateway Protocol
//!
//! This crate provides types and utilities for speaking the DevLink protocol,
//! a compact checksum-protected binary protocol used between a constrained
//! device and its gateway. Messages carry handshakes, device metadata,
//! network/time status, typed data entities (sensor and control values),
//! weekly schedules, and firmware-update chunks.
//!
//! # Wire Format
//!
//! Every frame has the same outer shape:
//!
//! ```text
//! +------+------+-----+-----+---------+---------+------------------+--------+
//! | 0x55 | 0xAA | ver | cmd | dlen_hi | dlen_lo | data[0..dlen]    | chksum |
//! +------+------+-----+-----+---------+---------+------------------+--------+
//! ```
//!
//! Multi-byte fields are big-endian. The trailing checksum is the 8-bit
//! wrapping sum of every preceding byte.
//!
//! # Example
//!
//! ```rust,ignore
//! use devlink_protocol::{Frame, MessageBuilder};
//!
//! // Build a heartbeat handshake
//! let builder = MessageBuilder::default();
//! let wire = builder.handshake(&[0x00]);
//!
//! // Parse a received frame and pull out its data entity
//! let frame = Frame::parse(&received)?;
//! let entity = frame.entity()?;
//! ```

mod checksum;
mod constants;
mod entity;
mod error;
mod firmware;
mod frame;
mod messages;
mod schedule;
mod types;

pub use checksum::*;
pub use constants::*;
pub use entity::*;
pub use error::*;
pub use firmware::*;
pub use frame::*;
pub use messages::*;
pub use schedule::*;
pub use types::*;
