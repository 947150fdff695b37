//! RFC 1035 wire format codec.
//!
//! Every decode step is a pure function over the full message buffer and an
//! offset, returning the decoded value together with the offset just past it.
//! Nothing here keeps state between calls, so one buffer can be decoded from
//! any number of threads as long as each call gets its own slice.

mod answer;
mod bytes;
mod flags;
mod header;
mod ipv4;
mod message;
mod name;
mod question;

pub use answer::{Answer, A_RDATA_LEN};
pub use bytes::{read_u16, read_u32};
pub use flags::HeaderFlags;
pub use header::{Header, HEADER_LEN};
pub use ipv4::encode_ipv4;
pub use message::Message;
pub use name::{Name, MAX_LABEL_LEN, MAX_NAME_LEN, MAX_POINTER_JUMPS};
pub use question::Question;

/// Largest datagram the server reads or sends without EDNS(0).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;

pub const OPCODE_QUERY: u8 = 0;

pub const RCODE_NO_ERROR: u8 = 0;
pub const RCODE_SERVER_FAILURE: u8 = 2;
pub const RCODE_NOT_IMPLEMENTED: u8 = 4;
