use super::bytes::read_u16;
use super::flags::HeaderFlags;
use crate::errors::WireError;

pub const HEADER_LEN: usize = 12;

/// The fixed 12-byte message header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: HeaderFlags,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..2].copy_from_slice(&self.id.to_be_bytes());
        buf[2..4].copy_from_slice(&self.flags.bits().to_be_bytes());
        buf[4..6].copy_from_slice(&self.qdcount.to_be_bytes());
        buf[6..8].copy_from_slice(&self.ancount.to_be_bytes());
        buf[8..10].copy_from_slice(&self.nscount.to_be_bytes());
        buf[10..12].copy_from_slice(&self.arcount.to_be_bytes());
        buf
    }

    /// Decodes the header at the start of `message`. Returns the header and
    /// the offset of the question section.
    pub fn decode(message: &[u8]) -> Result<(Self, usize), WireError> {
        if message.len() < HEADER_LEN {
            return Err(WireError::MalformedHeader { len: message.len() });
        }

        let (id, offset) = read_u16(message, 0)?;
        let (flags, offset) = read_u16(message, offset)?;
        let (qdcount, offset) = read_u16(message, offset)?;
        let (ancount, offset) = read_u16(message, offset)?;
        let (nscount, offset) = read_u16(message, offset)?;
        let (arcount, offset) = read_u16(message, offset)?;

        Ok((
            Self {
                id,
                flags: HeaderFlags::from_bits(flags),
                qdcount,
                ancount,
                nscount,
                arcount,
            },
            offset,
        ))
    }
}
