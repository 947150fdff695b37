use super::bytes::read_u16;
use super::name::Name;
use super::{CLASS_IN, TYPE_A};
use crate::errors::WireError;

/// One entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: Name, qtype: u16, qclass: u16) -> Self {
        Self {
            name,
            qtype,
            qclass,
        }
    }

    /// An A/IN question for `name`.
    pub fn a(name: Name) -> Self {
        Self::new(name, TYPE_A, CLASS_IN)
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        self.name.encode_into(buf);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.name.wire_len() + 4);
        self.encode_into(&mut buf);
        buf
    }

    /// Decodes the question at `offset`, returning it with the offset of the
    /// next entry.
    pub fn decode(message: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let (name, consumed) = Name::extract(message, offset)?;
        let (qtype, offset) = read_u16(message, offset + consumed)?;
        let (qclass, offset) = read_u16(message, offset)?;

        Ok((Self::new(name, qtype, qclass), offset))
    }
}
