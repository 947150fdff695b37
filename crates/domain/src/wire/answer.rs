use super::bytes::{read_u16, read_u32, take};
use super::name::Name;
use super::{CLASS_IN, TYPE_A};
use crate::errors::WireError;
use std::net::Ipv4Addr;

/// RDATA length of an A record, the only shape this codec reads.
pub const A_RDATA_LEN: u16 = 4;

/// One resource record of the answer section.
///
/// RDATA is always four bytes. Decoding reads exactly four bytes after
/// RDLENGTH whatever RDLENGTH says, so records of any other type (CNAME,
/// AAAA, ...) throw off every offset after them. Keep upstream queries to
/// A/IN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: Name,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: [u8; 4],
}

impl Answer {
    /// An A/IN record pointing `name` at `address`.
    pub fn a(name: Name, ttl: u32, address: [u8; 4]) -> Self {
        Self {
            name,
            rtype: TYPE_A,
            rclass: CLASS_IN,
            ttl,
            rdlength: A_RDATA_LEN,
            rdata: address,
        }
    }

    pub fn address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.rdata)
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        self.name.encode_into(buf);
        buf.extend_from_slice(&self.rtype.to_be_bytes());
        buf.extend_from_slice(&self.rclass.to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());
        buf.extend_from_slice(&self.rdlength.to_be_bytes());
        buf.extend_from_slice(&self.rdata);
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.name.wire_len() + 14);
        self.encode_into(&mut buf);
        buf
    }

    /// Decodes the record at `offset`, returning it with the offset of the
    /// next record.
    pub fn decode(message: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let (name, consumed) = Name::extract(message, offset)?;
        let (rtype, offset) = read_u16(message, offset + consumed)?;
        let (rclass, offset) = read_u16(message, offset)?;
        let (ttl, offset) = read_u32(message, offset)?;
        let (rdlength, offset) = read_u16(message, offset)?;
        let rdata = take::<4>(message, offset)?;

        Ok((
            Self {
                name,
                rtype,
                rclass,
                ttl,
                rdlength,
                rdata,
            },
            offset + rdata.len(),
        ))
    }
}
