//! Domain names and RFC 1035 §4.1.4 label compression.

use crate::errors::WireError;
use std::fmt;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// Ceiling on compression pointers followed while extracting one name.
pub const MAX_POINTER_JUMPS: usize = 100;

const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// A domain name held in uncompressed wire form: length-prefixed labels
/// followed by the zero-length root label.
///
/// Names decoded from a message are stored fully decompressed, so a name
/// always re-encodes to a self-contained byte sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(Vec<u8>);

impl Name {
    /// The root name, a lone zero byte.
    pub fn root() -> Self {
        Self(vec![0])
    }

    /// Encodes a dotted name such as `"google.com"`.
    ///
    /// Empty segments are skipped, so `""` and `"."` both give the root name
    /// and a trailing dot is ignored.
    pub fn from_dotted(name: &str) -> Result<Self, WireError> {
        let mut buf = Vec::with_capacity(name.len() + 2);

        for label in name.split('.').filter(|label| !label.is_empty()) {
            if label.len() > MAX_LABEL_LEN {
                return Err(WireError::LabelTooLong {
                    label: label.to_string(),
                    len: label.len(),
                });
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);

        if buf.len() > MAX_NAME_LEN {
            return Err(WireError::NameTooLong { len: buf.len() });
        }

        Ok(Self(buf))
    }

    /// Reads the name starting at `start` in `message`.
    ///
    /// Returns the decompressed name and the number of bytes the name
    /// occupies at `start`. Once a compression pointer is met that count is
    /// frozen at the end of the pointer: whatever the decoder reads after
    /// jumping belongs to another part of the message and must not advance
    /// the caller's offset.
    ///
    /// Decoding stops with [`WireError::PointerLoopLimitExceeded`] after
    /// [`MAX_POINTER_JUMPS`] pointers and with
    /// [`WireError::NameDecodeOverrun`] when a label or pointer reaches past
    /// the end of `message`.
    pub fn extract(message: &[u8], start: usize) -> Result<(Self, usize), WireError> {
        let mut decoded = Vec::new();
        let mut segment_start = start;
        let mut cursor = start;
        let mut consumed: Option<usize> = None;
        let mut jumps = 0;

        loop {
            let len_byte = *message
                .get(cursor)
                .ok_or(WireError::NameDecodeOverrun { offset: cursor })?;

            if len_byte & POINTER_TAG == POINTER_TAG {
                let low = *message
                    .get(cursor + 1)
                    .ok_or(WireError::NameDecodeOverrun { offset: cursor })?;

                jumps += 1;
                if jumps > MAX_POINTER_JUMPS {
                    return Err(WireError::PointerLoopLimitExceeded {
                        offset: start,
                        limit: MAX_POINTER_JUMPS,
                    });
                }

                decoded.extend_from_slice(&message[segment_start..cursor]);
                if consumed.is_none() {
                    consumed = Some(cursor + 2 - start);
                }

                let target = (u16::from_be_bytes([len_byte, low]) & POINTER_OFFSET_MASK) as usize;
                cursor = target;
                segment_start = target;
                continue;
            }

            if len_byte == 0 {
                cursor += 1;
                decoded.extend_from_slice(&message[segment_start..cursor]);
                let consumed = consumed.unwrap_or_else(|| cursor - start);
                return Ok((Self(decoded), consumed));
            }

            let next = cursor + usize::from(len_byte) + 1;
            if next > message.len() {
                return Err(WireError::NameDecodeOverrun { offset: cursor });
            }
            cursor = next;
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn wire_len(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0 == [0]
    }

    pub(crate) fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0);
    }

    /// Renders the name as dot-separated labels, without a trailing dot.
    /// The root name renders as `"."`.
    pub fn to_dotted(&self) -> String {
        let mut out = String::new();
        let mut pos = 0;

        while let Some(&len) = self.0.get(pos) {
            if len == 0 {
                break;
            }
            let end = (pos + 1 + usize::from(len)).min(self.0.len());
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(&String::from_utf8_lossy(&self.0[pos + 1..end]));
            pos = end;
        }

        if out.is_empty() {
            out.push('.');
        }
        out
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted())
    }
}
