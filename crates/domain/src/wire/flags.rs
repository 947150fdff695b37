use crate::errors::WireError;

const QR_BIT: u16 = 15;
const AA_BIT: u16 = 10;
const TC_BIT: u16 = 9;
const RD_BIT: u16 = 8;
const RA_BIT: u16 = 7;

const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x7800; // bits 11-14
const Z_SHIFT: u16 = 4;
const Z_MASK: u16 = 0x0070; // bits 4-6
const RCODE_MASK: u16 = 0x000F; // bits 0-3

const OPCODE_MAX: u8 = 15;
const Z_MAX: u8 = 7;
const RCODE_MAX: u8 = 15;

/// The second word of the DNS header.
///
/// Layout, most significant bit first:
/// `QR(1) OPCODE(4) AA(1) TC(1) RD(1) RA(1) Z(3) RCODE(4)`.
///
/// Setters only ever OR bits into the word. Setting a single-bit flag to
/// `false` leaves it untouched, and writing a multi-bit field twice leaves
/// the union of both values. Start from [`HeaderFlags::default`] when a
/// field needs a specific value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HeaderFlags(u16);

impl HeaderFlags {
    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    fn has_bit(&self, bit: u16) -> bool {
        self.0 & (1 << bit) != 0
    }

    fn set_bit(&mut self, bit: u16, value: bool) {
        if value {
            self.0 |= 1 << bit;
        }
    }

    fn set_range(
        &mut self,
        field: &'static str,
        value: u8,
        max: u8,
        shift: u16,
    ) -> Result<(), WireError> {
        if value > max {
            return Err(WireError::InvalidFlagValue { field, value, max });
        }
        self.0 |= u16::from(value) << shift;
        Ok(())
    }

    /// Query (`false`) or response (`true`).
    pub fn qr(&self) -> bool {
        self.has_bit(QR_BIT)
    }

    pub fn set_qr(&mut self, value: bool) {
        self.set_bit(QR_BIT, value);
    }

    pub fn opcode(&self) -> u8 {
        ((self.0 & OPCODE_MASK) >> OPCODE_SHIFT) as u8
    }

    pub fn set_opcode(&mut self, value: u8) -> Result<(), WireError> {
        self.set_range("opcode", value, OPCODE_MAX, OPCODE_SHIFT)
    }

    /// Authoritative answer.
    pub fn aa(&self) -> bool {
        self.has_bit(AA_BIT)
    }

    pub fn set_aa(&mut self, value: bool) {
        self.set_bit(AA_BIT, value);
    }

    /// Truncated.
    pub fn tc(&self) -> bool {
        self.has_bit(TC_BIT)
    }

    pub fn set_tc(&mut self, value: bool) {
        self.set_bit(TC_BIT, value);
    }

    /// Recursion desired.
    pub fn rd(&self) -> bool {
        self.has_bit(RD_BIT)
    }

    pub fn set_rd(&mut self, value: bool) {
        self.set_bit(RD_BIT, value);
    }

    /// Recursion available.
    pub fn ra(&self) -> bool {
        self.has_bit(RA_BIT)
    }

    pub fn set_ra(&mut self, value: bool) {
        self.set_bit(RA_BIT, value);
    }

    /// Reserved bits, carried through unchanged.
    pub fn z(&self) -> u8 {
        ((self.0 & Z_MASK) >> Z_SHIFT) as u8
    }

    pub fn set_z(&mut self, value: u8) -> Result<(), WireError> {
        self.set_range("z", value, Z_MAX, Z_SHIFT)
    }

    pub fn rcode(&self) -> u8 {
        (self.0 & RCODE_MASK) as u8
    }

    pub fn set_rcode(&mut self, value: u8) -> Result<(), WireError> {
        self.set_range("rcode", value, RCODE_MAX, 0)
    }
}
