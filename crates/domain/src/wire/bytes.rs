use crate::errors::WireError;

/// Reads a big-endian `u16` at `offset`, returning it with the offset past it.
pub fn read_u16(buf: &[u8], offset: usize) -> Result<(u16, usize), WireError> {
    let bytes = take::<2>(buf, offset)?;
    Ok((u16::from_be_bytes(bytes), offset + 2))
}

/// Reads a big-endian `u32` at `offset`, returning it with the offset past it.
pub fn read_u32(buf: &[u8], offset: usize) -> Result<(u32, usize), WireError> {
    let bytes = take::<4>(buf, offset)?;
    Ok((u32::from_be_bytes(bytes), offset + 4))
}

pub(crate) fn take<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], WireError> {
    buf.get(offset..)
        .and_then(|rest| rest.get(..N))
        .and_then(|slice| <[u8; N]>::try_from(slice).ok())
        .ok_or(WireError::TruncatedRecord {
            offset,
            needed: N.saturating_sub(buf.len().saturating_sub(offset)),
        })
}
