use crate::errors::WireError;

/// Parses a dotted-decimal IPv4 address into its 4-byte wire form.
///
/// Exactly four segments of ASCII digits are accepted, each in `0..=255`.
/// Signs, whitespace and empty segments are rejected.
pub fn encode_ipv4(address: &str) -> Result<[u8; 4], WireError> {
    let invalid = || WireError::InvalidIPv4(address.to_string());

    let mut octets = [0u8; 4];
    let mut segments = address.split('.');

    for octet in octets.iter_mut() {
        let segment = segments.next().ok_or_else(invalid)?;
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *octet = segment.parse::<u8>().map_err(|_| invalid())?;
    }

    if segments.next().is_some() {
        return Err(invalid());
    }

    Ok(octets)
}
