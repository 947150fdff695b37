use thiserror::Error;

/// Failures of the wire codec.
///
/// Every variant is terminal for the message being processed: a caller that
/// receives one must discard whatever it was decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Malformed header: need 12 bytes, got {len}")]
    MalformedHeader { len: usize },

    #[error("Name at offset {offset} runs past the end of the message")]
    NameDecodeOverrun { offset: usize },

    #[error("Name at offset {offset} exceeded {limit} compression pointer jumps")]
    PointerLoopLimitExceeded { offset: usize, limit: usize },

    #[error("Invalid {field} value {value}: allowed 0 to {max}")]
    InvalidFlagValue {
        field: &'static str,
        value: u8,
        max: u8,
    },

    #[error("Invalid IPv4 address: {0}")]
    InvalidIPv4(String),

    #[error("Record truncated at offset {offset}: need {needed} more bytes")]
    TruncatedRecord { offset: usize, needed: usize },

    #[error("Label '{label}' is {len} bytes long, the limit is 63")]
    LabelTooLong { label: String, len: usize },

    #[error("Encoded name is {len} bytes long, the limit is 255")]
    NameTooLong { len: usize },

    #[error("{section} section has {len} entries, more than a 16-bit count holds")]
    SectionTooLong { section: &'static str, len: usize },
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Wire format error: {0}")]
    Wire(#[from] WireError),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },
}
