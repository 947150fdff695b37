use minidns_domain::wire::{Answer, Message};
use minidns_domain::DomainError;
use tracing::debug;

/// What the forwarder keeps from an upstream reply.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: u8,

    pub truncated: bool,

    pub answers: Vec<Answer>,
}

impl DnsResponse {
    pub fn is_server_error(&self) -> bool {
        self.rcode != 0
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes `response_bytes` and checks it answers query `expected_id`.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<DnsResponse, DomainError> {
        let message = Message::decode(response_bytes)?;

        if message.header.id != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                message.header.id, expected_id
            )));
        }

        let flags = message.header.flags;
        debug!(
            id = message.header.id,
            rcode = flags.rcode(),
            truncated = flags.tc(),
            answers = message.answers.len(),
            "Upstream response parsed"
        );

        Ok(DnsResponse {
            id: message.header.id,
            rcode: flags.rcode(),
            truncated: flags.tc(),
            answers: message.answers,
        })
    }
}
