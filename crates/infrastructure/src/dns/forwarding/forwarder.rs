use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use minidns_application::ports::DnsResolver;
use minidns_domain::wire::{Answer, Header, Question};
use minidns_domain::DomainError;
use std::time::Duration;
use tracing::{debug, warn};

/// Resolves questions by asking an upstream server, one question per query.
pub struct DnsForwarder {
    transport: Box<dyn DnsTransport>,
    timeout: Duration,
    label: String,
}

impl DnsForwarder {
    pub fn new(transport: Box<dyn DnsTransport>, timeout: Duration) -> Self {
        let label = format!(
            "{}://{}",
            transport.protocol_name().to_lowercase(),
            transport.server_addr()
        );
        Self {
            transport,
            timeout,
            label,
        }
    }
}

#[async_trait]
impl DnsResolver for DnsForwarder {
    async fn resolve(
        &self,
        request: &Header,
        question: &Question,
    ) -> Result<Vec<Answer>, DomainError> {
        let query = MessageBuilder::build_forward_bytes(request, question);

        debug!(
            upstream = %self.label,
            id = request.id,
            name = %question.name,
            "Forwarding question"
        );

        let response = self.transport.send(&query, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes, request.id)?;

        if parsed.truncated {
            warn!(upstream = %self.label, id = parsed.id, "Upstream response truncated");
        }
        if parsed.is_server_error() {
            debug!(upstream = %self.label, rcode = parsed.rcode, "Upstream returned an error code");
        }

        Ok(parsed.answers)
    }

    fn name(&self) -> &str {
        &self.label
    }
}
