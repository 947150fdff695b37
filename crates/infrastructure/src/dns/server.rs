use minidns_application::use_cases::HandleDnsQueryUseCase;
use minidns_domain::wire::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Datagram in, datagram out. Knows nothing about sockets.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the encoded reply, or `None` when the datagram gets no reply.
    pub async fn handle_datagram(&self, bytes: &[u8], peer: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::decode(bytes) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %peer, len = bytes.len(), error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        debug!(
            client = %peer,
            id = request.header.id,
            questions = request.questions.len(),
            "DNS query received"
        );

        match self.use_case.execute(&request).await {
            Ok(reply) => Some(reply.encode()),
            Err(e) => {
                error!(client = %peer, id = request.header.id, error = %e, "Query handling failed");
                None
            }
        }
    }
}
