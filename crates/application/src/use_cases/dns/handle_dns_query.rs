use crate::ports::DnsResolver;
use minidns_domain::wire::{
    Answer, HeaderFlags, Message, Question, OPCODE_QUERY, RCODE_NOT_IMPLEMENTED, RCODE_NO_ERROR,
    RCODE_SERVER_FAILURE,
};
use minidns_domain::DomainError;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Turns one decoded request into the reply the server sends back.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, request: &Message) -> Result<Message, DomainError> {
        let start = Instant::now();
        let opcode = request.header.flags.opcode();

        let questions: Vec<Question> = request
            .questions
            .iter()
            .map(|q| Question::a(q.name.clone()))
            .collect();

        // Only standard queries reach the resolver. Any other opcode gets the
        // questions echoed back with NOTIMP and an empty answer section.
        let (rcode, answers) = if opcode != OPCODE_QUERY {
            debug!(id = request.header.id, opcode, "Opcode not implemented");
            (RCODE_NOT_IMPLEMENTED, Vec::new())
        } else {
            match self.resolve_all(request, &questions).await {
                Ok(answers) => (RCODE_NO_ERROR, answers),
                Err(e) => {
                    warn!(
                        id = request.header.id,
                        resolver = self.resolver.name(),
                        error = %e,
                        "Resolution failed, answering SERVFAIL"
                    );
                    (RCODE_SERVER_FAILURE, Vec::new())
                }
            }
        };

        let flags = Self::reply_flags(request.header.flags, rcode)?;
        let reply = Message::with_sections(request.header.id, flags, questions, answers)?;

        debug!(
            id = reply.header.id,
            questions = reply.header.qdcount,
            answers = reply.header.ancount,
            rcode,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query handled"
        );

        Ok(reply)
    }

    async fn resolve_all(
        &self,
        request: &Message,
        questions: &[Question],
    ) -> Result<Vec<Answer>, DomainError> {
        let mut answers = Vec::with_capacity(questions.len());
        for question in questions {
            let mut resolved = self.resolver.resolve(&request.header, question).await?;
            debug!(
                name = %question.name,
                resolver = self.resolver.name(),
                count = resolved.len(),
                "Question resolved"
            );
            answers.append(&mut resolved);
        }
        Ok(answers)
    }

    fn reply_flags(request: HeaderFlags, rcode: u8) -> Result<HeaderFlags, DomainError> {
        let mut flags = HeaderFlags::default();
        flags.set_qr(true);
        flags.set_opcode(request.opcode())?;
        flags.set_rd(request.rd());
        flags.set_rcode(rcode)?;
        Ok(flags)
    }
}
