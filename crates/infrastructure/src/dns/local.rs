use async_trait::async_trait;
use minidns_application::ports::DnsResolver;
use minidns_domain::config::LocalAnswerConfig;
use minidns_domain::wire::{Answer, Header, Question};
use minidns_domain::DomainError;

/// Answers every question with the same A record.
pub struct LocalAnswerResolver {
    address: [u8; 4],
    ttl: u32,
}

impl LocalAnswerResolver {
    pub fn new(address: [u8; 4], ttl: u32) -> Self {
        Self { address, ttl }
    }

    pub fn from_config(config: &LocalAnswerConfig) -> Result<Self, DomainError> {
        Ok(Self::new(config.address_octets()?, config.ttl))
    }
}

#[async_trait]
impl DnsResolver for LocalAnswerResolver {
    async fn resolve(
        &self,
        _request: &Header,
        question: &Question,
    ) -> Result<Vec<Answer>, DomainError> {
        Ok(vec![Answer::a(question.name.clone(), self.ttl, self.address)])
    }

    fn name(&self) -> &str {
        "local"
    }
}
