use async_trait::async_trait;
use minidns_domain::wire::{Answer, Header, Question};
use minidns_domain::DomainError;

/// Source of answers for a single question.
///
/// `request` is the header of the client's query; adapters that talk to
/// another server reuse its ID and flags.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(
        &self,
        request: &Header,
        question: &Question,
    ) -> Result<Vec<Answer>, DomainError>;

    /// Short label for logs, e.g. `"local"` or the upstream address.
    fn name(&self) -> &str;
}
