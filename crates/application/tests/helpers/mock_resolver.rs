#![allow(dead_code)]

use async_trait::async_trait;
use minidns_application::ports::DnsResolver;
use minidns_domain::wire::{Answer, Header, Question};
use minidns_domain::DomainError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// Resolver that answers from a name -> answers table and records every call.
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, Vec<Answer>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<Mutex<Vec<(Header, Question)>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            errors: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn set_response(&self, name: &str, answers: Vec<Answer>) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), answers);
    }

    pub async fn set_error(&self, name: &str, error: DomainError) {
        self.errors.write().await.insert(name.to_string(), error);
    }

    pub fn calls(&self) -> Vec<(Header, Question)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(
        &self,
        request: &Header,
        question: &Question,
    ) -> Result<Vec<Answer>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((*request, question.clone()));

        let name = question.name.to_dotted();
        if let Some(err) = self.errors.read().await.get(&name).cloned() {
            return Err(err);
        }

        Ok(self
            .responses
            .read()
            .await
            .get(&name)
            .cloned()
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
