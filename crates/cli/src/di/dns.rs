use minidns_application::ports::DnsResolver;
use minidns_application::use_cases::HandleDnsQueryUseCase;
use minidns_domain::Config;
use minidns_infrastructure::dns::{
    DnsForwarder, DnsServerHandler, LocalAnswerResolver, UdpTransport,
};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = Self::build_resolver(config)?;
        info!(resolver = resolver.name(), "DNS resolver ready");

        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(resolver));

        Ok(Self { handler_use_case })
    }

    pub fn handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(self.handler_use_case.clone())
    }

    fn build_resolver(config: &Config) -> anyhow::Result<Arc<dyn DnsResolver>> {
        match config.upstream.resolver_addr().map_err(anyhow::Error::msg)? {
            Some(addr) => {
                info!(
                    upstream = %addr,
                    timeout_ms = config.upstream.timeout_ms,
                    "Forwarding to upstream resolver"
                );
                let transport = Box::new(UdpTransport::new(addr));
                Ok(Arc::new(DnsForwarder::new(
                    transport,
                    config.upstream.timeout(),
                )))
            }
            None => {
                info!(
                    address = %config.local.address,
                    ttl = config.local.ttl,
                    "Answering locally"
                );
                Ok(Arc::new(LocalAnswerResolver::from_config(&config.local)?))
            }
        }
    }
}
