pub mod builders;
pub mod dns_server_mock;

pub use builders::{query_bytes, query_message};
pub use dns_server_mock::{MockBehavior, MockDnsServer};
