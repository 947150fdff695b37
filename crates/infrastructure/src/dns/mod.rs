pub mod forwarding;
pub mod local;
pub mod server;
pub mod transport;

pub use forwarding::DnsForwarder;
pub use local::LocalAnswerResolver;
pub use server::DnsServerHandler;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
