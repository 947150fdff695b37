//! minidns application layer: the resolver port and the use case that turns
//! a decoded query into a reply.
pub mod ports;
pub mod use_cases;
