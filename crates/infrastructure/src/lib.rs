//! Adapters: the UDP transport, the local and forwarding resolvers and the
//! datagram handler the server loop drives.
pub mod dns;
