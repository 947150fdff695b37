use minidns_domain::wire::MAX_UDP_MESSAGE_SIZE;
use minidns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

/// Serves datagrams one at a time until a receive fails.
pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = UdpSocket::bind(socket_addr).await?;

    info!(bind_address = %socket.local_addr()?, "DNS server listening");

    serve(socket, handler).await
}

async fn serve(socket: UdpSocket, handler: DnsServerHandler) -> anyhow::Result<()> {
    let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

    loop {
        let (len, peer) = socket.recv_from(&mut recv_buf).await?;
        debug!(client = %peer, bytes = len, "Datagram received");

        let Some(reply) = handler.handle_datagram(&recv_buf[..len], peer).await else {
            continue;
        };

        if let Err(e) = socket.send_to(&reply, peer).await {
            warn!(client = %peer, error = %e, "Failed to send reply");
        }
    }
}
