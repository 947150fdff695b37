#![allow(dead_code)]
use minidns_domain::wire::{Answer, HeaderFlags, Message};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock upstream reacts to a query.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// One A record per question, pointing at `address`.
    Answer { address: [u8; 4], ttl: u32 },
    /// Like `Answer` but with the ID off by one.
    WrongId,
    /// Replies with bytes that do not decode.
    Garbage,
    /// Never replies.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_mock_response(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_mock_response(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
        let (address, ttl, id_offset) = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Garbage => return Some(vec![0xDE, 0xAD]),
            MockBehavior::Answer { address, ttl } => (address, ttl, 0),
            MockBehavior::WrongId => ([127, 0, 0, 1], 60, 1),
        };

        let query = Message::decode(query).ok()?;

        let mut flags = HeaderFlags::default();
        flags.set_qr(true);
        flags.set_rd(query.header.flags.rd());
        flags.set_ra(true);

        let answers = query
            .questions
            .iter()
            .map(|q| Answer::a(q.name.clone(), ttl, address))
            .collect();

        let reply = Message::with_sections(
            query.header.id.wrapping_add(id_offset),
            flags,
            query.questions,
            answers,
        )
        .ok()?;
        Some(reply.encode())
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
