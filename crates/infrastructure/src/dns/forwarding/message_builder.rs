//! Builds the query sent upstream for one question of a client request.

use minidns_domain::wire::{Header, Message, Question};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Upstream query for `question`.
    ///
    /// The client's ID and flags are reused so the upstream reply can be
    /// matched by ID. QDCOUNT is 1 and the other counts are 0 whatever the
    /// client sent.
    pub fn build_forward_query(request: &Header, question: &Question) -> Message {
        Message {
            header: Header {
                qdcount: 1,
                ancount: 0,
                nscount: 0,
                arcount: 0,
                ..*request
            },
            questions: vec![question.clone()],
            answers: Vec::new(),
        }
    }

    /// Same as [`build_forward_query`](Self::build_forward_query), already
    /// in wire format.
    pub fn build_forward_bytes(request: &Header, question: &Question) -> Vec<u8> {
        Self::build_forward_query(request, question).encode()
    }
}
