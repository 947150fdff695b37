#![allow(dead_code)]
use minidns_domain::wire::{HeaderFlags, Message, Name, Question};

/// A standard query with RD set and one A/IN question per name.
pub fn query_message(id: u16, names: &[&str]) -> Message {
    let mut flags = HeaderFlags::default();
    flags.set_rd(true);
    let questions = names
        .iter()
        .map(|n| Question::a(Name::from_dotted(n).unwrap()))
        .collect();
    Message::with_sections(id, flags, questions, Vec::new()).unwrap()
}

pub fn query_bytes(id: u16, names: &[&str]) -> Vec<u8> {
    query_message(id, names).encode()
}
