#![allow(dead_code)]
use minidns_domain::wire::{encode_ipv4, Answer, HeaderFlags, Message, Name, Question};

pub struct MessageBuilder {
    id: u16,
    flags: HeaderFlags,
    questions: Vec<Question>,
    answers: Vec<Answer>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            id: 1234,
            flags: HeaderFlags::default(),
            questions: Vec::new(),
            answers: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: HeaderFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, domain: &str) -> Self {
        self.questions
            .push(Question::a(Name::from_dotted(domain).unwrap()));
        self
    }

    pub fn answer(mut self, domain: &str, ip: &str, ttl: u32) -> Self {
        self.answers.push(Answer::a(
            Name::from_dotted(domain).unwrap(),
            ttl,
            encode_ipv4(ip).unwrap(),
        ));
        self
    }

    pub fn build(self) -> Message {
        Message::with_sections(self.id, self.flags, self.questions, self.answers).unwrap()
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
