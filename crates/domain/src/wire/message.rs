use super::answer::Answer;
use super::flags::HeaderFlags;
use super::header::Header;
use super::question::Question;
use crate::errors::WireError;

/// A complete DNS message: header, question section and answer section.
///
/// Authority and additional records are not modelled. Their counts are
/// carried in the header but the sections themselves are neither decoded nor
/// encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
}

impl Message {
    /// Builds a message whose QDCOUNT and ANCOUNT match the sections given.
    /// NSCOUNT and ARCOUNT are zero.
    pub fn with_sections(
        id: u16,
        flags: HeaderFlags,
        questions: Vec<Question>,
        answers: Vec<Answer>,
    ) -> Result<Self, WireError> {
        let header = Header {
            id,
            flags,
            qdcount: section_count("question", questions.len())?,
            ancount: section_count("answer", answers.len())?,
            nscount: 0,
            arcount: 0,
        };

        Ok(Self {
            header,
            questions,
            answers,
        })
    }

    /// Header, questions, then answers, back to back.
    ///
    /// The header is written as stored: keeping its counts in line with the
    /// sections is up to whoever built the message.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(super::MAX_UDP_MESSAGE_SIZE);
        buf.extend_from_slice(&self.header.encode());
        for question in &self.questions {
            question.encode_into(&mut buf);
        }
        for answer in &self.answers {
            answer.encode_into(&mut buf);
        }
        buf
    }

    /// Decodes QDCOUNT questions and then ANCOUNT answers. Any error aborts
    /// the whole message.
    pub fn decode(bytes: &[u8]) -> Result<Self, WireError> {
        let (header, mut offset) = Header::decode(bytes)?;

        let mut questions = Vec::with_capacity(usize::from(header.qdcount).min(64));
        for _ in 0..header.qdcount {
            let (question, next) = Question::decode(bytes, offset)?;
            questions.push(question);
            offset = next;
        }

        let mut answers = Vec::with_capacity(usize::from(header.ancount).min(64));
        for _ in 0..header.ancount {
            let (answer, next) = Answer::decode(bytes, offset)?;
            answers.push(answer);
            offset = next;
        }

        Ok(Self {
            header,
            questions,
            answers,
        })
    }
}

fn section_count(section: &'static str, len: usize) -> Result<u16, WireError> {
    u16::try_from(len).map_err(|_| WireError::SectionTooLong { section, len })
}
