use sinkhole_dns_domain::protocol::{
    HEADER_SIZE, MAX_QUESTIONS, RR_CLASS_ANY, RR_CLASS_IN, RR_TYPE_A, RR_TYPE_ANY,
};

use super::name;

/// Why the question section was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionError {
    /// A name is overlong or the section is truncated (FORMERR).
    Malformed,
    /// A QTYPE or QCLASS outside the supported A/ANY/IN set (NOTIMP).
    Unsupported,
}

/// Layout facts gathered in one walk of the question section.
#[derive(Debug, PartialEq, Eq)]
pub struct QuestionPlan {
    /// Byte offset of each question's encoded name, in message order.
    /// Only the first `count` entries are meaningful.
    pub name_offsets: [u16; MAX_QUESTIONS],
    pub count: usize,
    /// Size of header plus question section; answers are appended here.
    pub answers_start: usize,
}

/// Walks each question once (RFC 1035 §4.1.2): validates its name, QTYPE
/// and QCLASS, records where its name starts, and accumulates the size of
/// everything up to the end of the question section.
///
/// `qdcount` must already be confirmed to be between 1 and [`MAX_QUESTIONS`].
pub fn plan(
    message: &[u8],
    received_len: usize,
    qdcount: u16,
) -> Result<QuestionPlan, QuestionError> {
    let received = &message[..received_len];
    let mut name_offsets = [0u16; MAX_QUESTIONS];
    let mut response_size = HEADER_SIZE;

    for question in 0..qdcount as usize {
        name_offsets[question] = response_size as u16;

        let name_size =
            name::name_size(received, response_size).ok_or(QuestionError::Malformed)?;
        response_size += name_size;

        // QTYPE and QCLASS trail the name as two 16-bit fields.
        if response_size + 4 > received_len {
            return Err(QuestionError::Malformed);
        }
        let qtype = u16::from_be_bytes([received[response_size], received[response_size + 1]]);
        if qtype != RR_TYPE_A && qtype != RR_TYPE_ANY {
            return Err(QuestionError::Unsupported);
        }
        let qclass =
            u16::from_be_bytes([received[response_size + 2], received[response_size + 3]]);
        if qclass != RR_CLASS_IN && qclass != RR_CLASS_ANY {
            return Err(QuestionError::Unsupported);
        }
        response_size += 4;
    }

    Ok(QuestionPlan {
        name_offsets,
        count: qdcount as usize,
        answers_start: response_size,
    })
}
