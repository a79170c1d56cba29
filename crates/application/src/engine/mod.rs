//! In-place DNS message transformation.
//!
//! The buffer that carried the request is rewritten into the response; the
//! returned length tells the transport how many bytes to send back. The
//! engine performs no I/O and no allocation; it only reads and writes the
//! caller's buffer.

pub mod answer;
pub mod header;
pub mod name;
pub mod question;

use sinkhole_dns_domain::protocol::{FLAG_QR, MAX_QUESTIONS, MESSAGE_CAPACITY};
use sinkhole_dns_domain::{Rcode, SinkholeTarget};

use question::QuestionError;

/// A message buffer large enough for any synthesizable response.
pub type MessageBuf = [u8; MESSAGE_CAPACITY];

/// Rewrites the request in `message` into a response aimed at `target`.
///
/// `received_len` is the number of bytes the transport read into the
/// buffer; the transport guarantees it covers at least the header and at
/// most [`UDP_MAX_SIZE`](sinkhole_dns_domain::protocol::UDP_MAX_SIZE)
/// bytes, which is what makes in-place answer synthesis capacity-safe.
///
/// Returns `None` when the message must be dropped without a reply, or
/// `Some(n)` when the first `n` bytes of the buffer now hold the response:
/// the original length for error responses, a larger length on success.
pub fn transform(
    message: &mut MessageBuf,
    received_len: usize,
    target: &SinkholeTarget,
) -> Option<usize> {
    // Responses are dropped, never answered.
    if header::flags(message) & FLAG_QR != 0 {
        return None;
    }

    let qdcount = header::qdcount(message);
    if qdcount == 0 || qdcount as usize > MAX_QUESTIONS {
        header::set_response_flags(message, Rcode::NotImp);
        return Some(received_len);
    }

    // A request already carrying answer or authority records cannot be
    // merged with the synthesized answer section.
    if header::ancount(message) != 0 || header::nscount(message) != 0 {
        header::set_response_flags(message, Rcode::NotImp);
        return Some(received_len);
    }

    // Declared additional records are suppressed. On the success path their
    // bytes are overwritten by the answer section below; error responses
    // echo the original length, so stale additional bytes may trail there.
    if header::arcount(message) != 0 {
        header::set_arcount(message, 0);
    }

    let plan = match question::plan(message, received_len, qdcount) {
        Ok(plan) => plan,
        Err(QuestionError::Malformed) => {
            header::set_response_flags(message, Rcode::FormErr);
            return Some(received_len);
        }
        Err(QuestionError::Unsupported) => {
            header::set_response_flags(message, Rcode::NotImp);
            return Some(received_len);
        }
    };

    let response_size = answer::synthesize(message, &plan, target);
    header::set_ancount(message, qdcount);
    header::set_response_flags(message, Rcode::NoError);
    Some(response_size)
}
