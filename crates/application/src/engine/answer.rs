use sinkhole_dns_domain::protocol::{ANSWER_SIZE, POINTER_TAG, RR_CLASS_IN, RR_TYPE_A};
use sinkhole_dns_domain::SinkholeTarget;

use super::question::QuestionPlan;

/// Appends one A record per planned question, in question order, starting
/// at `plan.answers_start` (RFC 1035 §4.1.3). Each record names its
/// question through a compression pointer (§4.1.4) rather than repeating
/// the label bytes. Returns the total message size after the last record.
pub fn synthesize(message: &mut [u8], plan: &QuestionPlan, target: &SinkholeTarget) -> usize {
    let mut pos = plan.answers_start;

    for &name_offset in &plan.name_offsets[..plan.count] {
        let pointer = POINTER_TAG | name_offset;
        message[pos..pos + 2].copy_from_slice(&pointer.to_be_bytes());
        message[pos + 2..pos + 4].copy_from_slice(&RR_TYPE_A.to_be_bytes());
        message[pos + 4..pos + 6].copy_from_slice(&RR_CLASS_IN.to_be_bytes());
        message[pos + 6..pos + 10].copy_from_slice(&target.ttl.to_be_bytes());
        message[pos + 10..pos + 12].copy_from_slice(&4u16.to_be_bytes());
        message[pos + 12..pos + 16].copy_from_slice(&target.address.octets());
        pos += ANSWER_SIZE;
    }

    pos
}
