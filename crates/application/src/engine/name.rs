use sinkhole_dns_domain::protocol::NAME_MAX_SIZE;

/// Measures the encoded name starting at `offset`, walking label-length
/// bytes until the zero-length terminator (RFC 1035 §3.1).
///
/// Returns the total encoded size including the terminator byte. Returns
/// `None` when the running size reaches the 255-byte name ceiling without a
/// terminator, or when the name runs past the end of the received bytes.
pub fn name_size(message: &[u8], offset: usize) -> Option<usize> {
    let mut size = 0usize;
    loop {
        let label_len = *message.get(offset + size)?;
        if label_len == 0 {
            return Some(size + 1);
        }
        size += label_len as usize + 1;
        if size >= NAME_MAX_SIZE {
            return None;
        }
    }
}
