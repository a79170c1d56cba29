//! Accessors for the fixed 12-byte header (RFC 1035 §4.1.1).
//!
//! Every multi-byte field is big-endian on the wire; accessors convert on
//! each read and write rather than reinterpreting memory. Callers guarantee
//! the buffer holds at least the 12 header bytes.

use sinkhole_dns_domain::protocol::{
    FLAG_AA, FLAG_QR, FLAG_RA, FLAG_RCODE, FLAG_Z, OFFSET_ANCOUNT, OFFSET_ARCOUNT, OFFSET_FLAGS,
    OFFSET_ID, OFFSET_NSCOUNT, OFFSET_QDCOUNT,
};
use sinkhole_dns_domain::Rcode;

fn get_u16(message: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([message[offset], message[offset + 1]])
}

fn put_u16(message: &mut [u8], offset: usize, value: u16) {
    message[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

pub fn id(message: &[u8]) -> u16 {
    get_u16(message, OFFSET_ID)
}

pub fn set_id(message: &mut [u8], value: u16) {
    put_u16(message, OFFSET_ID, value);
}

pub fn flags(message: &[u8]) -> u16 {
    get_u16(message, OFFSET_FLAGS)
}

pub fn set_flags(message: &mut [u8], value: u16) {
    put_u16(message, OFFSET_FLAGS, value);
}

pub fn qdcount(message: &[u8]) -> u16 {
    get_u16(message, OFFSET_QDCOUNT)
}

pub fn set_qdcount(message: &mut [u8], value: u16) {
    put_u16(message, OFFSET_QDCOUNT, value);
}

pub fn ancount(message: &[u8]) -> u16 {
    get_u16(message, OFFSET_ANCOUNT)
}

pub fn set_ancount(message: &mut [u8], value: u16) {
    put_u16(message, OFFSET_ANCOUNT, value);
}

pub fn nscount(message: &[u8]) -> u16 {
    get_u16(message, OFFSET_NSCOUNT)
}

pub fn set_nscount(message: &mut [u8], value: u16) {
    put_u16(message, OFFSET_NSCOUNT, value);
}

pub fn arcount(message: &[u8]) -> u16 {
    get_u16(message, OFFSET_ARCOUNT)
}

pub fn set_arcount(message: &mut [u8], value: u16) {
    put_u16(message, OFFSET_ARCOUNT, value);
}

/// Stamps the one response flag policy used for every outcome: QR set,
/// AA and Z cleared, RA set, Opcode and RD preserved from the request,
/// RCODE set to `rcode`.
pub fn set_response_flags(message: &mut [u8], rcode: Rcode) {
    let mut flags = flags(message);
    flags |= FLAG_QR | FLAG_RA;
    flags &= !(FLAG_AA | FLAG_Z | FLAG_RCODE);
    flags |= rcode.code();
    set_flags(message, flags);
}
