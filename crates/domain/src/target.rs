use std::net::Ipv4Addr;

/// The fixed answer every accepted query is pointed at.
///
/// Built once from validated configuration; the engine never parses address
/// strings at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkholeTarget {
    pub address: Ipv4Addr,
    pub ttl: u32,
}

impl SinkholeTarget {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self { address, ttl }
    }
}
