//! Sinkhole DNS Infrastructure Layer
pub mod dns;

pub use dns::server::UdpResponder;
