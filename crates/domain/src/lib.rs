//! Sinkhole DNS Domain Layer
pub mod config;
pub mod protocol;
pub mod target;

pub use config::{CliOverrides, Config, ConfigError};
pub use protocol::Rcode;
pub use target::SinkholeTarget;
