//! Sinkhole DNS Application Layer
pub mod engine;

pub use engine::{transform, MessageBuf};
