//! Low-level decoding infrastructure: token readers, value parsers and the
//! encoding-driven engine.
pub mod codec;
#[cfg(feature = "defmt")]
mod log_format;
