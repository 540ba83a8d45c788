//! `korri-p1` library: declarative decoding of OBIS telegram fields (DSMR P1,
//! Warmtelink) in a `no_std` environment. The crate exposes the shared data types,
//! the token parsers and encoding engine, and the generated telegram profiles.
#![no_std]
//==================================================================================
/// Core data types shared by the build script and the codec engine.
pub mod core;
/// Token-level and field-level errors.
pub mod error;
/// Token framing, value parsers and the encoding-driven engine.
pub mod infra;
/// OBIS identifiers, typed fields and generated telegram profiles.
pub mod protocol;
//==================================================================================
