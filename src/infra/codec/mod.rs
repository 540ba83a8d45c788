//! Value codec: framing of `(...)` tokens, numeric and string token parsers,
//! and the engine dispatching on a field's `Encoding`.
pub mod engine;
pub mod number;
pub mod string;
pub mod token;
pub mod traits;
