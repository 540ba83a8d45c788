//! Telegram-level components: OBIS identifiers, field storage, and the generated
//! telegram profiles.
pub mod field;
pub mod fields;
pub mod obis;
pub mod slots;
