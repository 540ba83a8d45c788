//! Telegram profiles generated at build time from `build_core/var/field_manifest.json`.
//! Each profile exposes a module of `FieldDef` consts (e.g. `warmtelink::THERMAL_DELIVERED`)
//! and a struct implementing `FieldSet` (e.g. `WarmtelinkTelegram`).
include!(concat!(env!("OUT_DIR"), "/generated_fields.rs"));
