//! Name transformation helpers used to generate idiomatic Rust code.
//==================================================================================NAME_HELPERS
/// Whether `name` is a lowercase `snake_case` identifier (`[a-z][a-z0-9_]*`).
pub(crate) fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Struct member name for a field. The suffix is appended when a keyword collision
/// occurs (e.g. suffix "field" turns `type` into `type_field`).
pub(crate) fn to_member_name(field: &str, suffix: &'static str) -> String {
    if RUST_KEYWORDS.contains(&field) {
        format!("{field}_{suffix}")
    } else {
        field.to_string()
    }
}

/// Convert `snake_case` into `SCREAMING_SNAKE_CASE` for const items.
pub(crate) fn to_const_name(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// Convert `snake_case` into `PascalCase`.
pub(crate) fn to_pascal_case(name: &str) -> String {
    let mut buffer = String::new();
    let mut capitalize_next = true;

    for c in name.chars() {
        match c {
            '_' | '-' | ' ' => capitalize_next = true,
            _ if capitalize_next => {
                buffer.push(c.to_ascii_uppercase());
                capitalize_next = false;
            }
            _ if c.is_ascii_digit() => {
                buffer.push(c);
                capitalize_next = true;
            }
            _ if c.is_alphanumeric() => buffer.push(c),
            _ => {}
        }
    }

    buffer
}

/// Reserved Rust keywords we must avoid when generating identifiers.
pub const RUST_KEYWORDS: &[&str] = &[
    // --- Strict Keywords ---
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while", "async", "await", "dyn",
    // --- Reserved Keywords ---
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "typeof", "unsized",
    "virtual", "yield", "try", "gen",
];
