//! Name transformation helpers used to generate idiomatic Rust code.
//==================================================================================NAME_HELPERS
/// Convert a schema name (`SCREAMING_SNAKE_CASE` or `snake_case`) into `PascalCase`.
/// Digits are kept in place: `TEMP_SENSOR_1` becomes `TempSensor1`.
pub(crate) fn to_pascal_case(name: &str) -> String {
    let mut buffer = String::new();
    let mut capitalize_next = true;

    for c in name.chars() {
        match c {
            ' ' | '_' | '-' | '.' | '/' => {
                capitalize_next = true;
            }
            _ if buffer.is_empty() && c.is_ascii_digit() => {
                buffer.push_str("Val");
                buffer.push(c);
                capitalize_next = true;
            }
            _ if capitalize_next => {
                buffer.push(c.to_ascii_uppercase());
                capitalize_next = false;
            }
            _ if c.is_ascii_alphanumeric() => {
                buffer.push(c.to_ascii_lowercase());
            }
            _ => {}
        }
    }

    if RESERVED_TYPE_NAMES.contains(&buffer.as_str()) {
        buffer.push_str("Variant");
    }
    buffer
}

/// Convert a schema name into the `SCREAMING_SNAKE_CASE` used for generated statics.
pub(crate) fn to_static_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// PascalCase identifiers that cannot be used as enum variants.
const RESERVED_TYPE_NAMES: &[&str] = &["Self"];

