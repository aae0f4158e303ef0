//! Typing helpers used while generating the message table.
use crate::build_core::{domain::Field, errors::BuildError};
use crate::core::{SensorKind, WireType};

/// Determine the `repr` integer type for an enumeration based on its max value.
pub(crate) fn generate_repr_attribute(max_value: u32) -> &'static str {
    match max_value {
        0..=255 => "u8",
        256..=65_535 => "u16",
        65_536..=4_294_967_295 => "u32",
    }
}

/// Resolve the wire type of a schema field.
pub(crate) fn map_wire_type(kind: &str, field: &Field) -> Result<WireType, BuildError> {
    WireType::from_schema(&field.wire_type).ok_or_else(|| BuildError::UnknownWireType {
        kind: kind.to_string(),
        field: field.id.clone(),
        wire_type: field.wire_type.clone(),
    })
}

/// Resolve a schema sensor kind.
pub(crate) fn map_sensor_kind(kind: &str) -> Result<SensorKind, BuildError> {
    SensorKind::from_schema(kind).ok_or_else(|| BuildError::UnknownKind {
        kind: kind.to_string(),
        comment: "not a supported sensor family",
    })
}

/// Render an `f64` as a Rust literal (`0.1` becomes `0.1f64`, `1` becomes `1.0f64`).
pub(crate) fn f64_literal(value: f64) -> String {
    format!("{:?}f64", value)
}
