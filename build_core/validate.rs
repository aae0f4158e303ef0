//! Schema checks run before any code is generated. A schema that fails here
//! would produce an ambiguous or non-decodable message table.
use std::collections::HashSet;

use super::conf::{EXTENDED_ID_BITS, HEADER_LOOKUPS};
use super::domain::*;
use super::errors::BuildError;
use super::type_helpers::{map_sensor_kind, map_wire_type};
use crate::core::{MAX_FIELDS, MAX_FRAME_DATA};

/// Run every check against the parsed schema.
pub(crate) fn validate(config: &IoConfig) -> Result<(), BuildError> {
    validate_identifier_layout(config)?;
    for lookup in &config.lookups {
        validate_lookup(lookup)?;
    }
    for layout in &config.layouts {
        validate_layout(layout)?;
    }
    validate_messages(config)
}

/// Header lookups plus the message-ID field must fit an extended identifier.
fn validate_identifier_layout(config: &IoConfig) -> Result<(), BuildError> {
    let mut bits = config.message_id_bits;
    for name in HEADER_LOOKUPS {
        let lookup = config
            .lookup(name)
            .ok_or(BuildError::MissingLookup { name: *name })?;
        bits += lookup.bits;
    }
    if bits > EXTENDED_ID_BITS {
        return Err(BuildError::IdentifierTooWide { bits });
    }
    Ok(())
}

fn validate_lookup(lookup: &LookupEnum) -> Result<(), BuildError> {
    let invalid = |variant: &str, comment: &'static str| BuildError::InvalidLookup {
        lookup: lookup.name.clone(),
        variant: variant.to_string(),
        comment,
    };

    if lookup.values.is_empty() {
        return Err(invalid("", "lookup declares no values"));
    }
    if lookup.bits == 0 || lookup.bits > 8 {
        return Err(invalid("", "lookup width must be within 1..=8 bits"));
    }

    let mut names = HashSet::new();
    let mut values = HashSet::new();
    for v in &lookup.values {
        if v.value >= (1 << lookup.bits) {
            return Err(invalid(&v.name, "value does not fit the declared bits"));
        }
        if !names.insert(v.name.as_str()) {
            return Err(invalid(&v.name, "duplicate variant name"));
        }
        if !values.insert(v.value) {
            return Err(invalid(&v.name, "duplicate variant value"));
        }
    }
    Ok(())
}

fn validate_layout(layout: &Layout) -> Result<(), BuildError> {
    let invalid = |comment: &'static str| BuildError::InvalidLayout {
        kind: layout.kind.clone(),
        comment,
    };

    map_sensor_kind(&layout.kind)?;

    if layout.dlc as usize > MAX_FRAME_DATA {
        return Err(invalid("DLC exceeds the 8-byte classic CAN payload"));
    }
    if layout.fields.is_empty() {
        return Err(invalid("layout declares no fields"));
    }
    if layout.fields.len() > MAX_FIELDS {
        return Err(invalid("too many fields for a single reading"));
    }

    let mut ids = HashSet::new();
    for field in &layout.fields {
        let wire = map_wire_type(&layout.kind, field)?;
        if field.offset as usize + wire.size() > layout.dlc as usize {
            return Err(invalid("field overruns the DLC"));
        }
        if !(field.resolution.is_finite() && field.resolution > 0.0) {
            return Err(invalid("resolution must be a positive finite number"));
        }
        if !field.value_offset.is_finite() {
            return Err(invalid("value offset must be finite"));
        }
        if !ids.insert(field.id.as_str()) {
            return Err(invalid("duplicate field id"));
        }
    }
    Ok(())
}

/// Names and values must be unique, non-zero, and fit the message-ID field.
fn validate_messages(config: &IoConfig) -> Result<(), BuildError> {
    let mut kinds = HashSet::new();
    for layout in &config.layouts {
        if !kinds.insert(layout.kind.as_str()) {
            return Err(BuildError::InvalidLayout {
                kind: layout.kind.clone(),
                comment: "layout declared twice",
            });
        }
    }

    let max_value = if config.message_id_bits >= 32 {
        u32::MAX
    } else {
        (1u32 << config.message_id_bits) - 1
    };

    let mut names = HashSet::new();
    let mut values = HashSet::new();
    let mut variants = HashSet::new();
    for message in &config.messages {
        if message.value == 0 || message.value > max_value {
            return Err(BuildError::MessageIdOutOfRange {
                name: message.name.clone(),
                value: message.value,
                bits: config.message_id_bits,
            });
        }
        if !names.insert(message.name.as_str())
            || !values.insert(message.value)
            || !variants.insert(message.variant_name())
        {
            return Err(BuildError::DuplicateMessage {
                name: message.name.clone(),
                value: message.value,
            });
        }
        if config.layout(&message.kind).is_none() {
            return Err(BuildError::UnknownKind {
                kind: message.kind.clone(),
                comment: "no layout declared for this kind",
            });
        }
    }
    Ok(())
}
