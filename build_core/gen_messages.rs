//! Generate the `MessageId` table and the static payload descriptors.
use std::fmt::Write;

use super::domain::*;
use super::errors::*;
use super::name_helpers::*;
use super::type_helpers::*;

/// Emit the message table for every entry of the schema, in schema order.
pub(crate) fn run_messages_gen(config: &IoConfig) -> Result<String, BuildError> {
    let mut buffer_message_code = String::new();

    buffer_message_code.push_str(&generate_header_constants(config)?);
    for layout in &config.layouts {
        buffer_message_code.push_str(&generate_layout_fields(layout)?);
    }
    for message in &config.messages {
        buffer_message_code.push_str(&generate_descriptor(config, message)?);
    }
    buffer_message_code.push_str(&generate_enum_definition(config)?);
    buffer_message_code.push_str(&generate_enum_impl(config)?);
    buffer_message_code.push_str(&generate_conversions(config)?);

    Ok(buffer_message_code)
}

//==================================================================================CONSTANTS
fn generate_header_constants(config: &IoConfig) -> Result<String, BuildError> {
    let mut buffer = String::new();
    writeln!(buffer, "/// Version of `io_config.json` the table was compiled from.")?;
    writeln!(
        buffer,
        "pub const SCHEMA_VERSION: &str = {:?};",
        config.schema_version
    )?;
    writeln!(buffer, "/// Width of the message-ID field in the CAN identifier.")?;
    writeln!(
        buffer,
        "pub const MESSAGE_ID_BITS: u32 = {};",
        config.message_id_bits
    )?;
    writeln!(buffer, "/// Number of registered messages.")?;
    writeln!(
        buffer,
        "pub const MESSAGE_COUNT: usize = {};",
        config.messages.len()
    )?;
    writeln!(buffer)?;
    Ok(buffer)
}

//==================================================================================LAYOUTS
/// One `static` field array per sensor kind; messages of the same kind share it.
fn generate_layout_fields(layout: &Layout) -> Result<String, BuildError> {
    let mut buffer = String::new();
    let static_name = format!("{}_FIELDS", to_static_name(&layout.kind));

    writeln!(
        buffer,
        "static {}: [FieldDescriptor; {}] = [",
        static_name,
        layout.fields.len()
    )?;
    for field in &layout.fields {
        let wire = map_wire_type(&layout.kind, field)?;
        writeln!(buffer, "\tFieldDescriptor {{")?;
        writeln!(buffer, "\t\tid: {:?},", field.id)?;
        writeln!(buffer, "\t\tname: {:?},", field.name)?;
        writeln!(buffer, "\t\twire: WireType::{:?},", wire)?;
        writeln!(buffer, "\t\toffset: {},", field.offset)?;
        writeln!(buffer, "\t\tresolution: {},", f64_literal(field.resolution))?;
        writeln!(
            buffer,
            "\t\tvalue_offset: {},",
            f64_literal(field.value_offset)
        )?;
        writeln!(buffer, "\t\tunit: {:?},", field.unit)?;
        writeln!(buffer, "\t}},")?;
    }
    writeln!(buffer, "];")?;
    writeln!(buffer)?;
    Ok(buffer)
}

//==================================================================================DESCRIPTORS
fn generate_descriptor(config: &IoConfig, message: &Message) -> Result<String, BuildError> {
    let mut buffer = String::new();
    let layout = config
        .layout(&message.kind)
        .ok_or_else(|| BuildError::UnknownKind {
            kind: message.kind.clone(),
            comment: "no layout declared for this kind",
        })?;
    let kind = map_sensor_kind(&layout.kind)?;
    let description = message.description.as_deref().unwrap_or("");

    writeln!(
        buffer,
        "static {}: MessageDescriptor = MessageDescriptor {{",
        to_static_name(&message.name)
    )?;
    writeln!(buffer, "\tid: {},", message.value)?;
    writeln!(buffer, "\tname: {:?},", message.name)?;
    writeln!(buffer, "\tdescription: {:?},", description)?;
    writeln!(buffer, "\tkind: SensorKind::{:?},", kind)?;
    writeln!(buffer, "\tdlc: {},", layout.dlc)?;
    writeln!(
        buffer,
        "\tfields: &{}_FIELDS,",
        to_static_name(&layout.kind)
    )?;
    writeln!(buffer, "}};")?;
    writeln!(buffer)?;
    Ok(buffer)
}

//==================================================================================GENERATE_ENUM_DEFINITION
fn generate_enum_definition(config: &IoConfig) -> Result<String, BuildError> {
    let mut buffer = String::new();

    writeln!(buffer, "/// Registered CAN message identifiers.")?;
    writeln!(buffer, "///")?;
    writeln!(
        buffer,
        "/// Discriminants are the wire values and never change between schema revisions."
    )?;
    writeln!(buffer, "#[repr(u32)]")?;
    writeln!(
        buffer,
        "#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]"
    )?;
    writeln!(
        buffer,
        "#[cfg_attr(feature = \"defmt\", derive(defmt::Format))]"
    )?;
    writeln!(buffer, "pub enum MessageId {{")?;
    for message in &config.messages {
        if let Some(description) = &message.description {
            writeln!(buffer, "\t/// {}", description)?;
        }
        writeln!(buffer, "\t{} = {},", message.variant_name(), message.value)?;
    }
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    Ok(buffer)
}

//==================================================================================GENERATE_ENUM_IMPL
fn generate_enum_impl(config: &IoConfig) -> Result<String, BuildError> {
    let mut buffer = String::new();

    writeln!(buffer, "impl MessageId {{")?;

    // ALL
    writeln!(buffer, "\t/// Every registered identifier, in schema order.")?;
    writeln!(buffer, "\tpub const ALL: [MessageId; MESSAGE_COUNT] = [")?;
    for message in &config.messages {
        writeln!(buffer, "\t\tMessageId::{},", message.variant_name())?;
    }
    writeln!(buffer, "\t];")?;
    writeln!(buffer)?;

    // value
    writeln!(buffer, "\t/// Numeric wire value.")?;
    writeln!(buffer, "\tpub const fn value(self) -> u32 {{")?;
    writeln!(buffer, "\t\tself as u32")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;

    // name
    writeln!(buffer, "\t/// Stable schema name (`\"TEMP_SENSOR_1\"`).")?;
    writeln!(buffer, "\tpub const fn name(self) -> &'static str {{")?;
    writeln!(buffer, "\t\tmatch self {{")?;
    for message in &config.messages {
        writeln!(
            buffer,
            "\t\t\tSelf::{} => {:?},",
            message.variant_name(),
            message.name
        )?;
    }
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;

    // from_name
    writeln!(buffer, "\t/// Resolve a schema name.")?;
    writeln!(buffer, "\tpub fn from_name(name: &str) -> Option<Self> {{")?;
    writeln!(buffer, "\t\tmatch name {{")?;
    for message in &config.messages {
        writeln!(
            buffer,
            "\t\t\t{:?} => Some(Self::{}),",
            message.name,
            message.variant_name()
        )?;
    }
    writeln!(buffer, "\t\t\t_ => None,")?;
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer)?;

    // descriptor
    writeln!(buffer, "\t/// Static payload layout of the message.")?;
    writeln!(
        buffer,
        "\tpub fn descriptor(self) -> &'static MessageDescriptor {{"
    )?;
    writeln!(buffer, "\t\tmatch self {{")?;
    for message in &config.messages {
        writeln!(
            buffer,
            "\t\t\tSelf::{} => &{},",
            message.variant_name(),
            to_static_name(&message.name)
        )?;
    }
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;
    Ok(buffer)
}

//==================================================================================CONVERSIONS
fn generate_conversions(config: &IoConfig) -> Result<String, BuildError> {
    let mut buffer = String::new();

    writeln!(buffer, "impl From<MessageId> for u32 {{")?;
    writeln!(buffer, "\tfn from(id: MessageId) -> Self {{")?;
    writeln!(buffer, "\t\tid as u32")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    writeln!(buffer, "impl TryFrom<u32> for MessageId {{")?;
    writeln!(buffer, "\ttype Error = DecodeError;")?;
    writeln!(
        buffer,
        "\tfn try_from(value: u32) -> Result<Self, Self::Error> {{"
    )?;
    writeln!(buffer, "\t\tmatch value {{")?;
    for message in &config.messages {
        writeln!(
            buffer,
            "\t\t\t{} => Ok(MessageId::{}),",
            message.value,
            message.variant_name()
        )?;
    }
    writeln!(
        buffer,
        "\t\t\tother => Err(DecodeError::UnknownMessageId {{ id: other }}),"
    )?;
    writeln!(buffer, "\t\t}}")?;
    writeln!(buffer, "\t}}")?;
    writeln!(buffer, "}}")?;
    writeln!(buffer)?;

    writeln!(
        buffer,
        "/// Every descriptor, indexed like [`MessageId::ALL`]."
    )?;
    writeln!(
        buffer,
        "pub static MESSAGE_DESCRIPTORS: [&MessageDescriptor; MESSAGE_COUNT] = ["
    )?;
    for message in &config.messages {
        writeln!(buffer, "\t&{},", to_static_name(&message.name))?;
    }
    writeln!(buffer, "];")?;
    Ok(buffer)
}
