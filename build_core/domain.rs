//! Structures used to deserialize `io_config.json`.
use crate::build_core::name_helpers::to_pascal_case;
use serde::Deserialize;

//==================================================================================IO_CONFIG
#[derive(Debug, Deserialize)]
/// Root of the sensor/message schema.
pub(crate) struct IoConfig {
    #[serde(rename = "SchemaVersion")]
    pub(crate) schema_version: String,
    /// Width of the message-ID field inside the extended identifier.
    #[serde(rename = "MessageIdBits")]
    pub(crate) message_id_bits: u32,
    #[serde(rename = "Lookups")]
    pub(crate) lookups: Vec<LookupEnum>,
    #[serde(rename = "Layouts")]
    pub(crate) layouts: Vec<Layout>,
    #[serde(rename = "Messages")]
    pub(crate) messages: Vec<Message>,
}

impl IoConfig {
    /// Find the layout shared by every message of `kind`.
    pub(crate) fn layout(&self, kind: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.kind == kind)
    }

    /// Find a lookup by its schema name.
    pub(crate) fn lookup(&self, name: &str) -> Option<&LookupEnum> {
        self.lookups.iter().find(|l| l.name == name)
    }
}

//==============================================================LOOKUP_DOMAIN
#[derive(Debug, Deserialize, PartialEq, Eq, Hash, Clone)]
/// Small enumeration packed into the identifier header (priority, source...).
pub(crate) struct LookupEnum {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    /// Number of identifier bits reserved for the enumeration.
    #[serde(rename = "Bits")]
    pub(crate) bits: u32,
    #[serde(rename = "Values")]
    pub(crate) values: Vec<EnumValues>,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Hash, Clone)]
/// Elementary variant of a `LookupEnum`.
pub(crate) struct EnumValues {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Value")]
    pub(crate) value: u32,
}

impl LookupEnum {
    /// Rust type name of the generated enum.
    pub(crate) fn type_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Highest declared value, used to size the `repr`.
    pub(crate) fn max_value(&self) -> u32 {
        self.values.iter().map(|v| v.value).max().unwrap_or(0)
    }
}

//==============================================================LAYOUT_DOMAIN
#[derive(Debug, Deserialize)]
/// Payload layout shared by every message of one sensor kind.
pub(crate) struct Layout {
    /// Sensor kind, snake_case (`"temperature"`).
    #[serde(rename = "Kind")]
    pub(crate) kind: String,
    /// Payload width in bytes.
    #[serde(rename = "Dlc")]
    pub(crate) dlc: u8,
    #[serde(rename = "Fields")]
    pub(crate) fields: Vec<Field>,
}

#[derive(Debug, Deserialize)]
/// Field descriptor as written in the schema.
pub(crate) struct Field {
    /// 1. Identifier (snake_case).
    #[serde(rename = "Id")]
    pub(crate) id: String,
    /// 2. Display name.
    #[serde(rename = "Name")]
    pub(crate) name: String,
    /// 3. Wire encoding (`"u16"`, `"i32"`...).
    #[serde(rename = "WireType")]
    pub(crate) wire_type: String,
    /// 4. Byte offset from the start of the payload.
    #[serde(rename = "Offset")]
    pub(crate) offset: u8,
    /// 5. Physical units per raw count.
    #[serde(rename = "Resolution")]
    pub(crate) resolution: f64,
    /// 6. Physical value of raw zero.
    #[serde(rename = "ValueOffset", default)]
    pub(crate) value_offset: f64,
    /// 7. Physical unit.
    #[serde(rename = "Unit")]
    pub(crate) unit: String,
}

//==============================================================MESSAGE_DOMAIN
#[derive(Debug, Deserialize)]
/// One entry of the message-ID table.
pub(crate) struct Message {
    /// Stable schema name (`"TEMP_SENSOR_1"`).
    #[serde(rename = "Name")]
    pub(crate) name: String,
    /// Stable numeric identifier.
    #[serde(rename = "Value")]
    pub(crate) value: u32,
    /// Sensor kind selecting the payload layout.
    #[serde(rename = "Kind")]
    pub(crate) kind: String,
    #[serde(rename = "Description")]
    pub(crate) description: Option<String>,
}

impl Message {
    /// Variant name inside the generated `MessageId` enum.
    pub(crate) fn variant_name(&self) -> String {
        to_pascal_case(&self.name)
    }
}
