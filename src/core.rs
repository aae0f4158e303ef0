//! Defines the "data contract" between `build.rs` (the scribe) and
//! the payload codec (the interpreter).
//!
//! `build.rs` compiles `io_config.json` into static descriptors built from these
//! types. The `engine` module walks those descriptors to turn payload bytes into
//! physical values and back.

// Types in this module are primarily used by generated code.
#![allow(dead_code)]

/// Classic CAN payload capacity in bytes.
pub const MAX_FRAME_DATA: usize = 8;

/// Maximum number of fields a single message layout may declare.
pub const MAX_FIELDS: usize = 4;

/// Integer encoding of a field on the wire. Every multi-byte type is big-endian.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WireType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
}

impl WireType {
    /// Resolve the spelling used in `io_config.json` (`"u16"`, `"i32"`, ...).
    pub fn from_schema(name: &str) -> Option<Self> {
        match name {
            "u8" => Some(Self::U8),
            "i8" => Some(Self::I8),
            "u16" => Some(Self::U16),
            "i16" => Some(Self::I16),
            "u32" => Some(Self::U32),
            "i32" => Some(Self::I32),
            _ => None,
        }
    }

    /// Width of the field in bytes.
    pub const fn size(&self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
        }
    }

    /// Smallest raw value representable by the type.
    pub const fn min(&self) -> i64 {
        match self {
            Self::U8 | Self::U16 | Self::U32 => 0,
            Self::I8 => i8::MIN as i64,
            Self::I16 => i16::MIN as i64,
            Self::I32 => i32::MIN as i64,
        }
    }

    /// Largest raw value representable by the type.
    pub const fn max(&self) -> i64 {
        match self {
            Self::U8 => u8::MAX as i64,
            Self::I8 => i8::MAX as i64,
            Self::U16 => u16::MAX as i64,
            Self::I16 => i16::MAX as i64,
            Self::U32 => u32::MAX as i64,
            Self::I32 => i32::MAX as i64,
        }
    }
}

/// Physical family of the sensor that produced a message.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SensorKind {
    /// Flow meter (return line or dispense column).
    Flow,
    /// Line pressure transducer.
    Pressure,
    /// Combined pressure and temperature transducer (two fields).
    PressureTemperature,
    /// Temperature probe.
    Temperature,
    /// Tank level probe.
    Level,
    /// Load cell under a canister.
    LoadCell,
    /// Ultrasonic distance-to-surface sensor.
    UltrasonicLevel,
    /// Current sensor on a power rail.
    Current,
    /// Voltage sensor on a power rail.
    Voltage,
}

impl SensorKind {
    /// Resolve the snake_case spelling used in `io_config.json`.
    pub fn from_schema(name: &str) -> Option<Self> {
        match name {
            "flow" => Some(Self::Flow),
            "pressure" => Some(Self::Pressure),
            "pressure_temperature" => Some(Self::PressureTemperature),
            "temperature" => Some(Self::Temperature),
            "level" => Some(Self::Level),
            "load_cell" => Some(Self::LoadCell),
            "ultrasonic_level" => Some(Self::UltrasonicLevel),
            "current" => Some(Self::Current),
            "voltage" => Some(Self::Voltage),
            _ => None,
        }
    }

    /// Inverse of [`SensorKind::from_schema`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Pressure => "pressure",
            Self::PressureTemperature => "pressure_temperature",
            Self::Temperature => "temperature",
            Self::Level => "level",
            Self::LoadCell => "load_cell",
            Self::UltrasonicLevel => "ultrasonic_level",
            Self::Current => "current",
            Self::Voltage => "voltage",
        }
    }
}

/// Descriptor for a single payload field.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// 1. Field identifier (snake_case, e.g. `"temperature"`).
    pub id: &'static str,
    /// 2. Human-readable name.
    pub name: &'static str,
    /// 3. Wire encoding.
    pub wire: WireType,
    /// 4. Byte offset of the first (most significant) byte.
    pub offset: u8,
    /// 5. Physical units per raw count.
    pub resolution: f64,
    /// 6. Physical value of raw zero.
    pub value_offset: f64,
    /// 7. Physical unit (e.g. "bar", "degC").
    pub unit: &'static str,
}

impl FieldDescriptor {
    /// First byte past the field.
    pub const fn end(&self) -> usize {
        self.offset as usize + self.wire.size()
    }
}

/// Descriptor for an entire message layout.
#[derive(Debug)]
pub struct MessageDescriptor {
    /// 1. Message identifier (stable across schema revisions).
    pub id: u32,
    /// 2. Schema name, e.g. `"TEMP_SENSOR_1"`.
    pub name: &'static str,
    /// 3. User-facing description.
    pub description: &'static str,
    /// 4. Sensor family.
    pub kind: SensorKind,
    /// 5. Minimum payload length in bytes.
    pub dlc: u8,
    /// 6. Ordered list of field descriptors.
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    /// Position of a field within [`MessageDescriptor::fields`].
    pub fn field_index(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }
}
