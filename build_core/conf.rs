//! Paths and constants used during build-time code generation.
//==================================================================================CONF
/// Sensor and message schema shipped with the crate.
pub(crate) const IO_CONFIG_PATH: &str = "build_core/var/io_config.json";
/// Environment variable pointing at a replacement schema.
pub(crate) const IO_CONFIG_ENV: &str = "RIG_CAN_IO_CONFIG_PATH";
/// Generated message table file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_MESSAGE_FILE_NAME: &str = "generated_messages.rs";
/// Generated lookup enumeration file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_ENUM_FILE_NAME: &str = "generated_lookups.rs";
/// Width of an extended CAN identifier.
pub(crate) const EXTENDED_ID_BITS: u32 = 29;
/// Lookups the identifier layout depends on, from most to least significant.
pub(crate) const HEADER_LOOKUPS: &[&str] = &["PRIORITY", "SOURCE", "DESTINATION"];
