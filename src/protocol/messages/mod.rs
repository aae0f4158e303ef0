//! Message table generated from `io_config.json`.
//! `generated_messages.rs` is produced at build time and exposes the
//! `MessageId` enum, its conversions and one static descriptor per message.
include!(concat!(env!("OUT_DIR"), "/generated_messages.rs"));
use crate::core::{FieldDescriptor, MessageDescriptor, SensorKind, WireType};
use crate::error::DecodeError;

mod reading;
pub use reading::Reading;
