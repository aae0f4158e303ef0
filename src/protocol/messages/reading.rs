//! Typed value produced by decoding a registered message.
use super::MessageId;
use crate::core::{FieldDescriptor, MessageDescriptor, SensorKind, MAX_FIELDS, MAX_FRAME_DATA};
use crate::error::{DecodeError, EncodeError};
use crate::infra::codec::engine::{decode_fields, encode_fields};
use crate::infra::codec::traits::{FromPayload, ToPayload};

/// Physical values of one message, tagged with the identifier they came from.
///
/// Holds one `f64` per field of the message layout, in descriptor order.
/// Single-field sensors expose their measurement through [`Reading::value`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    id: MessageId,
    values: [f64; MAX_FIELDS],
    len: usize,
}

impl Reading {
    /// Build a reading from physical values, one per layout field.
    pub fn new(id: MessageId, values: &[f64]) -> Result<Self, EncodeError> {
        let expected = id.descriptor().fields.len();
        if values.len() != expected {
            return Err(EncodeError::ValueCountMismatch {
                id,
                expected,
                actual: values.len(),
            });
        }
        let mut slots = [0f64; MAX_FIELDS];
        slots[..expected].copy_from_slice(values);
        Ok(Self {
            id,
            values: slots,
            len: expected,
        })
    }

    /// Identifier the reading is tagged with.
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn kind(&self) -> SensorKind {
        self.descriptor().kind
    }

    pub fn descriptor(&self) -> &'static MessageDescriptor {
        self.id.descriptor()
    }

    /// First (for most sensors, only) field.
    pub fn value(&self) -> f64 {
        self.values[0]
    }

    pub fn values(&self) -> &[f64] {
        &self.values[..self.len]
    }

    /// Value of the field named `id` (`"pressure"`, `"temperature"`...).
    pub fn field(&self, id: &str) -> Option<f64> {
        self.descriptor()
            .field_index(id)
            .and_then(|index| self.values().get(index).copied())
    }

    /// Pairs each field descriptor with its value.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDescriptor, f64)> + '_ {
        self.descriptor()
            .fields
            .iter()
            .zip(self.values().iter().copied())
    }
}

impl FromPayload for Reading {
    fn from_payload(id: MessageId, payload: &[u8]) -> Result<Self, DecodeError> {
        let descriptor = id.descriptor();
        let expected = descriptor.dlc as usize;
        let malformed = DecodeError::MalformedPayload {
            id,
            expected,
            actual: payload.len(),
        };
        if payload.len() > MAX_FRAME_DATA || payload.len() < expected {
            return Err(malformed);
        }

        let mut values = [0f64; MAX_FIELDS];
        let len =
            decode_fields(&payload[..expected], descriptor, &mut values).map_err(|_| malformed)?;
        Ok(Self { id, values, len })
    }
}

impl ToPayload for Reading {
    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        encode_fields(self.values(), self.descriptor(), buffer)
    }

    fn payload_len(&self) -> usize {
        self.descriptor().dlc as usize
    }
}
