//! Descriptor-driven payload engine. It walks the static `MessageDescriptor`
//! of a message and converts between wire integers and physical values.
//!
//! Physical value = `raw * resolution + value_offset`, computed in `f64` so
//! every raw count of a 32-bit field decodes to a value that encodes back to
//! the same count. Decimal resolutions (`0.1`, `0.001`) divide by the whole
//! number of counts per unit: `300` at `0.1` decodes to exactly `30.0`.
use super::bytes::{ByteReader, ByteWriter};
use crate::core::{FieldDescriptor, MessageDescriptor};
use crate::error::{ByteReaderError, ByteWriterError, EncodeError};

/// Decode every field of `descriptor` from `payload` into `values`.
///
/// # Parameters
/// * `payload` – received bytes; only the first `dlc` bytes are looked at
/// * `descriptor` – static layout of the message
/// * `values` – output slots, one per field, in descriptor order
///
/// # Return value
/// Number of values written. A payload shorter than a field's end fails with
/// [`ByteReaderError::OutOfBounds`].
pub fn decode_fields(
    payload: &[u8],
    descriptor: &'static MessageDescriptor,
    values: &mut [f64],
) -> Result<usize, ByteReaderError> {
    let mut reader = ByteReader::new(payload);
    let mut written = 0;

    for (field, slot) in descriptor.fields.iter().zip(values.iter_mut()) {
        reader.seek(field.offset as usize)?;
        let raw = reader.read_raw(field.wire)?;
        *slot = to_physical(raw, field);
        written += 1;
    }

    Ok(written)
}

/// Encode `values` into `buffer` following `descriptor`.
///
/// The first `dlc` bytes of `buffer` are cleared before the fields are laid
/// down, so bytes not covered by a field go out as zero.
///
/// # Return value
/// Number of payload bytes (always the descriptor DLC).
pub fn encode_fields(
    values: &[f64],
    descriptor: &'static MessageDescriptor,
    buffer: &mut [u8],
) -> Result<usize, EncodeError> {
    let dlc = descriptor.dlc as usize;
    let available = buffer.len();
    let payload = buffer.get_mut(..dlc).ok_or(EncodeError::Writer {
        err: ByteWriterError::OutOfBounds {
            asked: dlc,
            available,
        },
    })?;
    payload.fill(0);

    let mut writer = ByteWriter::new(payload);
    for (field, value) in descriptor.fields.iter().zip(values.iter()) {
        let raw = to_raw(*value, field)?;
        writer
            .seek(field.offset as usize)
            .map_err(|err| EncodeError::Writer { err })?;
        writer
            .write_raw(field.wire, raw)
            .map_err(|err| EncodeError::Writer { err })?;
    }

    Ok(dlc)
}

/// Whole number of raw counts per physical unit, when there is one.
fn counts_per_unit(resolution: f64) -> Option<f64> {
    let counts = 1.0 / resolution;
    let whole = counts as i64 as f64;
    (whole >= 1.0 && whole == counts).then_some(whole)
}

/// Scale a raw wire integer into its physical value.
pub fn to_physical(raw: i64, field: &FieldDescriptor) -> f64 {
    let scaled = match counts_per_unit(field.resolution) {
        Some(counts) => raw as f64 / counts,
        None => raw as f64 * field.resolution,
    };
    scaled + field.value_offset
}

/// Scale a physical value back to its wire integer.
///
/// Rounds half away from zero and fails with [`EncodeError::ValueOutOfRange`]
/// when the value is NaN or the result does not fit the field's wire type.
pub fn to_raw(value: f64, field: &FieldDescriptor) -> Result<i64, EncodeError> {
    let out_of_range = EncodeError::ValueOutOfRange {
        field: field.id,
        value,
    };
    if value.is_nan() {
        return Err(out_of_range);
    }

    let shifted = value - field.value_offset;
    let scaled = match counts_per_unit(field.resolution) {
        Some(counts) => shifted * counts,
        None => shifted / field.resolution,
    };
    // `as` truncates toward zero (and saturates on infinities).
    let raw = if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    };

    if raw < field.wire.min() || raw > field.wire.max() {
        return Err(out_of_range);
    }
    Ok(raw)
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
