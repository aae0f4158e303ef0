//! Tests for the descriptor-driven payload engine.
use super::*;
use crate::core::{SensorKind, WireType, MAX_FIELDS};
use crate::protocol::messages::MessageId;

static OFFSET_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor {
        id: "coarse",
        name: "Coarse",
        wire: WireType::U8,
        offset: 0,
        resolution: 1.0,
        value_offset: -40.0,
        unit: "degC",
    },
    FieldDescriptor {
        id: "fine",
        name: "Fine",
        wire: WireType::I16,
        offset: 2,
        resolution: 0.5,
        value_offset: 0.0,
        unit: "degC",
    },
];

/// Synthetic layout with a value offset and a padding byte at index 1.
static OFFSET_MESSAGE: MessageDescriptor = MessageDescriptor {
    id: 99,
    name: "SYNTHETIC",
    description: "",
    kind: SensorKind::Temperature,
    dlc: 4,
    fields: &OFFSET_FIELDS,
};

#[test]
/// The reference fixture: 0x012C tenths of a degree is 30.0.
fn test_decode_temperature_fixture() {
    let mut values = [0f64; MAX_FIELDS];
    let count = decode_fields(
        &[0x01, 0x2C],
        MessageId::TempSensor1.descriptor(),
        &mut values,
    )
    .unwrap();
    assert_eq!(count, 1);
    assert_eq!(values[0], 30.0);
}

#[test]
/// Signed temperatures below zero keep their sign.
fn test_decode_negative_temperature() {
    let mut values = [0f64; MAX_FIELDS];
    decode_fields(&[0xFF, 0x38], MessageId::TempSensor2.descriptor(), &mut values).unwrap();
    assert_eq!(values[0], -20.0);
}

#[test]
/// Two-field layout reads both fields at their own offsets.
fn test_decode_pressure_temperature() {
    let mut values = [0f64; MAX_FIELDS];
    let count = decode_fields(
        &[0x00, 0x7B, 0x00, 0xD2],
        MessageId::PressureSensor2.descriptor(),
        &mut values,
    )
    .unwrap();
    assert_eq!(count, 2);
    assert_eq!(values[0], 12.3);
    assert_eq!(values[1], 21.0);
}

#[test]
fn test_decode_applies_value_offset() {
    let mut values = [0f64; MAX_FIELDS];
    decode_fields(&[0x28, 0xAA, 0xFF, 0xFC], &OFFSET_MESSAGE, &mut values).unwrap();
    assert_eq!(values[0], 0.0);
    assert_eq!(values[1], -2.0);
}

#[test]
/// A payload shorter than the layout is reported, not zero-filled.
fn test_decode_short_payload() {
    let mut values = [0f64; MAX_FIELDS];
    let result = decode_fields(
        &[0x00, 0x7B, 0x00],
        MessageId::PressureSensor2.descriptor(),
        &mut values,
    );
    assert_eq!(
        result,
        Err(ByteReaderError::OutOfBounds {
            asked: 2,
            available: 1
        })
    );
}

//==================================================================================ENCODE
#[test]
fn test_encode_temperature_fixture() {
    let mut buffer = [0xAAu8; 8];
    let len = encode_fields(&[30.0], MessageId::TempSensor1.descriptor(), &mut buffer).unwrap();
    assert_eq!(len, 2);
    assert_eq!(&buffer[..len], &[0x01, 0x2C]);
    // Bytes past the DLC are left alone.
    assert_eq!(buffer[2], 0xAA);
}

#[test]
/// Padding bytes inside the DLC are cleared.
fn test_encode_clears_padding() {
    let mut buffer = [0xAAu8; 4];
    encode_fields(&[0.0, -2.0], &OFFSET_MESSAGE, &mut buffer).unwrap();
    assert_eq!(buffer, [0x28, 0x00, 0xFF, 0xFC]);
}

#[test]
fn test_encode_load_cell_i32() {
    let mut buffer = [0u8; 8];
    let len = encode_fields(&[-1.5], MessageId::LoadCell1.descriptor(), &mut buffer).unwrap();
    assert_eq!(&buffer[..len], &(-1500i32).to_be_bytes());
}

#[test]
fn test_encode_rejects_out_of_range() {
    let mut buffer = [0u8; 8];
    // u16 at 0.01 V tops out at 655.35 V.
    assert_eq!(
        encode_fields(&[700.0], MessageId::VoltageSensor1.descriptor(), &mut buffer),
        Err(EncodeError::ValueOutOfRange {
            field: "value",
            value: 700.0
        })
    );
    // Unsigned fields refuse negatives.
    assert!(encode_fields(&[-0.1], MessageId::FlowReturn.descriptor(), &mut buffer).is_err());
    assert!(
        encode_fields(&[f64::NAN], MessageId::TempSensor1.descriptor(), &mut buffer).is_err()
    );
    assert!(encode_fields(
        &[f64::INFINITY],
        MessageId::TempSensor1.descriptor(),
        &mut buffer
    )
    .is_err());
}

#[test]
/// A buffer smaller than the DLC is a writer error.
fn test_encode_buffer_too_small() {
    let mut buffer = [0u8; 1];
    assert_eq!(
        encode_fields(&[1.0], MessageId::TempSensor1.descriptor(), &mut buffer),
        Err(EncodeError::Writer {
            err: ByteWriterError::OutOfBounds {
                asked: 2,
                available: 1
            }
        })
    );
}

//==================================================================================SCALING
#[test]
/// Rounding is half away from zero on both sides.
fn test_to_raw_rounding() {
    let field = &OFFSET_FIELDS[1];
    assert_eq!(to_raw(1.25, field).unwrap(), 3);
    assert_eq!(to_raw(-1.25, field).unwrap(), -3);
    assert_eq!(to_raw(1.2, field).unwrap(), 2);
}

#[test]
fn test_to_raw_bounds_are_inclusive() {
    let field = &MessageId::TempSensor1.descriptor().fields[0];
    assert_eq!(to_raw(3276.7, field).unwrap(), i16::MAX as i64);
    assert_eq!(to_raw(-3276.8, field).unwrap(), i16::MIN as i64);
    assert!(to_raw(3276.8, field).is_err());
}

#[test]
fn test_to_physical_scales_every_kind() {
    for id in MessageId::ALL {
        for field in id.descriptor().fields {
            assert_eq!(to_physical(0, field), field.value_offset);
        }
    }
    let flow = &MessageId::FlowReturn.descriptor().fields[0];
    assert_eq!(to_physical(1234, flow), 12.34);
}

#[test]
/// Resolutions that are not a whole fraction of a unit scale by multiplying.
fn test_scaling_with_fractional_counts_per_unit() {
    let field = FieldDescriptor {
        id: "value",
        name: "Value",
        wire: WireType::U16,
        offset: 0,
        resolution: 0.4,
        value_offset: 0.0,
        unit: "",
    };
    assert_eq!(counts_per_unit(field.resolution), None);
    assert_eq!(counts_per_unit(0.1), Some(10.0));
    assert_eq!(counts_per_unit(2.0), None);
    let physical = to_physical(5, &field);
    assert!(physical > 1.999_999 && physical < 2.000_001);
    assert_eq!(to_raw(physical, &field).unwrap(), 5);
}
