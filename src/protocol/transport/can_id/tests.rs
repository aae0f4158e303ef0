//! Unit tests for the `CanId` accessors and builder.
use super::*;

//==================================================================================CAN_ID
#[test]
/// Extracts every header field from a raw identifier.
fn test_accessors() {
    let can_id = CanId(0x0A20_0006);
    assert_eq!(can_id.priority(), Ok(Priority::Realtime));
    assert_eq!(can_id.source(), Ok(Source::FuelDispense));
    assert_eq!(can_id.destination(), Ok(Destination::Pump2));
    assert_eq!(can_id.message_id_raw(), 6);
    assert_eq!(can_id.message_id(), Ok(MessageId::TempSensor1));
    assert!(!can_id.is_standard());
}

#[test]
/// A bare message ID has an all-zero header.
fn test_bare_id() {
    let can_id = CanId::bare(MessageId::VoltageSensor3);
    assert_eq!(can_id.0, 18);
    assert!(can_id.is_standard());
    assert_eq!(can_id.priority(), Ok(Priority::Critical));
    assert_eq!(can_id.source(), Ok(Source::SystemManager));
    assert_eq!(can_id.destination(), Ok(Destination::Pump1));
}

#[test]
fn test_is_valid_stops_at_29_bits() {
    assert!(CanId(0x1FFF_FFFF).is_valid());
    assert!(CanId::bare(MessageId::FlowReturn).is_valid());
    assert!(!CanId(0x2000_0000).is_valid());
    assert!(!CanId(0xE000_0006).is_valid());
}

#[test]
/// Header values the schema does not declare are reported with their raw value.
fn test_undeclared_header_values() {
    let can_id = CanId::from_parts(3, 3, 15, 1).unwrap();
    assert_eq!(can_id.priority(), Err(InvalidPriority(3)));
    assert_eq!(can_id.source(), Err(InvalidSource(3)));
    assert_eq!(can_id.destination(), Err(InvalidDestination(15)));
    assert_eq!(can_id.0, 0x1FE0_0001);
}

#[test]
fn test_unknown_message_id() {
    assert_eq!(
        CanId(99).message_id(),
        Err(DecodeError::UnknownMessageId { id: 99 })
    );
}

//==================================================================================FROM_PARTS
#[test]
/// Each field is checked against its own width.
fn test_from_parts_overflow() {
    assert_eq!(
        CanId::from_parts(4, 0, 0, 1),
        Err(CanIdBuildError::PriorityOverflow(4))
    );
    assert_eq!(
        CanId::from_parts(0, 4, 0, 1),
        Err(CanIdBuildError::SourceOverflow(4))
    );
    assert_eq!(
        CanId::from_parts(0, 0, 16, 1),
        Err(CanIdBuildError::DestinationOverflow(16))
    );
    assert_eq!(
        CanId::from_parts(0, 0, 0, 0),
        Err(CanIdBuildError::InvalidMessageId(0))
    );
    assert_eq!(
        CanId::from_parts(0, 0, 0, 1 << 21),
        Err(CanIdBuildError::InvalidMessageId(1 << 21))
    );
}

#[test]
/// The composite identifier never spills past bit 28.
fn test_from_parts_fits_29_bits() {
    let can_id = CanId::from_parts(3, 3, 15, (1 << 21) - 1).unwrap();
    assert_eq!(can_id.0, 0x1FFF_FFFF);
}

//==================================================================================CAN_ID_BUILDER
#[test]
fn test_builder() {
    let can_id = CanId::builder(MessageId::TempSensor1)
        .with_priority(Priority::Realtime)
        .from_source(Source::FuelDispense)
        .to_destination(Destination::Pump2)
        .build()
        .expect("CanId must build");
    assert_eq!(can_id, CanId(0x0A20_0006));
}

#[test]
/// Without overrides the builder uses the default header.
fn test_builder_defaults() {
    let can_id = CanId::builder(MessageId::FlowReturn).build().unwrap();
    assert_eq!(can_id.priority(), Ok(DEFAULT_PRIORITY));
    assert_eq!(can_id.source(), Ok(Source::SystemManager));
    assert_eq!(can_id.destination(), Ok(Destination::Pump1));
    assert_eq!(can_id.message_id(), Ok(MessageId::FlowReturn));
}

#[test]
fn test_frame_header_id_for() {
    let header = FrameHeader::new(Source::PowerModule, Destination::PowerModule)
        .with_priority(Priority::Critical);
    let can_id = header.id_for(MessageId::CurrentSensor2).unwrap();
    assert_eq!(can_id.source(), Ok(Source::PowerModule));
    assert_eq!(can_id.destination(), Ok(Destination::PowerModule));
    assert_eq!(can_id.priority(), Ok(Priority::Critical));
    assert_eq!(can_id.message_id_raw(), 14);
}

#[test]
/// Every declared header variant round-trips through the identifier.
fn test_every_header_variant_round_trips() {
    for priority in Priority::ALL {
        for source in Source::ALL {
            for destination in Destination::ALL {
                let header = FrameHeader {
                    priority,
                    source,
                    destination,
                };
                let can_id = header.id_for(MessageId::LevelSensor1).unwrap();
                assert_eq!(can_id.priority(), Ok(priority));
                assert_eq!(can_id.source(), Ok(source));
                assert_eq!(can_id.destination(), Ok(destination));
                assert_eq!(can_id.message_id(), Ok(MessageId::LevelSensor1));
            }
        }
    }
}
