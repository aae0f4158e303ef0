//! Heartbeat publishing: frame count, identifiers, and pacing.
mod helpers;

use embassy_time::Duration;
use helpers::{MockCanBus, MockTimer};
use rig_can::error::{EncodeError, SendReadingError};
use rig_can::protocol::lookups::{Destination, Source};
use rig_can::protocol::messages::{MessageId, Reading};
use rig_can::protocol::registry::decode;
use rig_can::protocol::service::heartbeat::{Heartbeat, HeartbeatEntry};
use rig_can::protocol::transport::can_id::FrameHeader;
use rig_can::protocol::transport::{DEFAULT_HEARTBEAT_PERIOD, HEARTBEAT_INTER_FRAME_DELAY};

fn snapshot() -> [HeartbeatEntry; 3] {
    let fuel = |destination| FrameHeader::new(Source::FuelDispense, destination);
    [
        (
            fuel(Destination::Pump1),
            Reading::new(MessageId::FlowReturn, &[7.5]).unwrap(),
        ),
        (
            fuel(Destination::Pump2),
            Reading::new(MessageId::PressureSensor2, &[120.0, 35.5]).unwrap(),
        ),
        (
            FrameHeader::new(Source::PowerModule, Destination::DispenseValve),
            Reading::new(MessageId::CurrentSensor3, &[-12.25]).unwrap(),
        ),
    ]
}

#[tokio::test]
/// One frame per reading per round, headers preserved, readings intact.
async fn heartbeat_publishes_every_round() {
    let (dut_bus, host_bus) = MockCanBus::create_pair();
    let timer = MockTimer::default();
    let entries = snapshot();

    let mut heartbeat = Heartbeat::new(dut_bus, timer.clone())
        .with_period(Duration::from_millis(5))
        .with_inter_frame_delay(Duration::from_millis(1));
    let rounds = heartbeat.run(&entries, Some(2)).await.unwrap();
    assert_eq!(rounds, 2);

    let frames = host_bus.drain().await;
    assert_eq!(frames.len(), 2 * entries.len());
    for (frame, (header, reading)) in frames.iter().zip(entries.iter().cycle()) {
        assert_eq!(frame.id.source(), Ok(header.source));
        assert_eq!(frame.id.destination(), Ok(header.destination));
        assert_eq!(frame.id.priority(), Ok(header.priority));
        assert_eq!(decode(frame).unwrap(), *reading);
    }

    // Two inter-frame gaps per round, one period between the rounds.
    let ms = Duration::from_millis;
    assert_eq!(
        timer.delays(),
        vec![ms(1), ms(1), ms(5), ms(1), ms(1)]
    );
}

#[tokio::test]
async fn heartbeat_defaults() {
    let (dut_bus, _host_bus) = MockCanBus::create_pair();
    let heartbeat = Heartbeat::new(dut_bus, MockTimer::default());
    assert_eq!(heartbeat.period(), DEFAULT_HEARTBEAT_PERIOD);
    assert!(HEARTBEAT_INTER_FRAME_DELAY < DEFAULT_HEARTBEAT_PERIOD);
}

#[tokio::test]
async fn zero_rounds_sends_nothing() {
    let (dut_bus, host_bus) = MockCanBus::create_pair();
    let mut heartbeat = Heartbeat::new(dut_bus, MockTimer::default());
    assert_eq!(heartbeat.run(&snapshot(), Some(0)).await.unwrap(), 0);
    assert!(host_bus.drain().await.is_empty());
}

#[tokio::test]
/// A reading that cannot be encoded aborts the round after the frames before it.
async fn unencodable_reading_aborts_round() {
    let (dut_bus, host_bus) = MockCanBus::create_pair();
    let mut entries = snapshot();
    entries[1].1 = Reading::new(MessageId::PressureSensor2, &[-1.0, 20.0]).unwrap();

    let mut heartbeat = Heartbeat::new(dut_bus, MockTimer::default())
        .with_inter_frame_delay(Duration::from_millis(0));
    let result = heartbeat.publish_round(&entries).await;
    assert!(matches!(
        result,
        Err(SendReadingError::Encode(EncodeError::ValueOutOfRange {
            field: "pressure",
            ..
        }))
    ));
    assert_eq!(host_bus.drain().await.len(), 1);
}
