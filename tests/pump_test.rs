//! Reading pump and the `ReadingReceiver`/`ReadingSender` bus extensions.
mod helpers;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use helpers::MockCanBus;
use rig_can::error::{DecodeError, PumpError, ReceiveReadingError};
use rig_can::protocol::lookups::{Destination, Source};
use rig_can::protocol::messages::{MessageId, Reading};
use rig_can::protocol::service::pump::{PumpStats, ReadingPump};
use rig_can::protocol::transport::can_frame::CanFrame;
use rig_can::protocol::transport::can_id::{CanId, FrameHeader};
use rig_can::protocol::transport::traits::can_bus::CanBus;
use rig_can::protocol::transport::traits::reading_receiver::ReadingReceiver;
use rig_can::protocol::transport::traits::reading_sender::ReadingSender;
use static_cell::StaticCell;
use tokio::time::{timeout, Duration};

static READINGS: StaticCell<Channel<CriticalSectionRawMutex, Reading, 8>> = StaticCell::new();
static STOP: StaticCell<Signal<CriticalSectionRawMutex, ()>> = StaticCell::new();
static ONCE_READINGS: StaticCell<Channel<CriticalSectionRawMutex, Reading, 2>> =
    StaticCell::new();

fn frame(id: u32, payload: &[u8]) -> CanFrame {
    CanFrame::new(CanId(id), payload).unwrap()
}

#[tokio::test]
/// Valid frames reach the channel in order; bad ones are counted and skipped.
async fn pump_forwards_and_counts() {
    let readings: &'static Channel<CriticalSectionRawMutex, Reading, 8> =
        READINGS.init(Channel::new());
    let stop: &'static Signal<CriticalSectionRawMutex, ()> = STOP.init(Signal::new());
    let (dut_bus, mut host_bus) = MockCanBus::create_pair();

    host_bus.send(&frame(6, &[0x01, 0x2C])).await.unwrap();
    host_bus.send(&frame(99, &[0x00, 0x00])).await.unwrap();
    host_bus.send(&frame(4, &[])).await.unwrap();
    host_bus.send(&frame(16, &[0x09, 0x60])).await.unwrap();

    let mut pump = ReadingPump::new(dut_bus, readings).with_stop_signal(stop);
    let consumer = async {
        let first = readings.receive().await;
        let second = readings.receive().await;
        stop.signal(());
        (first, second)
    };

    let (result, (first, second)) =
        timeout(Duration::from_secs(1), async { tokio::join!(pump.run(), consumer) })
            .await
            .expect("pump must stop");

    assert_eq!(first.id(), MessageId::TempSensor1);
    assert_eq!(first.value(), 30.0);
    assert_eq!(second.id(), MessageId::VoltageSensor1);
    assert_eq!(second.value(), 24.0);

    let stats = result.expect("stopped cleanly");
    assert_eq!(
        stats,
        PumpStats {
            forwarded: 2,
            unknown: 1,
            malformed: 1
        }
    );
    assert_eq!(pump.stats(), stats);
    assert!(readings.try_receive().is_err());
}

#[tokio::test]
/// A dead bus ends the pump with a receive error.
async fn pump_stops_on_bus_error() {
    let readings: &'static Channel<CriticalSectionRawMutex, Reading, 2> =
        ONCE_READINGS.init(Channel::new());
    let (dut_bus, mut host_bus) = MockCanBus::create_pair();
    host_bus.send(&frame(9, &[0x03, 0xE8])).await.unwrap();

    let mut pump = ReadingPump::new(dut_bus, readings);
    let reading = pump.pump_once().await.unwrap().expect("forwarded");
    assert_eq!(reading.value(), 100.0);
    assert_eq!(readings.try_receive().unwrap(), reading);
    assert_eq!(pump.stats().forwarded, 1);

    drop(host_bus);
    assert!(matches!(pump.run().await, Err(PumpError::Receive(()))));
}

#[tokio::test]
async fn send_reading_then_recv_reading() {
    let (mut dut_bus, mut host_bus) = MockCanBus::create_pair();
    let reading = Reading::new(MessageId::PressureSensor2, &[3.5, 41.2]).unwrap();
    let header = FrameHeader::new(Source::FuelDispense, Destination::Pump2);

    dut_bus.send_reading(&reading, header).await.unwrap();
    let received = host_bus.recv_reading().await.unwrap();
    assert_eq!(received, reading);
}

#[tokio::test]
async fn recv_reading_reports_decode_errors() {
    let (mut dut_bus, mut host_bus) = MockCanBus::create_pair();
    dut_bus.send(&frame(77, &[1, 2])).await.unwrap();
    dut_bus.send(&frame(1, &[0x01, 0x00])).await.unwrap();

    assert!(matches!(
        host_bus.recv_reading().await,
        Err(ReceiveReadingError::Decode(DecodeError::UnknownMessageId { id: 77 }))
    ));
    // The bus stays usable after a decode error.
    let reading = host_bus.recv_reading().await.unwrap();
    assert_eq!(reading.id(), MessageId::FlowReturn);
    assert_eq!(reading.value(), 2.56);
}
