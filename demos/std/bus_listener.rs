//! # Bus Listener Example
//!
//! A heartbeat task publishes a sensor snapshot on an in-process loopback bus
//! while a reading pump decodes the traffic and hands readings to a consumer.
//!
//! ```bash
//! cargo run --example bus_listener
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use rig_can::protocol::lookups::{Destination, Source};
use rig_can::protocol::messages::{MessageId, Reading};
use rig_can::protocol::service::heartbeat::{Heartbeat, HeartbeatEntry};
use rig_can::protocol::service::pump::ReadingPump;
use rig_can::protocol::transport::can_frame::CanFrame;
use rig_can::protocol::transport::can_id::FrameHeader;
use rig_can::protocol::transport::traits::{can_bus::CanBus, rig_timer::RigTimer};
use static_cell::StaticCell;
use tokio::sync::mpsc;

const ROUNDS: u32 = 3;

/// One direction of a loopback bus.
struct LoopbackBus {
    tx: Option<mpsc::UnboundedSender<CanFrame>>,
    rx: Option<mpsc::UnboundedReceiver<CanFrame>>,
}

impl CanBus for LoopbackBus {
    type Error = &'static str;

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        let tx = self.tx.as_ref().ok_or("bus is receive-only")?;
        tx.send(*frame).map_err(|_| "listener gone")
    }

    async fn recv(&mut self) -> Result<CanFrame, Self::Error> {
        let rx = self.rx.as_mut().ok_or("bus is send-only")?;
        rx.recv().await.ok_or("publisher gone")
    }
}

struct TokioTimer;

impl RigTimer for TokioTimer {
    async fn delay(&mut self, duration: embassy_time::Duration) {
        tokio::time::sleep(std::time::Duration::from_micros(duration.as_micros())).await;
    }
}

static READINGS: StaticCell<Channel<CriticalSectionRawMutex, Reading, 8>> = StaticCell::new();
static STOP: StaticCell<Signal<CriticalSectionRawMutex, ()>> = StaticCell::new();

fn snapshot() -> Vec<HeartbeatEntry> {
    let fuel = |destination| FrameHeader::new(Source::FuelDispense, destination);
    let power = |destination| FrameHeader::new(Source::PowerModule, destination);
    let entries: [(FrameHeader, MessageId, &[f64]); 6] = [
        (fuel(Destination::Pump1), MessageId::FlowReturn, &[8.4][..]),
        (fuel(Destination::Pump2), MessageId::PressureSensor2, &[212.0, 41.0][..]),
        (fuel(Destination::Pump1), MessageId::TempSensor1, &[-3.5][..]),
        (fuel(Destination::Pump1), MessageId::LoadCell1, &[143.25][..]),
        (power(Destination::DispenseValve), MessageId::CurrentSensor3, &[-7.5][..]),
        (power(Destination::Pump1), MessageId::VoltageSensor1, &[24.3][..]),
    ];
    entries
        .into_iter()
        .filter_map(|(header, id, values)| Some((header, Reading::new(id, values).ok()?)))
        .collect()
}

#[tokio::main]
async fn main() {
    println!("=== rig-can Bus Listener ===\n");

    let readings: &'static Channel<CriticalSectionRawMutex, Reading, 8> =
        READINGS.init(Channel::new());
    let stop: &'static Signal<CriticalSectionRawMutex, ()> = STOP.init(Signal::new());

    let (tx, rx) = mpsc::unbounded_channel();
    let publisher = LoopbackBus {
        tx: Some(tx),
        rx: None,
    };
    let listener = LoopbackBus {
        tx: None,
        rx: Some(rx),
    };

    let entries = snapshot();
    let expected = entries.len() * ROUNDS as usize;

    let mut heartbeat = Heartbeat::new(publisher, TokioTimer)
        .with_period(embassy_time::Duration::from_millis(200));
    let mut pump = ReadingPump::new(listener, readings).with_stop_signal(stop);

    let consumer = async {
        for _ in 0..expected {
            let reading = readings.receive().await;
            print!("   {:<26}", reading.id().name());
            for (field, value) in reading.fields() {
                print!(" {:>8.2} {:<5}", value, field.unit);
            }
            println!();
        }
        stop.signal(());
    };

    let (published, pumped, ()) = tokio::join!(
        heartbeat.run(&entries, Some(ROUNDS)),
        pump.run(),
        consumer
    );

    println!("\nHeartbeat rounds: {:?}", published);
    println!("Pump stats: {:?}", pumped);
}
