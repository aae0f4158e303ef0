/// Test doubles to simulate the CAN bus and timer during integration tests.
use rig_can::protocol::transport::{
    can_frame::CanFrame,
    traits::{can_bus::CanBus, rig_timer::RigTimer},
};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{mpsc, Mutex};
use tokio::time::sleep;

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory CAN bus reproducing the `CanBus` trait behavior.
pub struct MockCanBus {
    tx: mpsc::UnboundedSender<CanFrame>,
    rx: Arc<Mutex<mpsc::UnboundedReceiver<CanFrame>>>,
}

#[allow(dead_code)]
impl MockCanBus {
    /// Construct a pair of interconnected buses (DUT ↔ host).
    pub fn create_pair() -> (Self, Self) {
        let (dut_tx, host_rx) = mpsc::unbounded_channel();
        let (host_tx, dut_rx) = mpsc::unbounded_channel();

        let dut_bus = Self {
            tx: dut_tx,
            rx: Arc::new(Mutex::new(dut_rx)),
        };

        let host_bus = Self {
            tx: host_tx,
            rx: Arc::new(Mutex::new(host_rx)),
        };

        (dut_bus, host_bus)
    }

    /// Take every frame already queued for this side without waiting.
    pub async fn drain(&self) -> Vec<CanFrame> {
        let mut rx = self.rx.lock().await;
        let mut frames = Vec::new();
        while let Ok(frame) = rx.try_recv() {
            frames.push(frame);
        }
        frames
    }
}

impl CanBus for MockCanBus {
    type Error = ();

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        self.tx.send(*frame).map_err(|_| ())?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<CanFrame, Self::Error> {
        let mut rx = self.rx.lock().await;
        rx.recv().await.ok_or(())
    }
}

#[derive(Clone, Default)]
#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` that also records every requested delay.
pub struct MockTimer {
    delays: Arc<StdMutex<Vec<embassy_time::Duration>>>,
}

#[allow(dead_code)]
impl MockTimer {
    /// Delays requested so far, in call order.
    pub fn delays(&self) -> Vec<embassy_time::Duration> {
        self.delays.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl RigTimer for MockTimer {
    async fn delay(&mut self, duration: embassy_time::Duration) {
        if let Ok(mut delays) = self.delays.lock() {
            delays.push(duration);
        }
        sleep(std::time::Duration::from_micros(duration.as_micros())).await;
    }
}
