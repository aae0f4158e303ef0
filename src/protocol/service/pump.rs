//! Reading pump: drives a [`CanBus`], decodes every frame through the
//! registry and forwards the readings into a pre-allocated
//! [`embassy_sync::channel::Channel`].
//!
//! Frames the registry rejects are counted and dropped; they never stop the
//! pump. The pump stops when the bus fails or when the optional stop
//! [`Signal`] fires.
use core::fmt::Debug;

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel, signal::Signal};
use futures_util::{future::select, future::Either, pin_mut};

use crate::error::{DecodeError, PumpError};
use crate::protocol::messages::Reading;
use crate::protocol::registry;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::traits::can_bus::CanBus;

/// Counters kept while pumping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PumpStats {
    /// Readings pushed into the channel.
    pub forwarded: u32,
    /// Frames whose message ID is not registered.
    pub unknown: u32,
    /// Frames with a payload too short (or too long) for their layout.
    pub malformed: u32,
}

/// Bus-to-channel forwarder.
pub struct ReadingPump<'a, C: CanBus, const CAP: usize>
where
    C::Error: Debug,
{
    bus: C,
    readings: &'a Channel<CriticalSectionRawMutex, Reading, CAP>,
    stop: Option<&'a Signal<CriticalSectionRawMutex, ()>>,
    stats: PumpStats,
}

impl<'a, C, const CAP: usize> ReadingPump<'a, C, CAP>
where
    C: CanBus,
    C::Error: Debug,
{
    pub fn new(bus: C, readings: &'a Channel<CriticalSectionRawMutex, Reading, CAP>) -> Self {
        Self {
            bus,
            readings,
            stop: None,
            stats: PumpStats::default(),
        }
    }

    /// Stop the pump when `stop` is signalled. The frame being received at
    /// that moment is abandoned.
    pub fn with_stop_signal(mut self, stop: &'a Signal<CriticalSectionRawMutex, ()>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn stats(&self) -> PumpStats {
        self.stats
    }

    /// Give the bus back.
    pub fn into_bus(self) -> C {
        self.bus
    }

    /// Pump until stopped or until the bus fails.
    ///
    /// Returns the final counters when the stop signal fires.
    pub async fn run(&mut self) -> Result<PumpStats, PumpError<C::Error>> {
        loop {
            let frame = match self.stop {
                Some(stop) => {
                    let received = {
                        let stop_future = stop.wait();
                        let recv_future = self.bus.recv();
                        pin_mut!(stop_future);
                        pin_mut!(recv_future);

                        match select(recv_future, stop_future).await {
                            Either::Left((result, _)) => Some(result),
                            Either::Right(((), _)) => None,
                        }
                    };
                    match received {
                        Some(result) => result.map_err(PumpError::Receive)?,
                        None => {
                            #[cfg(feature = "defmt")]
                            defmt::debug!("Reading pump stopped: {}", self.stats);
                            return Ok(self.stats);
                        }
                    }
                }
                None => self.bus.recv().await.map_err(PumpError::Receive)?,
            };

            self.handle_frame(&frame).await;
        }
    }

    /// Receive and handle a single frame.
    ///
    /// Returns the forwarded reading, or `None` when the frame was dropped.
    pub async fn pump_once(&mut self) -> Result<Option<Reading>, PumpError<C::Error>> {
        let frame = self.bus.recv().await.map_err(PumpError::Receive)?;
        Ok(self.handle_frame(&frame).await)
    }

    async fn handle_frame(&mut self, frame: &CanFrame) -> Option<Reading> {
        match registry::decode(frame) {
            Ok(reading) => {
                // Waits while the channel is full.
                self.readings.send(reading).await;
                self.stats.forwarded = self.stats.forwarded.wrapping_add(1);
                Some(reading)
            }
            Err(DecodeError::UnknownMessageId { .. }) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("Dropping frame {=u32:#x}: unknown message id", frame.id.0);
                self.stats.unknown = self.stats.unknown.wrapping_add(1);
                None
            }
            Err(DecodeError::MalformedPayload { .. }) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "Dropping frame {=u32:#x}: {} bytes do not match its layout",
                    frame.id.0,
                    frame.len
                );
                self.stats.malformed = self.stats.malformed.wrapping_add(1);
                None
            }
        }
    }
}
