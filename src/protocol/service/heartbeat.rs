//! Periodic snapshot publisher.
//!
//! A heartbeat round sends one frame per reading of the snapshot, spaced by
//! [`HEARTBEAT_INTER_FRAME_DELAY`], then waits one period before the next round.
use core::fmt::Debug;

use embassy_time::Duration;

use crate::error::SendReadingError;
use crate::protocol::messages::Reading;
use crate::protocol::transport::can_id::FrameHeader;
use crate::protocol::transport::traits::{
    can_bus::CanBus, reading_sender::ReadingSender, rig_timer::RigTimer,
};
use crate::protocol::transport::{DEFAULT_HEARTBEAT_PERIOD, HEARTBEAT_INTER_FRAME_DELAY};

/// One snapshot entry: the reading and the header it is published under.
pub type HeartbeatEntry = (FrameHeader, Reading);

pub struct Heartbeat<C: CanBus, T: RigTimer>
where
    C::Error: Debug,
{
    bus: C,
    timer: T,
    period: Duration,
    inter_frame_delay: Duration,
}

impl<C, T> Heartbeat<C, T>
where
    C: CanBus,
    C::Error: Debug,
    T: RigTimer,
{
    /// Heartbeat with the default period and inter-frame delay.
    pub fn new(bus: C, timer: T) -> Self {
        Self {
            bus,
            timer,
            period: DEFAULT_HEARTBEAT_PERIOD,
            inter_frame_delay: HEARTBEAT_INTER_FRAME_DELAY,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_inter_frame_delay(mut self, delay: Duration) -> Self {
        self.inter_frame_delay = delay;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Give the bus and timer back.
    pub fn into_parts(self) -> (C, T) {
        (self.bus, self.timer)
    }

    /// Send every entry of `snapshot` once.
    ///
    /// No delay precedes the first frame. Returns the number of frames sent;
    /// the round aborts on the first encode or bus error.
    pub async fn publish_round(
        &mut self,
        snapshot: &[HeartbeatEntry],
    ) -> Result<usize, SendReadingError<C::Error>> {
        for (index, (header, reading)) in snapshot.iter().enumerate() {
            if index > 0 {
                self.timer.delay(self.inter_frame_delay).await;
            }
            self.bus.send_reading(reading, *header).await?;
        }
        Ok(snapshot.len())
    }

    /// Publish `snapshot` every period.
    ///
    /// Runs `rounds` rounds, or forever when `rounds` is `None`. Returns the
    /// number of completed rounds. The period delay is skipped after the last
    /// round.
    pub async fn run(
        &mut self,
        snapshot: &[HeartbeatEntry],
        rounds: Option<u32>,
    ) -> Result<u32, SendReadingError<C::Error>> {
        let mut completed: u32 = 0;
        loop {
            if rounds.is_some_and(|limit| completed >= limit) {
                return Ok(completed);
            }
            if completed > 0 {
                self.timer.delay(self.period).await;
            }
            #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
            let sent = self.publish_round(snapshot).await?;
            completed = completed.wrapping_add(1);

            #[cfg(feature = "defmt")]
            defmt::debug!("Heartbeat round {} sent {} frames", completed, sent);
        }
    }
}
