//! Rig bus transport layer: CAN frame representation, composite 29-bit
//! identifier management, and bus abstraction traits.
//!
//! ## Timing Constants
//!
//! Recommended delays for publishing sensor snapshots without flooding
//! small controller TX queues.
use crate::protocol::lookups::Priority;
use embassy_time::Duration;

pub mod can_frame;
pub mod can_id;
pub mod traits;

/// Priority used for sensor readings when the caller does not pick one.
pub const DEFAULT_PRIORITY: Priority = Priority::Realtime;

/// Delay inserted between two frames of the same heartbeat round.
///
/// A snapshot is 18 frames back to back. Many embedded CAN peripherals only
/// buffer two or three frames on transmit (ESP32 TWAI, bxCAN), so a short gap
/// keeps the queue from overflowing.
pub const HEARTBEAT_INTER_FRAME_DELAY: Duration = Duration::from_millis(2);

/// Period between two heartbeat rounds.
pub const DEFAULT_HEARTBEAT_PERIOD: Duration = Duration::from_secs(1);

/// Recommended timeout for sending a single CAN frame.
///
/// [`CanBus`](traits::can_bus::CanBus) implementations **SHOULD** bound
/// `send()` so a disconnected or saturated bus cannot block a service forever.
///
/// # Example
///
/// ```rust,ignore
/// use embassy_time::with_timeout;
/// use rig_can::protocol::transport::CAN_SEND_TIMEOUT;
///
/// async fn send(&mut self, frame: &CanFrame) -> Result<(), Error> {
///     with_timeout(CAN_SEND_TIMEOUT, self.can.transmit_async(&twai_frame))
///         .await
///         .map_err(|_| Error::Timeout)?
/// }
/// ```
pub const CAN_SEND_TIMEOUT: Duration = Duration::from_millis(100);
