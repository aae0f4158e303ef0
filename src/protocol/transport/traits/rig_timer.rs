//! Asynchronous timer abstraction used to pace heartbeat frames.
use embassy_time::Duration;

/// Timer trait abstraction. On target this is usually a thin wrapper over
/// `embassy_time::Timer::after`.
pub trait RigTimer {
    /// Asynchronously wait for `duration`.
    fn delay<'a>(&'a mut self, duration: Duration) -> impl core::future::Future<Output = ()> + 'a;
}
