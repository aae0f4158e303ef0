//! `CanBus` extension that receives one frame and decodes it through the
//! registry.
use crate::{
    error::ReceiveReadingError,
    protocol::messages::Reading,
    protocol::registry,
    protocol::transport::traits::can_bus::CanBus,
};

/// Trait extending `CanBus` with a decoding receive.
pub trait ReadingReceiver: CanBus
where
    <Self as CanBus>::Error: core::fmt::Debug,
{
    /// Wait for the next frame and decode it.
    ///
    /// # Errors
    ///
    /// - [`ReceiveReadingError::Receive`] when the bus fails
    /// - [`ReceiveReadingError::Decode`] when the frame carries an unknown
    ///   message ID or a payload too short for its layout
    ///
    /// A decode error leaves the bus usable; the caller may keep receiving.
    fn recv_reading<'a>(
        &'a mut self,
    ) -> impl core::future::Future<Output = Result<Reading, ReceiveReadingError<Self::Error>>> + 'a;
}

impl<C: CanBus> ReadingReceiver for C
where
    C::Error: core::fmt::Debug,
{
    fn recv_reading<'a>(
        &'a mut self,
    ) -> impl core::future::Future<Output = Result<Reading, ReceiveReadingError<Self::Error>>> + 'a
    {
        async move {
            let frame = self.recv().await.map_err(ReceiveReadingError::Receive)?;
            Ok(registry::decode(&frame)?)
        }
    }
}
