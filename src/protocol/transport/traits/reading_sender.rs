//! `CanBus` extension providing a high-level API to send readings: it encodes
//! the values through the registry, packs the identifier header, and transmits
//! the resulting frame.
use crate::{
    error::SendReadingError,
    protocol::messages::Reading,
    protocol::registry,
    protocol::transport::can_id::FrameHeader,
    protocol::transport::traits::can_bus::CanBus,
};

/// Trait extending `CanBus` with an encoding send.
pub trait ReadingSender: CanBus
where
    <Self as CanBus>::Error: core::fmt::Debug,
{
    /// Encode `reading` and send it as one frame.
    ///
    /// # Arguments
    ///
    /// * `reading` – values to publish
    /// * `header` – priority, source and destination packed above the message ID
    ///
    /// # Errors
    ///
    /// - [`SendReadingError::Encode`] when a value does not fit its wire type
    /// - [`SendReadingError::Send`] when bus transmission fails
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use rig_can::protocol::{
    ///     lookups::{Destination, Source},
    ///     messages::{MessageId, Reading},
    ///     transport::{can_id::FrameHeader, traits::reading_sender::ReadingSender},
    /// };
    ///
    /// let reading = Reading::new(MessageId::TempSensor1, &[21.5])?;
    /// let header = FrameHeader::new(Source::FuelDispense, Destination::Pump1);
    /// can_bus.send_reading(&reading, header).await?;
    /// ```
    fn send_reading<'a>(
        &'a mut self,
        reading: &'a Reading,
        header: FrameHeader,
    ) -> impl core::future::Future<Output = Result<(), SendReadingError<Self::Error>>> + 'a;
}

impl<C: CanBus> ReadingSender for C
where
    C::Error: core::fmt::Debug,
{
    fn send_reading<'a>(
        &'a mut self,
        reading: &'a Reading,
        header: FrameHeader,
    ) -> impl core::future::Future<Output = Result<(), SendReadingError<Self::Error>>> + 'a {
        async move {
            let frame = registry::encode(reading, header).map_err(SendReadingError::Encode)?;
            self.send(&frame).await.map_err(SendReadingError::Send)
        }
    }
}
