//! In-memory representation of a rig bus CAN frame, plus conversion to and
//! from any driver frame implementing [`embedded_can::Frame`].
use crate::core::MAX_FRAME_DATA;
use crate::error::FrameError;
use crate::protocol::transport::can_id::CanId;
use embedded_can::{ExtendedId, Frame, Id};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Raw frame as read from the CAN bus.
pub struct CanFrame {
    /// Identifier (29-bit composite, or a bare 11-bit message ID).
    pub id: CanId,
    /// Payload buffer. Classic CAN frames always provide eight bytes.
    pub data: [u8; 8],
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub len: usize,
}

impl CanFrame {
    /// Copy `payload` into a new frame. Fails past eight bytes.
    pub fn new(id: CanId, payload: &[u8]) -> Result<Self, FrameError> {
        if payload.len() > MAX_FRAME_DATA {
            return Err(FrameError::PayloadTooLong { len: payload.len() });
        }
        let mut data = [0u8; 8];
        data[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            id,
            data,
            len: payload.len(),
        })
    }

    /// Valid payload bytes. A corrupt `len` is clamped to the buffer.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len.min(MAX_FRAME_DATA)]
    }

    /// Convert a driver frame. Standard and extended identifiers are both
    /// accepted; remote frames are refused.
    pub fn from_embedded<F: Frame>(frame: &F) -> Result<Self, FrameError> {
        if frame.is_remote_frame() {
            return Err(FrameError::RemoteFrame);
        }
        let id = match frame.id() {
            Id::Standard(standard) => standard.as_raw() as u32,
            Id::Extended(extended) => extended.as_raw(),
        };
        Self::new(CanId(id), frame.data())
    }

    /// Build a driver frame carrying this frame as an extended data frame.
    ///
    /// Returns `None` if the identifier is wider than 29 bits or the driver
    /// refuses the frame.
    pub fn to_embedded<F: Frame>(&self) -> Option<F> {
        let id = ExtendedId::new(self.id.0)?;
        F::new(id, self.payload())
    }
}
