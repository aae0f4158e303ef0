//! Message registry: maps the message-ID field of a frame to its payload
//! layout and converts between frames and [`Reading`]s.
//!
//! Every function here is pure. The only shared data is the generated table,
//! which lives in `static` memory and is never mutated.
use crate::core::{MessageDescriptor, MAX_FRAME_DATA};
use crate::error::{DecodeError, EncodeError};
use crate::infra::codec::traits::{FromPayload, ToPayload};
use crate::protocol::messages::{MessageId, Reading};
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::can_id::FrameHeader;

/// Resolve a numeric message ID.
///
/// Fails with [`DecodeError::UnknownMessageId`] unless `id` is one of the
/// registered values.
pub fn lookup(id: u32) -> Result<MessageId, DecodeError> {
    MessageId::try_from(id)
}

/// Static payload layout of a registered message.
pub fn descriptor(id: MessageId) -> &'static MessageDescriptor {
    id.descriptor()
}

/// Decode a received frame.
///
/// The message ID is taken from the low bits of the identifier, so a bare ID
/// and a composite one with header bits decode alike. Bytes past the layout's
/// DLC are ignored.
///
/// # Errors
///
/// - [`DecodeError::UnknownMessageId`] for an unregistered ID, or an
///   identifier wider than 29 bits
/// - [`DecodeError::MalformedPayload`] when `len` is above 8 or below the DLC
pub fn decode(frame: &CanFrame) -> Result<Reading, DecodeError> {
    if !frame.id.is_valid() {
        return Err(DecodeError::UnknownMessageId { id: frame.id.0 });
    }
    let id = lookup(frame.id.message_id_raw())?;
    let payload = frame
        .data
        .get(..frame.len)
        .ok_or(DecodeError::MalformedPayload {
            id,
            expected: id.descriptor().dlc as usize,
            actual: frame.len,
        })?;
    Reading::from_payload(id, payload)
}

/// Encode a reading into a frame of exactly DLC bytes, with `header` packed
/// above the message ID.
///
/// # Errors
///
/// - [`EncodeError::ValueOutOfRange`] when a value is NaN or does not fit
///   its wire type after scaling
/// - [`EncodeError::BuildErr`] when the header does not fit the identifier
pub fn encode(reading: &Reading, header: FrameHeader) -> Result<CanFrame, EncodeError> {
    let id = header.id_for(reading.id())?;
    let mut data = [0u8; MAX_FRAME_DATA];
    let len = reading.to_payload(&mut data)?;
    Ok(CanFrame { id, data, len })
}
