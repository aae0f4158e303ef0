//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (unknown identifier, short
//! payload, unencodable value, bus failure, etc.).
use crate::protocol::messages::MessageId;
use thiserror_no_std::Error;

//==================================================================================REGISTRY_ERRORS
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Failures while resolving or decoding a received frame.
pub enum DecodeError {
    /// The message-ID field is not one of the registered values.
    #[error("Unknown message id {id}")]
    UnknownMessageId { id: u32 },
    /// The identifier is known but the payload cannot hold its layout.
    #[error("Malformed payload for {id:?}: expected {expected} bytes, got {actual}")]
    MalformedPayload {
        id: MessageId,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
/// Failures while turning a reading back into a frame.
pub enum EncodeError {
    /// Number of values differs from the number of fields in the layout.
    #[error("{id:?} expects {expected} values, got {actual}")]
    ValueCountMismatch {
        id: MessageId,
        expected: usize,
        actual: usize,
    },
    /// Value is NaN or does not fit the wire type once scaled.
    #[error("Value {value} out of range for field {field}")]
    ValueOutOfRange { field: &'static str, value: f64 },
    /// Failed while writing bytes into the output buffer.
    #[error("ByteWriter error: {err}")]
    Writer { err: ByteWriterError },
    /// Unable to build the CAN identifier.
    #[error(transparent)]
    BuildErr(#[from] CanIdBuildError),
}

//==================================================================================CAN_ID_ERRORS
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur while building a 29-bit CAN identifier.
pub enum CanIdBuildError {
    /// Priority does not fit its header field.
    #[error("Priority {0} does not fit the identifier header")]
    PriorityOverflow(u8),
    /// Source does not fit its header field.
    #[error("Source {0} does not fit the identifier header")]
    SourceOverflow(u8),
    /// Destination does not fit its header field.
    #[error("Destination {0} does not fit the identifier header")]
    DestinationOverflow(u8),
    /// Message id is zero or wider than the message-ID field.
    #[error("Invalid message id {0}")]
    InvalidMessageId(u32),
}

//==================================================================================FRAME_ERRORS
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised when building a [`CanFrame`](crate::protocol::transport::can_frame::CanFrame).
pub enum FrameError {
    /// More than eight payload bytes supplied.
    #[error("Payload of {len} bytes exceeds the 8-byte CAN limit")]
    PayloadTooLong { len: usize },
    /// Remote frames carry no payload to decode.
    #[error("Remote frames are not supported")]
    RemoteFrame,
}

//==================================================================================BUS_ERRORS
#[derive(Debug, Error)]
/// Errors encountered when receiving and decoding one frame.
pub enum ReceiveReadingError<E: core::fmt::Debug> {
    /// CAN layer failed to deliver a frame.
    #[error("CAN bus receive error: {0:?}")]
    Receive(E),
    /// Frame arrived but could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Error)]
/// Errors encountered when sending a reading (encode + transmit).
pub enum SendReadingError<E: core::fmt::Debug> {
    /// Reading could not be encoded.
    #[error("Encoding failed: {0}")]
    Encode(EncodeError),
    /// CAN layer refused or failed to send the frame.
    #[error("CAN bus send error: {0:?}")]
    Send(E),
}

#[derive(Debug, Error)]
/// Reasons a [`ReadingPump`](crate::protocol::service::pump::ReadingPump) stops.
pub enum PumpError<E: core::fmt::Debug> {
    /// CAN layer failed to deliver a frame.
    #[error("CAN bus receive error: {0:?}")]
    Receive(E),
}

//==================================================================================BYTEREADER_ERRORS
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Errors raised during buffer reads.
pub enum ByteReaderError {
    /// Attempted to read past the end of the buffer.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
}
//==================================================================================BYTEWRITER_ERRORS
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Errors raised during writes into a buffer.
pub enum ByteWriterError {
    /// Attempted to write beyond the provided capacity.
    #[error("Attempted to write out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
}
