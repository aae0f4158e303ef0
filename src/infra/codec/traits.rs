//! Public traits exposed by the codec engine. They decouple the value types
//! handed to callers from the descriptor-driven encoding logic.
use crate::error::{DecodeError, EncodeError};
use crate::protocol::messages::MessageId;

//==================================================================================TO_PAYLOAD
/// Serialize a value into the payload bytes of its message.
pub trait ToPayload {
    /// Serialize into `buffer`.
    ///
    /// Returns the number of bytes written on success.
    fn to_payload(&self, buffer: &mut [u8]) -> Result<usize, EncodeError>;
    /// Payload length this value serializes to.
    fn payload_len(&self) -> usize;
}
//==================================================================================FROM_PAYLOAD
/// Rebuild a value from the payload of an identified message.
pub trait FromPayload: Sized {
    /// Interpret `payload` as the body of message `id`.
    fn from_payload(id: MessageId, payload: &[u8]) -> Result<Self, DecodeError>;
}
