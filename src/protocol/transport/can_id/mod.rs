//! Creation and extraction of the composite 29-bit identifiers used on the
//! rig bus.
//!
//! Layout, most significant bit first:
//!
//! | bits   | field       | width |
//! |--------|-------------|-------|
//! | 28..27 | priority    | 2     |
//! | 26..25 | source      | 2     |
//! | 24..21 | destination | 4     |
//! | 20..0  | message id  | 21    |
//!
//! Field widths come from the schema (`Priority::BITS`, `MESSAGE_ID_BITS`...).
//! A bare message ID (header bits all zero) is a valid identifier.
use crate::error::{CanIdBuildError, DecodeError};
use crate::protocol::lookups::{
    Destination, InvalidDestination, InvalidPriority, InvalidSource, Priority, Source,
};
use crate::protocol::messages::{MessageId, MESSAGE_ID_BITS};
use crate::protocol::transport::DEFAULT_PRIORITY;

const MESSAGE_ID_MASK: u32 = (1 << MESSAGE_ID_BITS) - 1;
const DESTINATION_SHIFT: u32 = MESSAGE_ID_BITS;
const SOURCE_SHIFT: u32 = DESTINATION_SHIFT + Destination::BITS;
const PRIORITY_SHIFT: u32 = SOURCE_SHIFT + Source::BITS;

/// Largest 11-bit identifier.
const STANDARD_ID_MAX: u32 = 0x7FF;
/// Largest 29-bit identifier.
const EXTENDED_ID_MAX: u32 = 0x1FFF_FFFF;

const fn field_mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

//==================================================================================CAN_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Encapsulates an extended CAN identifier (29 bits) and exposes accessors
/// for priority, source, destination, and message ID.
pub struct CanId(pub u32);

impl CanId {
    // Builder entry point
    /// Creates a `CanIdBuilder` for a message, with the default header.
    pub fn builder(message_id: MessageId) -> CanIdBuilder {
        CanIdBuilder::new(message_id)
    }

    /// Identifier carrying only the message ID (all header bits zero).
    pub fn bare(message_id: MessageId) -> Self {
        CanId(message_id.value())
    }

    /// Assemble an identifier from raw header values, checking every width.
    pub fn from_parts(
        priority: u8,
        source: u8,
        destination: u8,
        message_id: u32,
    ) -> Result<Self, CanIdBuildError> {
        if priority as u32 > field_mask(Priority::BITS) {
            return Err(CanIdBuildError::PriorityOverflow(priority));
        }
        if source as u32 > field_mask(Source::BITS) {
            return Err(CanIdBuildError::SourceOverflow(source));
        }
        if destination as u32 > field_mask(Destination::BITS) {
            return Err(CanIdBuildError::DestinationOverflow(destination));
        }
        if message_id == 0 || message_id > MESSAGE_ID_MASK {
            return Err(CanIdBuildError::InvalidMessageId(message_id));
        }
        Ok(CanId(
            ((priority as u32) << PRIORITY_SHIFT)
                | ((source as u32) << SOURCE_SHIFT)
                | ((destination as u32) << DESTINATION_SHIFT)
                | message_id,
        ))
    }

    // Getters used to deconstruct the identifier
    /// Low `MESSAGE_ID_BITS` bits, whether or not they name a registered message.
    pub fn message_id_raw(&self) -> u32 {
        self.0 & MESSAGE_ID_MASK
    }

    /// Registered message carried by the identifier.
    pub fn message_id(&self) -> Result<MessageId, DecodeError> {
        MessageId::try_from(self.message_id_raw())
    }

    pub fn priority_raw(&self) -> u8 {
        ((self.0 >> PRIORITY_SHIFT) & field_mask(Priority::BITS)) as u8
    }

    pub fn source_raw(&self) -> u8 {
        ((self.0 >> SOURCE_SHIFT) & field_mask(Source::BITS)) as u8
    }

    pub fn destination_raw(&self) -> u8 {
        ((self.0 >> DESTINATION_SHIFT) & field_mask(Destination::BITS)) as u8
    }

    pub fn priority(&self) -> Result<Priority, InvalidPriority> {
        Priority::try_from(self.priority_raw())
    }

    pub fn source(&self) -> Result<Source, InvalidSource> {
        Source::try_from(self.source_raw())
    }

    pub fn destination(&self) -> Result<Destination, InvalidDestination> {
        Destination::try_from(self.destination_raw())
    }

    /// True when the value also fits an 11-bit standard identifier.
    pub fn is_standard(&self) -> bool {
        self.0 <= STANDARD_ID_MAX
    }

    /// False when bits above the 29-bit extended range are set.
    pub fn is_valid(&self) -> bool {
        self.0 <= EXTENDED_ID_MAX
    }
}

//==================================================================================FRAME_HEADER
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Header fields packed above the message ID when a frame is sent.
pub struct FrameHeader {
    pub priority: Priority,
    pub source: Source,
    pub destination: Destination,
}

impl FrameHeader {
    pub fn new(source: Source, destination: Destination) -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            source,
            destination,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Identifier for `message_id` under this header.
    pub fn id_for(&self, message_id: MessageId) -> Result<CanId, CanIdBuildError> {
        CanId::builder(message_id).header(*self).build()
    }
}

impl Default for FrameHeader {
    fn default() -> Self {
        Self::new(Source::default(), Destination::default())
    }
}

//==================================================================================CAN_ID_BUILDER
#[derive(Debug)]
/// Fluent builder for a composite identifier.
pub struct CanIdBuilder {
    pub priority: Priority,
    pub source: Source,
    pub destination: Destination,
    pub message_id: MessageId,
}

impl CanIdBuilder {
    /// Initializes the builder for a message with the default header.
    pub fn new(message_id: MessageId) -> Self {
        let header = FrameHeader::default();
        Self {
            priority: header.priority,
            source: header.source,
            destination: header.destination,
            message_id,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn from_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn to_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Copy every header field at once.
    pub fn header(mut self, header: FrameHeader) -> Self {
        self.priority = header.priority;
        self.source = header.source;
        self.destination = header.destination;
        self
    }

    /// Packs the fields. Fails only if the schema declared a variant wider
    /// than its header field.
    pub fn build(self) -> Result<CanId, CanIdBuildError> {
        CanId::from_parts(
            self.priority.into(),
            self.source.into(),
            self.destination.into(),
            self.message_id.value(),
        )
    }
}
//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
