//! Abstraction traits used by the transport layer (CAN bus, timer, and the
//! reading sender/receiver extensions).
pub mod can_bus;
pub mod reading_receiver;
pub mod reading_sender;
pub mod rig_timer;
