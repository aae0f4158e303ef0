//! High-level components of the rig bus: header lookups, the generated message
//! table, the registry that decodes and encodes payloads, CAN transport, and
//! the bus services built on top of them.
pub mod lookups;
pub mod messages;
pub mod registry;
pub mod service;
pub mod transport;
