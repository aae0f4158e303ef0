//! Infrastructure shared by the protocol layer: byte-level codec and the
//! descriptor-driven payload engine.
pub mod codec;
