//! Payload codec: big-endian byte reader/writer, descriptor engine, and the
//! conversion traits implemented by decoded values.
pub mod bytes;
pub mod engine;
pub mod traits;
