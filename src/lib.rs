//! `rig-can` library: message identity and payload registry for the fuel rig
//! sensor bus, usable in a `no_std` environment. The crate exposes the
//! infrastructure modules (byte codec, descriptor engine), the registry itself,
//! the CAN transport types, and small bus services built on top of them.
#![no_std]
//==================================================================================
/// Descriptor types shared by the build script and the codec engine.
pub mod core;
/// Registry, codec and transport errors.
pub mod error;
/// Byte-level codec and the descriptor-driven engine.
pub mod infra;
/// Message table, registry, CAN transport and bus services.
pub mod protocol;
//==================================================================================
