//! Bus services built on the registry: a pump feeding decoded readings to a
//! consumer task, and a heartbeat publishing sensor snapshots.
pub mod heartbeat;
pub mod pump;
