//! Identifier-header enumerations (`Priority`, `Source`, `Destination`).
//! `generated_lookups.rs` is produced at build time from the `Lookups` section
//! of `io_config.json`.
include!(concat!(env!("OUT_DIR"), "/generated_lookups.rs"));
