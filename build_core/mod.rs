//! Workspace for the build script: schema structures, validation and code generators.
pub mod conf;
pub mod domain;
pub mod errors;
pub mod gen_lookups;
pub mod gen_messages;
pub mod name_helpers;
pub mod type_helpers;
pub mod validate;
