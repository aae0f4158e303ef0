//! Cargo build script: compiles `io_config.json` into the message table and
//! the identifier-header lookups.

// Re-export the core module from src/core.rs so build_core can reuse it
#[path = "src/core.rs"]
mod core;

mod build_core;
use crate::build_core::{
    conf::*, domain::IoConfig, errors::BuildError, gen_lookups::run_lookup_gen,
    gen_messages::run_messages_gen, validate::validate,
};

use std::fs;
use std::path::PathBuf;

// The schema is the single source of truth for message names, values and
// payload layouts. Nothing in `src/` hand-maintains the table: the registry
// only sees what this script writes into `OUT_DIR`.

//==================================================================================MAIN
fn main() -> Result<(), BuildError> {
    // Tell Cargo to rerun this script whenever one of these inputs changes.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_core");
    println!("cargo:rerun-if-changed=src/core.rs");
    println!("cargo:rerun-if-changed={}", IO_CONFIG_PATH);
    println!("cargo:rerun-if-env-changed={}", IO_CONFIG_ENV);

    // 1. Locate the schema.
    // Priority order:
    //   1. RIG_CAN_IO_CONFIG_PATH environment variable (absolute or relative path)
    //   2. Default schema shipped with the crate
    let config_path = resolve_config_path();

    let config_string = fs::read_to_string(&config_path).map_err(|e| BuildError::ReadFile {
        path: config_path.clone(),
        source: e,
    })?;
    let config: IoConfig = serde_json::from_str(&config_string)?;

    // 2. Reject schemas that would yield an ambiguous table.
    validate(&config)?;

    // 3. Generate the code.
    let buffer_message_code = run_messages_gen(&config)?;
    let buffer_lookup_code = run_lookup_gen(&config)?;

    // 4. Write the generated code into `OUT_DIR`.
    // `include!` in `src/protocol/{messages,lookups}/mod.rs` pulls it in at compile time.
    let out_dir_str = std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?;
    let dest_path = PathBuf::from(out_dir_str);
    let message_file_path = dest_path.join(OUT_DIR_MESSAGE_FILE_NAME);
    let lookup_file_path = dest_path.join(OUT_DIR_ENUM_FILE_NAME);

    fs::write(&message_file_path, &buffer_message_code).map_err(|e| BuildError::WriteFile {
        path: message_file_path,
        source: e,
    })?;

    fs::write(&lookup_file_path, &buffer_lookup_code).map_err(|e| BuildError::WriteFile {
        path: lookup_file_path,
        source: e,
    })?;

    Ok(())
}

/// Pick the user schema when it exists, otherwise the default one.
fn resolve_config_path() -> PathBuf {
    let default_path = PathBuf::from(IO_CONFIG_PATH);

    match std::env::var(IO_CONFIG_ENV).ok().map(PathBuf::from) {
        Some(path) if path.exists() => {
            println!("cargo:warning=Using custom io_config.json from {:?}", path);
            println!("cargo:rerun-if-changed={}", path.display());
            path
        }
        Some(path) => {
            println!(
                "cargo:warning=Custom io_config path specified but file not found: {:?}",
                path
            );
            println!("cargo:warning=Falling back to the default io_config.json");
            default_path
        }
        None => default_path,
    }
}
