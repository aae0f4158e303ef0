//! Error set that can occur while generating code during the build step.
use std::env::VarError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the build script (JSON parsing, validation, code generation).
pub(crate) enum BuildError {
    /// Failed to read the `OUT_DIR` environment variable.
    #[error("[MESSAGE]:OUT_DIR error. [ERROR]:{source}")]
    OutDirErr {
        #[source]
        source: VarError,
    },

    /// Failure while parsing the schema document.
    #[error("[MESSAGE]:Invalid JSON format [Error]:{0:?}")]
    ParseJson(#[from] serde_json::Error),

    /// Unable to read a file from disk.
    #[error("[MESSAGE]:Failed to read file [PATH]:{path} [ERROR]:{source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated code to disk.
    #[error("[MESSAGE]:Failed to write file [PATH]:{path} [ERROR]:{source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Formatting error while writing generated code.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnErr {
        #[from]
        source: std::fmt::Error,
    },

    /// I/O-oriented variant of the previous error.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnIoErr {
        #[from]
        source: io::Error,
    },

    /// Two messages share a name or a numeric value.
    #[error("[MESSAGE]:Duplicate message [NAME]:{name} [VALUE]:{value}")]
    DuplicateMessage { name: String, value: u32 },

    /// Message value is zero or wider than the message-ID field.
    #[error("[MESSAGE]:Message id out of range [NAME]:{name} [VALUE]:{value} [BITS]:{bits}")]
    MessageIdOutOfRange { name: String, value: u32, bits: u32 },

    /// Message refers to a sensor kind that has no layout, or the kind itself is unknown.
    #[error("[MESSAGE]:Unknown sensor kind [KIND]:{kind} [COMMENT]:{comment}")]
    UnknownKind { kind: String, comment: &'static str },

    /// Field declares an unsupported wire type.
    #[error("[MESSAGE]:Unknown wire type [KIND]:{kind} [FIELD]:{field} [TYPE]:{wire_type}")]
    UnknownWireType {
        kind: String,
        field: String,
        wire_type: String,
    },

    /// Layout does not fit a classic CAN frame or its own DLC.
    #[error("[MESSAGE]:Invalid layout [KIND]:{kind}, [COMMENT]:{comment}")]
    InvalidLayout { kind: String, comment: &'static str },

    /// Lookup required by the identifier layout is missing.
    #[error("[MESSAGE]:Missing lookup [NAME]:{name}")]
    MissingLookup { name: &'static str },

    /// Lookup is malformed (value too wide, duplicates...).
    #[error("[MESSAGE]:Invalid lookup setup [LOOKUP]:{lookup}, [VARIANT]:{variant}, [COMMENT]:{comment}")]
    InvalidLookup {
        lookup: String,
        variant: String,
        comment: &'static str,
    },

    /// Header fields and message ID do not fit a 29-bit identifier.
    #[error("[MESSAGE]:Identifier layout needs {bits} bits, extended CAN ids hold 29")]
    IdentifierTooWide { bits: u32 },
}
