//! Error types for planbench
//!
//! Two failure tiers are kept strictly apart: environment/integrity failures
//! (missing or malformed inputs, lookups of runs that were never loaded) are
//! fatal `Err` values carrying the offending identifier/path, while
//! data-quality gaps (a metric genuinely absent from a parsed record) are
//! `None` values that flow through aggregation instead of raising.

use std::path::PathBuf;

use thiserror::Error;

use crate::key::Identifier;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Planbench error types
#[derive(Error, Debug)]
pub enum Error {
    /// An axis value contains a character reserved by the identifier encoding
    #[error("invalid {axis} value {value:?}: must be non-empty and free of '_', '/', '\\' and '.'")]
    InvalidAxisValue {
        /// Axis the value was supplied for (e.g. "domain")
        axis: &'static str,
        /// Offending value
        value: String,
    },

    /// A result record file could not be read
    #[error("failed to read result record {identifier} at {}: {source}", path.display())]
    RecordRead {
        /// Identifier whose file failed to load
        identifier: Identifier,
        /// Resolved file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A result record file was read but is not a valid record
    #[error("failed to parse result record {identifier} at {}: {source}", path.display())]
    RecordParse {
        /// Identifier whose file failed to parse
        identifier: Identifier,
        /// Resolved file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The merged results file could not be read
    #[error("failed to read merged results {}: {source}", path.display())]
    MergedRead {
        /// Merged results file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The merged results file is not a valid identifier-to-record mapping
    #[error("failed to parse merged results {}: {source}", path.display())]
    MergedParse {
        /// Merged results file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// An identifier was looked up but never loaded ("no such run")
    ///
    /// Distinct from a loaded record whose fields are all absent ("run
    /// produced no usable metrics") — the two must never be conflated.
    #[error("no result record loaded for identifier {0}")]
    UnknownIdentifier(Identifier),
}
