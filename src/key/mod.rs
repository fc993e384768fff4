//! Key encoding — canonical identifiers for trial configurations.
//!
//! Identifiers are the sole join key between the result store and the sweep
//! description: two configurations denote the same run iff their identifiers
//! are byte-for-byte equal. An identifier is exactly the basename of the
//! archived result file, so the encoding is part of the archive format and
//! must stay stable across versions.
//!
//! Encoding shape: `<prefix>_<axis>_<axis>..._<axis>.json`, axes in a fixed
//! per-algorithm order, integers in plain decimal. The free-form domain axis
//! is validated against the delimiter and path/extension characters, which
//! makes the token count after each prefix fixed — equal identifiers then
//! imply equal axis tuples, and no algorithm's encoding can collide with
//! another's.

mod algorithm;
mod configuration;

pub use algorithm::{Algorithm, TrialDpSolver, TreeSearchSolver};
pub use configuration::{
    Configuration, GridViConfig, TreeSearchConfig, TrialDpConfig,
};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Canonical string identifier derived from a [`Configuration`].
///
/// Usable directly as a file basename (the `.json` suffix is part of the
/// identifier). Construct via [`Configuration::encode`]; arbitrary strings
/// only enter through deserialization of archived mappings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub(crate) fn from_encoded(encoded: String) -> Self {
        Self(encoded)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

/// Characters a free-form axis value may not contain: the axis delimiter,
/// path separators, and the extension dot.
const RESERVED: [char; 4] = ['_', '/', '\\', '.'];

/// Validate a free-form axis value against encoding-reserved characters.
pub(crate) fn check_axis_value(axis: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains(RESERVED) {
        return Err(Error::InvalidAxisValue {
            axis,
            value: value.to_string(),
        });
    }
    Ok(())
}
