//! Result store — immutable identifier → record mapping.
//!
//! Built once per invocation, fully, before any aggregation begins, and
//! read-only afterwards. Loading fails hard: a missing, unreadable or
//! unparseable input is an environment error naming the offending
//! identifier and path, never a data-quality gap. There is no partial store
//! and no skip-and-continue at this layer.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::key::Identifier;
use crate::record::TrialRecord;
use crate::{Error, Result};

/// Immutable mapping from [`Identifier`] to [`TrialRecord`].
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    records: FxHashMap<Identifier, TrialRecord>,
}

impl ResultStore {
    /// Build a store from in-memory records.
    ///
    /// Useful for testing and for embedding the engine behind a different
    /// record source.
    #[must_use]
    pub fn from_records(
        records: impl IntoIterator<Item = (Identifier, TrialRecord)>,
    ) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Load one record file per identifier, resolved against `base_dir`.
    ///
    /// Each identifier is the basename of its own file. Any I/O or parse
    /// failure aborts the whole load.
    ///
    /// # Errors
    /// [`Error::RecordRead`] when a file is missing or unreadable,
    /// [`Error::RecordParse`] when its contents are not a valid record.
    pub fn load_dir(
        base_dir: impl AsRef<Path>,
        identifiers: impl IntoIterator<Item = Identifier>,
    ) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let mut records = FxHashMap::default();
        for identifier in identifiers {
            let path = base_dir.join(identifier.as_str());
            let raw = std::fs::read_to_string(&path).map_err(|source| Error::RecordRead {
                identifier: identifier.clone(),
                path: path.clone(),
                source,
            })?;
            let record: TrialRecord =
                serde_json::from_str(&raw).map_err(|source| Error::RecordParse {
                    identifier: identifier.clone(),
                    path,
                    source,
                })?;
            debug!(identifier = %identifier, "loaded result record");
            records.insert(identifier, record);
        }
        info!(
            count = records.len(),
            dir = %base_dir.display(),
            "result store loaded"
        );
        Ok(Self { records })
    }

    /// Load a merged results file: one JSON object mapping identifier to
    /// record, as produced by the archive merge step.
    ///
    /// # Errors
    /// [`Error::MergedRead`] when the file is missing or unreadable,
    /// [`Error::MergedParse`] when it is not an identifier-to-record map.
    pub fn load_merged(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::MergedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let records: FxHashMap<Identifier, TrialRecord> =
            serde_json::from_str(&raw).map_err(|source| Error::MergedParse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            count = records.len(),
            path = %path.display(),
            "result store loaded from merged file"
        );
        Ok(Self { records })
    }

    /// Look up a loaded record.
    ///
    /// An unknown identifier means "no such run" and is an integrity
    /// failure; a loaded record whose fields are all absent means "run
    /// produced no usable metrics" and is not.
    ///
    /// # Errors
    /// [`Error::UnknownIdentifier`] when the identifier was never loaded.
    pub fn get(&self, identifier: &Identifier) -> Result<&TrialRecord> {
        self.records
            .get(identifier)
            .ok_or_else(|| Error::UnknownIdentifier(identifier.clone()))
    }

    /// Whether an identifier was loaded.
    #[must_use]
    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.records.contains_key(identifier)
    }

    /// Number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
