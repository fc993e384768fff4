//! Aggregator — summary statistics over repeated trials.
//!
//! Pure functions of the store and their inputs; no I/O, which keeps the
//! whole layer testable without a file system.
//!
//! Null-propagation rule: if *any* collected value for a field is absent,
//! that field's mean is absent. A partial mean computed from a partial
//! subset would silently bias comparisons, so it is never produced.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::key::Identifier;
use crate::record::MetricField;
use crate::store::ResultStore;
use crate::Result;

/// Summary statistics for one metric field across repetitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    /// Arithmetic mean; absent when any repetition lacks the field or there
    /// are no repetitions.
    pub mean: Option<f64>,
    /// Sample standard deviation (n−1 denominator); exactly 0.0 for a
    /// single repetition; absent when the mean is absent or the field was
    /// not marked for variability reporting.
    pub std_dev: Option<f64>,
    /// Number of repetitions the summary was requested over (not the number
    /// of present values).
    pub count: usize,
}

/// Field-keyed summaries for one grid cell, in stable field order.
pub type SummaryMap = BTreeMap<MetricField, FieldSummary>;

/// Arithmetic mean; `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n−1 denominator).
///
/// Exactly `0.0` for a single value — a lone repetition has no observed
/// variability, which is different from "unknown". `None` for an empty
/// slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let center = mean(values)?;
    if values.len() == 1 {
        return Some(0.0);
    }
    let sum_sq: f64 = values.iter().map(|v| (v - center).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Aggregate the requested fields over `identifiers`, per field
/// independently and in the given order.
///
/// `deviation_fields` selects which fields also report a standard
/// deviation. An empty identifier sequence yields the absence marker for
/// every field — no repetitions means no data, not a domain error.
///
/// # Errors
/// [`crate::Error::UnknownIdentifier`] when any identifier was never
/// loaded; "no such run" aborts instead of degrading into a partial mean.
pub fn aggregate(
    store: &ResultStore,
    identifiers: &[Identifier],
    fields: &[MetricField],
    deviation_fields: &[MetricField],
) -> Result<SummaryMap> {
    let mut records = Vec::with_capacity(identifiers.len());
    for identifier in identifiers {
        records.push(store.get(identifier)?);
    }

    let mut summaries = SummaryMap::new();
    for &field in fields {
        // None as soon as any repetition lacks the field (or there are none)
        let complete: Option<Vec<f64>> = if records.is_empty() {
            None
        } else {
            records.iter().map(|record| record.get(field)).collect()
        };

        let mean_value = complete.as_deref().and_then(mean);
        let std_dev = if deviation_fields.contains(&field) {
            complete.as_deref().and_then(sample_std_dev)
        } else {
            None
        };

        summaries.insert(
            field,
            FieldSummary {
                mean: mean_value,
                std_dev,
                count: identifiers.len(),
            },
        );
    }
    Ok(summaries)
}
