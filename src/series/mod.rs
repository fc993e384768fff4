//! Series extractor — aligned (x, y, error) sequences for plotting.
//!
//! A specialization of aggregation over a single swept axis. Unlike the
//! grid assembler, which keeps an incomplete cell and marks it absent, a
//! plotted series cannot represent an absent point, so incomplete sweep
//! points are dropped from all three sequences. Dropped points leave no
//! gap: the sequences stay positionally aligned to each other, not to the
//! original axis list.

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{mean, sample_std_dev};
use crate::grid::{trial_dp_repetitions, tree_search_repetitions};
use crate::key::{Identifier, TreeSearchSolver, TrialDpSolver};
use crate::record::MetricField;
use crate::store::ResultStore;
use crate::Result;

/// Which metric backs the x-axis of an extracted series.
///
/// Call-site configuration: the same sweep is plotted against wall-clock
/// time for anytime comparisons and against the swept budget for scaling
/// curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxisSource {
    /// Mean elapsed time across the point's repetitions.
    ElapsedTime,
    /// The swept-axis value itself.
    SweptValue,
}

/// One swept-axis point: the axis value and the repetition identifiers
/// behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepCell {
    /// Swept-axis value (trial budget, expansion budget, ...).
    pub axis_value: f64,
    /// Identifiers of the repetitions at this point.
    pub identifiers: Vec<Identifier>,
}

/// Aligned plotting sequences over one swept axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    /// X values (elapsed-time means or swept-axis values).
    pub xs: Vec<f64>,
    /// Y-metric means.
    pub ys: Vec<f64>,
    /// Symmetric error bars: sample standard deviation of the y-metric,
    /// 0.0 for a single repetition.
    pub errors: Vec<f64>,
}

impl Series {
    /// Number of retained points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ys.len()
    }

    /// Whether every point was dropped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }
}

/// Extract an aligned series over `cells`, in the given order.
///
/// A point whose y-metric aggregates to the absence marker is dropped from
/// all three sequences. With [`XAxisSource::ElapsedTime`], a point whose
/// elapsed-time mean is absent is likewise dropped — a plotted point cannot
/// carry an absent coordinate. With [`XAxisSource::SweptValue`] the x value
/// always exists, so the drop condition is exactly "y absent".
///
/// # Errors
/// [`crate::Error::UnknownIdentifier`] when any referenced run was never
/// loaded.
pub fn extract(
    store: &ResultStore,
    cells: &[SweepCell],
    y_field: MetricField,
    x_source: XAxisSource,
) -> Result<Series> {
    let mut series = Series::default();
    for cell in cells {
        let mut records = Vec::with_capacity(cell.identifiers.len());
        for identifier in &cell.identifiers {
            records.push(store.get(identifier)?);
        }

        let ys: Option<Vec<f64>> = if records.is_empty() {
            None
        } else {
            records.iter().map(|record| record.get(y_field)).collect()
        };
        let Some(ys) = ys else {
            debug!(
                axis_value = cell.axis_value,
                field = %y_field,
                "dropping sweep point with incomplete y data"
            );
            continue;
        };

        let x = match x_source {
            XAxisSource::SweptValue => Some(cell.axis_value),
            XAxisSource::ElapsedTime => {
                let times: Option<Vec<f64>> = records
                    .iter()
                    .map(|record| record.get(MetricField::ElapsedTime))
                    .collect();
                times.as_deref().and_then(mean)
            }
        };
        let Some(x) = x else {
            debug!(
                axis_value = cell.axis_value,
                "dropping sweep point with incomplete elapsed-time data"
            );
            continue;
        };

        let (Some(y_mean), Some(y_err)) = (mean(&ys), sample_std_dev(&ys)) else {
            continue;
        };
        series.xs.push(x);
        series.ys.push(y_mean);
        series.errors.push(y_err);
    }
    Ok(series)
}

/// Sweep cells for a trial-based DP solver swept over trial budgets at a
/// fixed bin count.
///
/// # Errors
/// [`crate::Error::InvalidAxisValue`] when the domain contains an
/// encoding-reserved character.
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::too_many_arguments)]
pub fn trial_dp_cells(
    solver: TrialDpSolver,
    domain: &str,
    instance: u32,
    num_bins: u32,
    num_trials: &[u64],
    horizon: u32,
    num_reps: u32,
) -> Result<Vec<SweepCell>> {
    num_trials
        .iter()
        .map(|&trials| {
            let identifiers = trial_dp_repetitions(
                solver, domain, instance, num_bins, trials, horizon, num_reps,
            )?;
            Ok(SweepCell {
                axis_value: trials as f64,
                identifiers,
            })
        })
        .collect()
}

/// Sweep cells for a tree-search solver swept over expansion budgets.
///
/// # Errors
/// [`crate::Error::InvalidAxisValue`] when the domain contains an
/// encoding-reserved character.
#[allow(clippy::cast_precision_loss)]
pub fn tree_search_cells(
    solver: TreeSearchSolver,
    domain: &str,
    instance: u32,
    num_expansions: &[u64],
    horizon: u32,
    num_reps: u32,
) -> Result<Vec<SweepCell>> {
    num_expansions
        .iter()
        .map(|&expansions| {
            let identifiers = tree_search_repetitions(
                solver, domain, instance, expansions, horizon, num_reps,
            )?;
            Ok(SweepCell {
                axis_value: expansions as f64,
                identifiers,
            })
        })
        .collect()
}
