//! Grid assembler — the full comparison sweep as a nested structure.
//!
//! Iterates domain → instance → horizon → algorithm → outer swept axis →
//! inner swept axis, in declared order, building the repetition identifier
//! sequence at the innermost level and aggregating it into one
//! [`AggregateEntry`] per cell. The output nests exactly as renderers
//! consume it; they must not re-derive statistics from it.
//!
//! A store lookup failure (identifier never loaded) aborts the whole
//! assembly. An absent metric value inside a loaded record is not a
//! failure; it propagates into an absent mean.

mod sweep;

pub use sweep::{AlgorithmSweep, SweepPlan};

use serde::Serialize;

use crate::aggregate::{aggregate, SummaryMap};
use crate::key::{
    Algorithm, Configuration, GridViConfig, Identifier, TreeSearchConfig, TreeSearchSolver,
    TrialDpConfig, TrialDpSolver,
};
use crate::store::ResultStore;
use crate::Result;

/// Swept-axis values that produced one aggregate entry.
///
/// Only the axes the owning algorithm actually sweeps are present, so
/// entries stay self-describing outside their container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AxisValues {
    /// Bin count, when the algorithm has a bin axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_bins: Option<u32>,
    /// Trial budget, for the trial-based DP family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_trials: Option<u64>,
    /// Expansion budget, for the tree-search family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_expansions: Option<u64>,
}

/// Summary statistics for one grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateEntry {
    /// The swept-axis values this cell was aggregated at.
    pub axes: AxisValues,
    /// Per-field summaries.
    pub summaries: SummaryMap,
}

/// One algorithm's cells: one row of entries per outer-axis value.
///
/// Rows and entries are positionally aligned with the declared axis lists,
/// never re-sorted. Single-axis sweeps produce exactly one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmComparison {
    /// Algorithm evaluated.
    pub algorithm: Algorithm,
    /// Entry rows, outer axis × inner axis.
    pub rows: Vec<Vec<AggregateEntry>>,
}

impl AlgorithmComparison {
    /// All entries, in sweep order.
    pub fn entries(&self) -> impl Iterator<Item = &AggregateEntry> {
        self.rows.iter().flatten()
    }
}

/// Algorithms compared at one horizon, in declared algorithm order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HorizonComparison {
    /// Planning horizon.
    pub horizon: u32,
    /// One comparison per algorithm sweep.
    pub algorithms: Vec<AlgorithmComparison>,
}

/// Horizons compared for one problem instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceComparison {
    /// Instance/assignment identifier.
    pub instance: u32,
    /// One comparison per horizon.
    pub horizons: Vec<HorizonComparison>,
}

/// Instances compared for one domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainComparison {
    /// Domain name.
    pub domain: String,
    /// One comparison per instance.
    pub instances: Vec<InstanceComparison>,
}

/// The full nested output of a sweep: domain → instance → horizon →
/// algorithm → rows of [`AggregateEntry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonGrid {
    /// One comparison per domain, in declared order.
    pub domains: Vec<DomainComparison>,
}

impl ComparisonGrid {
    /// Total number of aggregate-entry leaves.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.domains
            .iter()
            .flat_map(|domain| &domain.instances)
            .flat_map(|instance| &instance.horizons)
            .flat_map(|horizon| &horizon.algorithms)
            .map(|algorithm| algorithm.entries().count())
            .sum()
    }
}

/// Assemble the comparison grid for `plan` against `store`.
///
/// With the `rayon` feature, domains are assembled in parallel: all cells
/// are independent pure computations over the shared read-only store, so
/// the output is identical to sequential evaluation.
///
/// # Errors
/// Any identifier-encoding failure or store lookup of a run that was never
/// loaded aborts the whole assembly; no partial grid is produced.
pub fn assemble(store: &ResultStore, plan: &SweepPlan) -> Result<ComparisonGrid> {
    #[cfg(feature = "rayon")]
    let domains = {
        use rayon::prelude::*;
        plan.domains
            .par_iter()
            .map(|domain| assemble_domain(store, plan, domain))
            .collect::<Result<Vec<_>>>()?
    };
    #[cfg(not(feature = "rayon"))]
    let domains = plan
        .domains
        .iter()
        .map(|domain| assemble_domain(store, plan, domain))
        .collect::<Result<Vec<_>>>()?;

    Ok(ComparisonGrid { domains })
}

fn assemble_domain(store: &ResultStore, plan: &SweepPlan, domain: &str) -> Result<DomainComparison> {
    let mut instances = Vec::with_capacity(plan.instances.len());
    for &instance in &plan.instances {
        let mut horizons = Vec::with_capacity(plan.horizons.len());
        for &horizon in &plan.horizons {
            let mut algorithms = Vec::with_capacity(plan.algorithms.len());
            for algorithm_sweep in &plan.algorithms {
                algorithms.push(assemble_algorithm(
                    store,
                    plan,
                    domain,
                    instance,
                    horizon,
                    algorithm_sweep,
                )?);
            }
            horizons.push(HorizonComparison {
                horizon,
                algorithms,
            });
        }
        instances.push(InstanceComparison { instance, horizons });
    }
    Ok(DomainComparison {
        domain: domain.to_string(),
        instances,
    })
}

fn assemble_algorithm(
    store: &ResultStore,
    plan: &SweepPlan,
    domain: &str,
    instance: u32,
    horizon: u32,
    sweep: &AlgorithmSweep,
) -> Result<AlgorithmComparison> {
    let rows = match sweep {
        AlgorithmSweep::GridVi { num_bins } => {
            let mut row = Vec::with_capacity(num_bins.len());
            for &bins in num_bins {
                let identifier = Configuration::GridVi(GridViConfig {
                    domain: domain.to_string(),
                    instance,
                    num_bins: bins,
                    horizon,
                })
                .encode()?;
                row.push(assemble_cell(
                    store,
                    plan,
                    std::slice::from_ref(&identifier),
                    AxisValues {
                        num_bins: Some(bins),
                        ..AxisValues::default()
                    },
                )?);
            }
            vec![row]
        }
        AlgorithmSweep::TrialDp {
            solver,
            num_bins,
            num_trials,
            num_reps,
        } => {
            let mut rows = Vec::with_capacity(num_bins.len());
            for &bins in num_bins {
                let mut row = Vec::with_capacity(num_trials.len());
                for &trials in num_trials {
                    let identifiers =
                        trial_dp_repetitions(*solver, domain, instance, bins, trials, horizon, *num_reps)?;
                    row.push(assemble_cell(
                        store,
                        plan,
                        &identifiers,
                        AxisValues {
                            num_bins: Some(bins),
                            num_trials: Some(trials),
                            num_expansions: None,
                        },
                    )?);
                }
                rows.push(row);
            }
            rows
        }
        AlgorithmSweep::TreeSearch {
            solver,
            num_expansions,
            num_reps,
        } => {
            let mut row = Vec::with_capacity(num_expansions.len());
            for &expansions in num_expansions {
                let identifiers =
                    tree_search_repetitions(*solver, domain, instance, expansions, horizon, *num_reps)?;
                row.push(assemble_cell(
                    store,
                    plan,
                    &identifiers,
                    AxisValues {
                        num_expansions: Some(expansions),
                        ..AxisValues::default()
                    },
                )?);
            }
            vec![row]
        }
    };

    Ok(AlgorithmComparison {
        algorithm: sweep.algorithm(),
        rows,
    })
}

fn assemble_cell(
    store: &ResultStore,
    plan: &SweepPlan,
    identifiers: &[Identifier],
    axes: AxisValues,
) -> Result<AggregateEntry> {
    let summaries = aggregate(store, identifiers, &plan.fields, &plan.deviation_fields)?;
    Ok(AggregateEntry { axes, summaries })
}

/// Every identifier `plan` will request, in sweep order.
///
/// The store must contain every run the plan references before assembly
/// begins; this is the loading list for [`ResultStore::load_dir`].
///
/// # Errors
/// [`crate::Error::InvalidAxisValue`] when a domain contains an
/// encoding-reserved character.
pub fn plan_identifiers(plan: &SweepPlan) -> Result<Vec<Identifier>> {
    let mut identifiers = Vec::new();
    for domain in &plan.domains {
        for &instance in &plan.instances {
            for &horizon in &plan.horizons {
                for sweep in &plan.algorithms {
                    match sweep {
                        AlgorithmSweep::GridVi { num_bins } => {
                            for &bins in num_bins {
                                identifiers.push(
                                    Configuration::GridVi(GridViConfig {
                                        domain: domain.clone(),
                                        instance,
                                        num_bins: bins,
                                        horizon,
                                    })
                                    .encode()?,
                                );
                            }
                        }
                        AlgorithmSweep::TrialDp {
                            solver,
                            num_bins,
                            num_trials,
                            num_reps,
                        } => {
                            for &bins in num_bins {
                                for &trials in num_trials {
                                    identifiers.extend(trial_dp_repetitions(
                                        *solver, domain, instance, bins, trials, horizon,
                                        *num_reps,
                                    )?);
                                }
                            }
                        }
                        AlgorithmSweep::TreeSearch {
                            solver,
                            num_expansions,
                            num_reps,
                        } => {
                            for &expansions in num_expansions {
                                identifiers.extend(tree_search_repetitions(
                                    *solver, domain, instance, expansions, horizon, *num_reps,
                                )?);
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(identifiers)
}

/// Repetition identifiers for one trial-based DP cell, rep 0..n−1.
pub(crate) fn trial_dp_repetitions(
    solver: TrialDpSolver,
    domain: &str,
    instance: u32,
    num_bins: u32,
    num_trials: u64,
    horizon: u32,
    num_reps: u32,
) -> Result<Vec<Identifier>> {
    (0..num_reps)
        .map(|rep| {
            Configuration::TrialDp(TrialDpConfig {
                solver,
                domain: domain.to_string(),
                instance,
                num_bins,
                num_trials,
                horizon,
                rep,
            })
            .encode()
        })
        .collect()
}

/// Repetition identifiers for one tree-search point, rep 0..n−1.
pub(crate) fn tree_search_repetitions(
    solver: TreeSearchSolver,
    domain: &str,
    instance: u32,
    num_expansions: u64,
    horizon: u32,
    num_reps: u32,
) -> Result<Vec<Identifier>> {
    (0..num_reps)
        .map(|rep| {
            Configuration::TreeSearch(TreeSearchConfig {
                solver,
                domain: domain.to_string(),
                instance,
                num_expansions,
                horizon,
                rep,
            })
            .encode()
        })
        .collect()
}
