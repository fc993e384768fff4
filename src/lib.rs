//! # Planbench: Benchmark-Sweep Aggregation Engine
//!
//! Planbench turns an archive of planning-algorithm trial records (one
//! small JSON record per run) into statistical summaries and nested
//! comparison structures spanning a multi-dimensional configuration sweep:
//! algorithm variant × domain × instance × horizon × discretization bins ×
//! trial/expansion budget × repetition.
//!
//! ## Design Principles
//!
//! - **Deterministic keys**: a typed configuration encodes to the canonical
//!   identifier that names its archived record; the encoding is collision-free
//!   per algorithm and byte-stable across versions.
//! - **Absence is a value**: a metric missing from a run is an explicit
//!   absence marker that propagates through aggregation (any absent
//!   repetition makes the mean absent), never a crash and never a silent
//!   partial average.
//! - **Two failure tiers**: missing/malformed inputs and lookups of runs
//!   that were never loaded abort the whole computation; data-quality gaps
//!   surface as missing cells and dropped plot points instead.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use planbench::grid::{assemble, AlgorithmSweep, SweepPlan};
//! use planbench::key::TrialDpSolver;
//! use planbench::record::MetricField;
//! use planbench::store::ResultStore;
//!
//! let plan = SweepPlan {
//!     domains: vec!["baker".to_string()],
//!     instances: vec![101, 102],
//!     horizons: vec![3, 5, 7],
//!     algorithms: vec![
//!         AlgorithmSweep::GridVi { num_bins: vec![10] },
//!         AlgorithmSweep::TrialDp {
//!             solver: TrialDpSolver::Lrtdp,
//!             num_bins: vec![10],
//!             num_trials: vec![100, 1000, 10_000],
//!             num_reps: 5,
//!         },
//!     ],
//!     fields: vec![MetricField::ElapsedTime, MetricField::LegibilityCost],
//!     deviation_fields: vec![MetricField::LegibilityCost],
//! };
//!
//! // Every identifier the plan will ask for must be loaded up front.
//! let identifiers = planbench::grid::plan_identifiers(&plan)?;
//! let store = ResultStore::load_dir("results/merged", identifiers)?;
//! let grid = assemble(&store, &plan)?;
//! println!("{}", serde_json::to_string_pretty(&grid).unwrap());
//! # Ok::<(), planbench::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod aggregate;
pub mod error;
pub mod grid;
pub mod key;
pub mod record;
pub mod series;
pub mod store;

pub use error::{Error, Result};
