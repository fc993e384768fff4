//! End-to-end sweep comparison walkthrough.
//!
//! Writes a small synthetic result archive to a temp directory, loads it
//! into a store, assembles a comparison grid and extracts a plotting
//! series — the JSON printed at the end is exactly what a table renderer
//! consumes.
//!
//! Run with: cargo run --example compare_sweep

use std::fs;

use anyhow::{Context, Result};

use planbench::grid::{assemble, plan_identifiers, AlgorithmSweep, SweepPlan};
use planbench::key::{TreeSearchSolver, TrialDpSolver};
use planbench::record::MetricField;
use planbench::series::{extract, trial_dp_cells, XAxisSource};
use planbench::store::ResultStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Planbench Sweep Comparison ===\n");

    // -------------------------------------------------------------------------
    // 1. Describe the sweep
    // -------------------------------------------------------------------------
    println!("1. Describing the sweep...");

    let plan = SweepPlan {
        domains: vec!["baker".to_string()],
        instances: vec![101, 102],
        horizons: vec![5],
        algorithms: vec![
            AlgorithmSweep::GridVi {
                num_bins: vec![10],
            },
            AlgorithmSweep::TrialDp {
                solver: TrialDpSolver::Lrtdp,
                num_bins: vec![10],
                num_trials: vec![100, 1000, 10_000],
                num_reps: 5,
            },
            AlgorithmSweep::TreeSearch {
                solver: TreeSearchSolver::Mcts,
                num_expansions: vec![100, 1000, 10_000],
                num_reps: 5,
            },
        ],
        fields: vec![
            MetricField::ElapsedTime,
            MetricField::LegibilityCost,
            MetricField::NumStates,
        ],
        deviation_fields: vec![MetricField::LegibilityCost],
    };

    let identifiers = plan_identifiers(&plan)?;
    println!("   {} runs referenced by the plan", identifiers.len());

    // -------------------------------------------------------------------------
    // 2. Write a synthetic archive (stands in for real merged results)
    // -------------------------------------------------------------------------
    println!("\n2. Writing synthetic archive...");

    let archive = tempfile::tempdir().context("creating archive dir")?;
    for (i, identifier) in identifiers.iter().enumerate() {
        // A couple of runs without a cost, to show missing-cell handling.
        let legibility_cost = if i % 37 == 5 {
            "null".to_string()
        } else {
            format!("{:.3}", 20.0 - (i as f64).ln_1p())
        };
        let record = format!(
            r#"{{"elapsed_time": {:.4}, "legibility_cost": {legibility_cost}, "num_states": {}}}"#,
            0.01 * (i + 1) as f64,
            500 + i * 3,
        );
        fs::write(archive.path().join(identifier.as_str()), record)
            .with_context(|| format!("writing {identifier}"))?;
    }

    // -------------------------------------------------------------------------
    // 3. Load the store (fails hard on any missing or malformed file)
    // -------------------------------------------------------------------------
    println!("\n3. Loading result store...");

    let store = ResultStore::load_dir(archive.path(), identifiers)?;
    println!("   {} records loaded", store.len());

    // -------------------------------------------------------------------------
    // 4. Assemble the comparison grid
    // -------------------------------------------------------------------------
    println!("\n4. Assembling comparison grid...");

    let grid = assemble(&store, &plan)?;
    println!("   {} aggregate entries", grid.entry_count());
    println!("{}", serde_json::to_string_pretty(&grid)?);

    // -------------------------------------------------------------------------
    // 5. Extract an anytime series for plotting
    // -------------------------------------------------------------------------
    println!("\n5. Extracting anytime series (LRTDP, instance 101)...");

    let cells = trial_dp_cells(
        TrialDpSolver::Lrtdp,
        "baker",
        101,
        10,
        &[100, 1000, 10_000],
        5,
        5,
    )?;
    let series = extract(
        &store,
        &cells,
        MetricField::LegibilityCost,
        XAxisSource::ElapsedTime,
    )?;
    println!(
        "   {} of {} sweep points retained",
        series.len(),
        cells.len()
    );
    println!("{}", serde_json::to_string_pretty(&series)?);

    Ok(())
}
