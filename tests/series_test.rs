//! Series extraction: skip-on-missing and positional alignment.

use planbench::key::{TreeSearchSolver, TrialDpSolver};
use planbench::record::{MetricField, TrialRecord};
use planbench::series::{extract, trial_dp_cells, tree_search_cells, SweepCell, XAxisSource};
use planbench::store::ResultStore;

const BUDGETS: [u64; 4] = [100, 1000, 10_000, 100_000];
const NUM_REPS: u32 = 3;

/// Store for an LRTDP trial-budget sweep where `absent_points` have a
/// missing cost in one repetition.
fn lrtdp_sweep(absent_points: &[usize]) -> (ResultStore, Vec<SweepCell>) {
    let cells = trial_dp_cells(
        TrialDpSolver::Lrtdp,
        "baker",
        1,
        8,
        &BUDGETS,
        20,
        NUM_REPS,
    )
    .unwrap();

    let mut records = Vec::new();
    for (point, cell) in cells.iter().enumerate() {
        for (rep, identifier) in cell.identifiers.iter().enumerate() {
            let cost = if absent_points.contains(&point) && rep == 1 {
                None
            } else {
                Some(cell.axis_value / 100.0 + rep as f64)
            };
            records.push((
                identifier.clone(),
                TrialRecord {
                    cost,
                    elapsed_time: Some(cell.axis_value / 1000.0),
                    ..TrialRecord::default()
                },
            ));
        }
    }
    (ResultStore::from_records(records), cells)
}

#[test]
fn test_sequences_always_have_equal_length() {
    for absent in [&[][..], &[0_usize][..], &[1, 3][..], &[0, 1, 2, 3][..]] {
        let (store, cells) = lrtdp_sweep(absent);
        let series =
            extract(&store, &cells, MetricField::Cost, XAxisSource::SweptValue).unwrap();

        assert_eq!(series.xs.len(), series.ys.len());
        assert_eq!(series.ys.len(), series.errors.len());
        assert_eq!(series.len(), BUDGETS.len() - absent.len());
    }
}

#[test]
fn test_point_dropped_iff_y_is_absent() {
    let (store, cells) = lrtdp_sweep(&[1]);
    let series = extract(&store, &cells, MetricField::Cost, XAxisSource::SweptValue).unwrap();

    // Budget 1000 is gone; the rest keep their declared order with no gap.
    assert_eq!(series.xs, vec![100.0, 10_000.0, 100_000.0]);
    for (x, y) in series.xs.iter().zip(&series.ys) {
        // mean over reps 0..3 of (x/100 + rep) = x/100 + 1
        assert!((y - (x / 100.0 + 1.0)).abs() < 1e-12);
    }
}

#[test]
fn test_elapsed_time_x_axis() {
    let (store, cells) = lrtdp_sweep(&[]);
    let series = extract(&store, &cells, MetricField::Cost, XAxisSource::ElapsedTime).unwrap();

    let expected: Vec<f64> = BUDGETS.iter().map(|&b| b as f64 / 1000.0).collect();
    assert_eq!(series.xs, expected);
}

#[test]
fn test_error_bars_are_sample_std_dev() {
    let (store, cells) = lrtdp_sweep(&[]);
    let series = extract(&store, &cells, MetricField::Cost, XAxisSource::SweptValue).unwrap();

    // y values per point are {c, c+1, c+2}: sample std dev is exactly 1.
    for err in &series.errors {
        assert!((err - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_tree_search_cells_sweep_expansions() {
    let cells = tree_search_cells(
        TreeSearchSolver::MctsFull,
        "av",
        2,
        &[100, 500],
        20,
        2,
    )
    .unwrap();

    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].axis_value, 100.0);
    assert_eq!(cells[0].identifiers.len(), 2);
    assert_eq!(
        cells[1].identifiers[1].as_str(),
        "mcts_full_av_2_500_20_1.json"
    );
}

#[test]
fn test_fully_absent_sweep_yields_empty_series() {
    let (store, cells) = lrtdp_sweep(&[0, 1, 2, 3]);
    let series = extract(&store, &cells, MetricField::Cost, XAxisSource::SweptValue).unwrap();
    assert!(series.is_empty());
}
