//! End-to-end aggregation scenarios.
//!
//! The reference configuration throughout: labeled trial-based DP on domain
//! "x", instance 101, bin count 10, trial budget 1000, horizon 5, five
//! repetitions.

use planbench::aggregate::{aggregate, mean, sample_std_dev};
use planbench::key::{Configuration, Identifier, TrialDpConfig, TrialDpSolver};
use planbench::record::{MetricField, TrialRecord};
use planbench::store::ResultStore;

fn rep_identifier(rep: u32) -> Identifier {
    Configuration::TrialDp(TrialDpConfig {
        solver: TrialDpSolver::Lrtdp,
        domain: "x".to_string(),
        instance: 101,
        num_bins: 10,
        num_trials: 1000,
        horizon: 5,
        rep,
    })
    .encode()
    .unwrap()
}

fn store_with_costs(costs: &[Option<f64>]) -> (ResultStore, Vec<Identifier>) {
    let identifiers: Vec<Identifier> = (0..costs.len() as u32).map(rep_identifier).collect();
    let records = identifiers
        .iter()
        .cloned()
        .zip(costs.iter().map(|&cost| TrialRecord {
            cost,
            elapsed_time: Some(0.5),
            ..TrialRecord::default()
        }));
    (ResultStore::from_records(records), identifiers)
}

#[test]
fn test_five_repetitions_mean_and_sample_std_dev() {
    let (store, identifiers) =
        store_with_costs(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]);

    let summaries = aggregate(
        &store,
        &identifiers,
        &[MetricField::Cost, MetricField::ElapsedTime],
        &[MetricField::Cost],
    )
    .unwrap();

    let cost = &summaries[&MetricField::Cost];
    assert_eq!(cost.mean, Some(3.0));
    assert_eq!(cost.count, 5);
    let std_dev = cost.std_dev.unwrap();
    assert!((std_dev - 1.5811388300841898).abs() < 1e-12, "{std_dev}");

    // elapsed_time was not marked for variability reporting
    let elapsed = &summaries[&MetricField::ElapsedTime];
    assert_eq!(elapsed.mean, Some(0.5));
    assert_eq!(elapsed.std_dev, None);
}

#[test]
fn test_one_absent_repetition_poisons_the_mean() {
    let (store, identifiers) =
        store_with_costs(&[Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)]);

    let summaries = aggregate(&store, &identifiers, &[MetricField::Cost], &[MetricField::Cost])
        .unwrap();

    let cost = &summaries[&MetricField::Cost];
    assert_eq!(cost.mean, None);
    assert_eq!(cost.std_dev, None);
    // The unaffected field still aggregates.
    let summaries = aggregate(&store, &identifiers, &[MetricField::ElapsedTime], &[]).unwrap();
    assert_eq!(summaries[&MetricField::ElapsedTime].mean, Some(0.5));
}

#[test]
fn test_empty_identifier_sequence_is_all_absent_not_an_error() {
    let (store, _) = store_with_costs(&[Some(1.0)]);

    let summaries = aggregate(
        &store,
        &[],
        &[MetricField::Cost, MetricField::NumStates],
        &[MetricField::Cost],
    )
    .unwrap();

    for (field, summary) in &summaries {
        assert_eq!(summary.mean, None, "{field}");
        assert_eq!(summary.std_dev, None, "{field}");
        assert_eq!(summary.count, 0, "{field}");
    }
}

#[test]
fn test_single_repetition_reports_zero_deviation() {
    let (store, identifiers) = store_with_costs(&[Some(7.0)]);

    let summaries =
        aggregate(&store, &identifiers, &[MetricField::Cost], &[MetricField::Cost]).unwrap();

    let cost = &summaries[&MetricField::Cost];
    assert_eq!(cost.mean, Some(7.0));
    assert_eq!(cost.std_dev, Some(0.0));
    assert_eq!(cost.count, 1);
}

#[test]
fn test_helper_statistics_match_reference_formulas() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(mean(&values), Some(5.0));
    // Sample variance of the set above is 32/7.
    let expected = (32.0_f64 / 7.0).sqrt();
    assert!((sample_std_dev(&values).unwrap() - expected).abs() < 1e-12);
}
