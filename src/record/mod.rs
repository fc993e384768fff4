//! Trial record schema — parsed metrics for one planning run.
//!
//! Records are produced by the external run-output extractor. Every field of
//! the serialized form is either a number or an explicit `null`; a key
//! missing from the source is equivalent to `null`. Absence is data, not an
//! error: it becomes the absence marker (`None`) and propagates through
//! aggregation per the null-propagation rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named numeric fields of a [`TrialRecord`].
///
/// The set is fixed by the run-output extractor contract; ordering follows
/// declaration order and is only used for deterministic output maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    /// Wall-clock planning time in seconds.
    ElapsedTime,
    /// Execution cost of the produced plan.
    Cost,
    /// Legibility-augmented execution cost.
    LegibilityCost,
    /// Value estimate at the search root.
    RootValue,
    /// Value of simulating the plan under the belief model.
    BeliefSimulatedValue,
    /// Value of simulating the plan on the underlying domain.
    DomainSimulatedValue,
    /// Exact value of the plan on the underlying domain.
    DomainValue,
    /// Number of states expanded by the solver.
    NumStates,
    /// Number of underlying domain states touched.
    NumDomainStates,
    /// Number of LP sub-problems solved.
    NumLpSolved,
}

impl MetricField {
    /// All fields, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::ElapsedTime,
        Self::Cost,
        Self::LegibilityCost,
        Self::RootValue,
        Self::BeliefSimulatedValue,
        Self::DomainSimulatedValue,
        Self::DomainValue,
        Self::NumStates,
        Self::NumDomainStates,
        Self::NumLpSolved,
    ];

    /// Field name as it appears in serialized records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ElapsedTime => "elapsed_time",
            Self::Cost => "cost",
            Self::LegibilityCost => "legibility_cost",
            Self::RootValue => "root_value",
            Self::BeliefSimulatedValue => "belief_simulated_value",
            Self::DomainSimulatedValue => "domain_simulated_value",
            Self::DomainValue => "domain_value",
            Self::NumStates => "num_states",
            Self::NumDomainStates => "num_domain_states",
            Self::NumLpSolved => "num_lp_solved",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed metrics for one trial run, fields individually nullable.
///
/// State counts are integers at the source but only ever feed means, so all
/// fields are stored as `f64`. Records are immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialRecord {
    /// Wall-clock planning time in seconds.
    pub elapsed_time: Option<f64>,
    /// Execution cost of the produced plan.
    pub cost: Option<f64>,
    /// Legibility-augmented execution cost.
    pub legibility_cost: Option<f64>,
    /// Value estimate at the search root.
    pub root_value: Option<f64>,
    /// Value of simulating the plan under the belief model.
    pub belief_simulated_value: Option<f64>,
    /// Value of simulating the plan on the underlying domain.
    pub domain_simulated_value: Option<f64>,
    /// Exact value of the plan on the underlying domain.
    pub domain_value: Option<f64>,
    /// Number of states expanded by the solver.
    pub num_states: Option<f64>,
    /// Number of underlying domain states touched.
    pub num_domain_states: Option<f64>,
    /// Number of LP sub-problems solved.
    pub num_lp_solved: Option<f64>,
}

impl TrialRecord {
    /// Read one field by name.
    #[must_use]
    pub const fn get(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::ElapsedTime => self.elapsed_time,
            MetricField::Cost => self.cost,
            MetricField::LegibilityCost => self.legibility_cost,
            MetricField::RootValue => self.root_value,
            MetricField::BeliefSimulatedValue => self.belief_simulated_value,
            MetricField::DomainSimulatedValue => self.domain_simulated_value,
            MetricField::DomainValue => self.domain_value,
            MetricField::NumStates => self.num_states,
            MetricField::NumDomainStates => self.num_domain_states,
            MetricField::NumLpSolved => self.num_lp_solved,
        }
    }

    /// True when every field is the absence marker.
    #[must_use]
    pub fn is_all_absent(&self) -> bool {
        MetricField::ALL.iter().all(|&field| self.get(field).is_none())
    }
}
