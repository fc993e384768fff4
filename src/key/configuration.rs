//! Typed configurations and their identifier encodings.
//!
//! Each sweep family carries exactly the axes its algorithms use, so "all
//! required axes supplied, no defaults" holds by construction rather than by
//! runtime checks.

use super::{check_axis_value, Algorithm, Identifier, TreeSearchSolver, TrialDpSolver};
use crate::Result;

/// One grid-value-iteration evaluation.
///
/// Deterministic, so there is no repetition axis and no trial budget: the
/// swept axis is the bin count alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridViConfig {
    /// Problem domain name (free-form, minus encoding-reserved characters).
    pub domain: String,
    /// Instance/assignment identifier within the domain.
    pub instance: u32,
    /// Belief-discretization bin count.
    pub num_bins: u32,
    /// Planning horizon.
    pub horizon: u32,
}

impl GridViConfig {
    /// Encode into the canonical identifier.
    ///
    /// # Errors
    /// [`crate::Error::InvalidAxisValue`] when the domain contains an
    /// encoding-reserved character.
    pub fn encode(&self) -> Result<Identifier> {
        check_axis_value("domain", &self.domain)?;
        Ok(Identifier::from_encoded(format!(
            "{}_{}_{}_{}_{}.json",
            Algorithm::GridVi.prefix(),
            self.domain,
            self.instance,
            self.num_bins,
            self.horizon
        )))
    }
}

/// One run of a trial-based DP solver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrialDpConfig {
    /// Which DP solver produced the run.
    pub solver: TrialDpSolver,
    /// Problem domain name (free-form, minus encoding-reserved characters).
    pub domain: String,
    /// Instance/assignment identifier within the domain.
    pub instance: u32,
    /// Belief-discretization bin count.
    pub num_bins: u32,
    /// Trial budget.
    pub num_trials: u64,
    /// Planning horizon.
    pub horizon: u32,
    /// Repetition index.
    pub rep: u32,
}

impl TrialDpConfig {
    /// Encode into the canonical identifier.
    ///
    /// # Errors
    /// [`crate::Error::InvalidAxisValue`] when the domain contains an
    /// encoding-reserved character.
    pub fn encode(&self) -> Result<Identifier> {
        check_axis_value("domain", &self.domain)?;
        Ok(Identifier::from_encoded(format!(
            "{}_{}_{}_{}_{}_{}_{}.json",
            self.solver.algorithm().prefix(),
            self.domain,
            self.instance,
            self.num_bins,
            self.num_trials,
            self.horizon,
            self.rep
        )))
    }
}

/// One run of a tree-search solver.
///
/// Tree search samples the belief directly, so there is no bin axis; the
/// budget axis counts node expansions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeSearchConfig {
    /// Which tree-search solver produced the run.
    pub solver: TreeSearchSolver,
    /// Problem domain name (free-form, minus encoding-reserved characters).
    pub domain: String,
    /// Instance/assignment identifier within the domain.
    pub instance: u32,
    /// Node-expansion budget.
    pub num_expansions: u64,
    /// Planning horizon.
    pub horizon: u32,
    /// Repetition index.
    pub rep: u32,
}

impl TreeSearchConfig {
    /// Encode into the canonical identifier.
    ///
    /// # Errors
    /// [`crate::Error::InvalidAxisValue`] when the domain contains an
    /// encoding-reserved character.
    pub fn encode(&self) -> Result<Identifier> {
        check_axis_value("domain", &self.domain)?;
        Ok(Identifier::from_encoded(format!(
            "{}_{}_{}_{}_{}_{}.json",
            self.solver.algorithm().prefix(),
            self.domain,
            self.instance,
            self.num_expansions,
            self.horizon,
            self.rep
        )))
    }
}

/// The tuple of axis values identifying one trial run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Configuration {
    /// Bin-count sweep family.
    GridVi(GridViConfig),
    /// Bins × trial-budget sweep family.
    TrialDp(TrialDpConfig),
    /// Expansion-budget sweep family.
    TreeSearch(TreeSearchConfig),
}

impl Configuration {
    /// The algorithm this configuration belongs to.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::GridVi(_) => Algorithm::GridVi,
            Self::TrialDp(config) => config.solver.algorithm(),
            Self::TreeSearch(config) => config.solver.algorithm(),
        }
    }

    /// Encode into the canonical identifier.
    ///
    /// # Errors
    /// [`crate::Error::InvalidAxisValue`] when the domain contains an
    /// encoding-reserved character.
    pub fn encode(&self) -> Result<Identifier> {
        match self {
            Self::GridVi(config) => config.encode(),
            Self::TrialDp(config) => config.encode(),
            Self::TreeSearch(config) => config.encode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_vi_encoding_is_archive_stable() {
        let identifier = GridViConfig {
            domain: "baker".to_string(),
            instance: 101,
            num_bins: 10,
            horizon: 5,
        }
        .encode()
        .unwrap();
        assert_eq!(identifier.as_str(), "grid_vi_baker_101_10_5.json");
    }

    #[test]
    fn test_trial_dp_encoding_is_archive_stable() {
        let identifier = TrialDpConfig {
            solver: TrialDpSolver::LrtdpD,
            domain: "spelling".to_string(),
            instance: 901,
            num_bins: 8,
            num_trials: 50_000,
            horizon: 7,
            rep: 3,
        }
        .encode()
        .unwrap();
        assert_eq!(identifier.as_str(), "lrtdp_d_spelling_901_8_50000_7_3.json");
    }

    #[test]
    fn test_tree_search_encoding_is_archive_stable() {
        let identifier = TreeSearchConfig {
            solver: TreeSearchSolver::MctsFull,
            domain: "recycle".to_string(),
            instance: 1,
            num_expansions: 1_000_000,
            horizon: 20,
            rep: 0,
        }
        .encode()
        .unwrap();
        assert_eq!(identifier.as_str(), "mcts_full_recycle_1_1000000_20_0.json");
    }

    #[test]
    fn test_encode_rejects_reserved_domain() {
        let config = GridViConfig {
            domain: "baker_grid".to_string(),
            instance: 1,
            num_bins: 4,
            horizon: 3,
        };
        assert!(config.encode().is_err());
    }

    #[test]
    fn test_discounted_prefix_never_shadows_base_solver() {
        // A discounted-variant identifier can never be produced by the base
        // solver: that would require the domain "d", plus one extra token.
        let discounted = TrialDpConfig {
            solver: TrialDpSolver::RtdpD,
            domain: "baker".to_string(),
            instance: 1,
            num_bins: 4,
            num_trials: 100,
            horizon: 3,
            rep: 0,
        }
        .encode()
        .unwrap();
        let base = TrialDpConfig {
            solver: TrialDpSolver::Rtdp,
            domain: "d".to_string(),
            instance: 1,
            num_bins: 4,
            num_trials: 100,
            horizon: 3,
            rep: 0,
        }
        .encode()
        .unwrap();
        assert_ne!(discounted, base);
    }
}
