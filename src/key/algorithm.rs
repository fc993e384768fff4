//! Algorithm enumeration and encoding prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Planning-algorithm variants covered by a comparison sweep.
///
/// Declaration order is the fixed comparison order. Prefixes are part of the
/// stable archive format and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Grid-based value iteration over the discretized belief space.
    GridVi,
    /// Real-time dynamic programming.
    Rtdp,
    /// Labeled real-time dynamic programming.
    Lrtdp,
    /// Discounted RTDP variant.
    RtdpD,
    /// Discounted labeled RTDP variant.
    LrtdpD,
    /// Monte-Carlo tree search.
    Mcts,
    /// Tree search over the full joint space.
    MctsFull,
}

impl Algorithm {
    /// All variants, in fixed comparison order.
    pub const ALL: [Self; 7] = [
        Self::GridVi,
        Self::Rtdp,
        Self::Lrtdp,
        Self::RtdpD,
        Self::LrtdpD,
        Self::Mcts,
        Self::MctsFull,
    ];

    /// Identifier prefix (stable archive format).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::GridVi => "grid_vi",
            Self::Rtdp => "rtdp",
            Self::Lrtdp => "lrtdp",
            Self::RtdpD => "rtdp_d",
            Self::LrtdpD => "lrtdp_d",
            Self::Mcts => "mcts",
            Self::MctsFull => "mcts_full",
        }
    }

    /// Human-readable label for table and plot legends.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GridVi => "GridVI",
            Self::Rtdp => "RTDP",
            Self::Lrtdp => "LRTDP",
            Self::RtdpD => "RTDP-D",
            Self::LrtdpD => "LRTDP-D",
            Self::Mcts => "MCTS",
            Self::MctsFull => "MCTS-Full",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Solvers sharing the bins × trial-budget sweep shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialDpSolver {
    /// Real-time dynamic programming.
    Rtdp,
    /// Labeled real-time dynamic programming.
    Lrtdp,
    /// Discounted RTDP variant.
    RtdpD,
    /// Discounted labeled RTDP variant.
    LrtdpD,
}

impl TrialDpSolver {
    /// The corresponding algorithm tag.
    #[must_use]
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::Rtdp => Algorithm::Rtdp,
            Self::Lrtdp => Algorithm::Lrtdp,
            Self::RtdpD => Algorithm::RtdpD,
            Self::LrtdpD => Algorithm::LrtdpD,
        }
    }
}

/// Solvers sharing the expansion-budget sweep shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeSearchSolver {
    /// Monte-Carlo tree search.
    Mcts,
    /// Tree search over the full joint space.
    MctsFull,
}

impl TreeSearchSolver {
    /// The corresponding algorithm tag.
    #[must_use]
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::Mcts => Algorithm::Mcts,
            Self::MctsFull => Algorithm::MctsFull,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_are_distinct() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            for b in &Algorithm::ALL[i + 1..] {
                assert_ne!(a.prefix(), b.prefix());
            }
        }
    }

    #[test]
    fn test_solver_algorithm_mapping() {
        assert_eq!(TrialDpSolver::RtdpD.algorithm(), Algorithm::RtdpD);
        assert_eq!(TreeSearchSolver::MctsFull.algorithm(), Algorithm::MctsFull);
    }
}
