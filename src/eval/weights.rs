//! Evaluation weights and score breakdown

/// Weights for the six evaluation factors.
///
/// Each factor is a plain count over the position; the evaluation is the
/// sum of count x weight. `corner_adjacent` and `frontier` are penalties:
/// owning those cells exposes the side to future capture, so their default
/// weights are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    /// Weight per owned disc
    pub discs: i32,
    /// Weight per legal move available
    pub mobility: i32,
    /// Weight per stable owned disc
    pub stability: i32,
    /// Weight per owned corner
    pub corners: i32,
    /// Weight per owned corner-adjacent cell (typically negative)
    pub corner_adjacent: i32,
    /// Weight per empty neighbor of an owned disc (typically negative)
    pub frontier: i32,
}

impl Default for Weights {
    fn default() -> Self {
        // Corner control dominates; mobility and stability carry the
        // midgame; raw disc count barely matters until the end.
        Self {
            discs: 1,
            mobility: 4,
            stability: 6,
            corners: 25,
            corner_adjacent: -8,
            frontier: -2,
        }
    }
}

/// Per-factor contribution to an evaluation, after weighting.
///
/// Shown in the GUI debug panel; the engine itself only consumes `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub discs: i32,
    pub mobility: i32,
    pub stability: i32,
    pub corners: i32,
    pub corner_adjacent: i32,
    pub frontier: i32,
}

impl ScoreBreakdown {
    /// The full positional score: the sum of all weighted factors.
    pub fn total(&self) -> i32 {
        self.discs
            + self.mobility
            + self.stability
            + self.corners
            + self.corner_adjacent
            + self.frontier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weight_hierarchy() {
        let w = Weights::default();
        assert!(w.corners > w.stability);
        assert!(w.stability > w.discs);
        assert!(w.corner_adjacent < 0, "corner-adjacency is a penalty");
        assert!(w.frontier < 0, "frontier exposure is a penalty");
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = ScoreBreakdown {
            discs: 10,
            mobility: 20,
            stability: 12,
            corners: 25,
            corner_adjacent: -16,
            frontier: -6,
        };
        assert_eq!(breakdown.total(), 45);
    }
}
