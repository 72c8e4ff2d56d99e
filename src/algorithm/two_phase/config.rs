//! # Solver configuration
//!
//! Tolerances, a cap on the number of pivots and the choice of leaving variable rule.
use crate::data::number_types::traits::Field;

/// How to choose between basic variables that reach the minimum ratio at the same time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LeavingRule {
    /// The first position in the basis that attains the minimum ratio.
    #[default]
    FirstMinimum,
    /// Among the positions that attain the minimum ratio (within tolerance), the one with the
    /// smallest basic variable index.
    ///
    /// Combined with the `SmallestIndex` entering rule, this is Bland's rule, which can't cycle.
    Bland,
}

/// Settings that the two-phase method reads while solving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<F> {
    /// Values within this distance of zero are treated as zero.
    pub tolerance: F,
    /// Maximum number of pivots in each of the two phases.
    ///
    /// `None` means that there is no maximum.
    pub iteration_limit: Option<usize>,
    /// Tie-breaking in the ratio test.
    pub leaving_rule: LeavingRule,
    /// Verify after every pivot that the basis inverse, the basic solution and the objective value
    /// are still consistent.
    pub check_invariants: bool,
}

impl<F: Field> SolverConfig<F> {
    /// Default iteration limit per phase.
    pub const DEFAULT_ITERATION_LIMIT: usize = 10_000;

    /// Set the tolerance.
    #[must_use]
    pub fn tolerance(mut self, tolerance: F) -> Self {
        debug_assert!(tolerance >= F::zero());

        self.tolerance = tolerance;
        self
    }

    /// Set the maximum number of pivots per phase, or remove the maximum with `None`.
    #[must_use]
    pub fn iteration_limit(mut self, limit: Option<usize>) -> Self {
        self.iteration_limit = limit;
        self
    }

    /// Set the rule to break ties in the ratio test.
    #[must_use]
    pub fn leaving_rule(mut self, rule: LeavingRule) -> Self {
        self.leaving_rule = rule;
        self
    }

    /// Turn the invariant checks after every pivot on or off.
    #[must_use]
    pub fn check_invariants(mut self, check: bool) -> Self {
        self.check_invariants = check;
        self
    }

    /// Whether another pivot is allowed after `iterations` pivots.
    pub(crate) fn allows_pivot(&self, iterations: usize) -> bool {
        self.iteration_limit.is_none_or(|limit| iterations < limit)
    }
}

impl<F: Field> Default for SolverConfig<F> {
    fn default() -> Self {
        Self {
            tolerance: F::default_tolerance(),
            iteration_limit: Some(Self::DEFAULT_ITERATION_LIMIT),
            leaving_rule: LeavingRule::default(),
            check_invariants: cfg!(debug_assertions),
        }
    }
}
