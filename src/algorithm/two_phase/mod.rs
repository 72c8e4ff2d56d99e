//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the revised two-phase Simplex
//! method. The basis inverse is kept explicitly and updated with an eta matrix after every pivot.
use enum_map::{Enum, EnumMap};
use log::debug;

use crate::algorithm::{Basis, OptimizationResult, SolveReport};
use crate::algorithm::two_phase::config::SolverConfig;
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::phase_two::{primal, PrimalOutcome};
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Field;
use crate::error::SolveError;

pub mod config;
pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


/// The two phases of the two-phase method.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Finding a basic feasible solution.
    ///
    /// When a problem is solved starting in this phase, its last `m` columns should form an
    /// identity matrix and its right-hand side should be nonnegative, such that those columns are
    /// a basic feasible solution. This is how the auxiliary problem is solved.
    One,
    /// Optimizing the objective, starting from a basic feasible solution found in the first phase.
    Two,
}

impl From<i32> for Phase {
    /// Phase marker as an integer: `1` means the first phase, anything else the second.
    fn from(marker: i32) -> Self {
        match marker {
            1 => Phase::One,
            _ => Phase::Two,
        }
    }
}

/// Solver for a problem in standard form.
///
/// Every call to `solve` starts from scratch and owns its basis while it runs, such that a single
/// instance can be used to solve the problem many times.
#[derive(Clone, Debug)]
pub struct Simplex<F> {
    problem: StandardForm<F>,
    phase: Phase,
    config: SolverConfig<F>,
}

impl<F: Field> Simplex<F> {
    /// Create a new solver with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem in standard form.
    /// * `phase`: `Phase::Two` for a general problem. `Phase::One` for a problem of which the last
    /// columns form a feasible identity basis; no artificial variables are added.
    pub fn new(problem: StandardForm<F>, phase: Phase) -> Self {
        Self { problem, phase, config: SolverConfig::default() }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig<F>) -> Self {
        self.config = config;
        self
    }

    /// The problem being solved.
    pub fn problem(&self) -> &StandardForm<F> {
        &self.problem
    }

    /// The current configuration.
    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }

    /// Solve the problem with the default pivot rule.
    ///
    /// # Return value
    ///
    /// Whether the problem is infeasible, unbounded or has an optimum. An error only if no such
    /// conclusion could be reached.
    pub fn solve(&self) -> Result<OptimizationResult<F>, SolveError> {
        self.solve_with_report().map(SolveReport::into_result)
    }

    /// Solve the problem with the default pivot rule, also reporting the iteration counts.
    pub fn solve_with_report(&self) -> Result<SolveReport<F>, SolveError> {
        self.solve_with_rule::<FirstProfitable>()
    }

    /// Solve the problem, choosing entering variables with a specific pivot rule.
    pub fn solve_with_rule<PR: PivotRule<F>>(&self) -> Result<SolveReport<F>, SolveError> {
        let mut iterations = EnumMap::default();
        let result = match self.phase {
            Phase::One => self.solve_from_identity_basis::<PR>(&mut iterations[Phase::One])?,
            Phase::Two => self.solve_two_phases::<PR>(&mut iterations)?,
        };

        debug!(
            "solved: {}, {} pivots in phase one, {} in phase two",
            describe(&result), iterations[Phase::One], iterations[Phase::Two],
        );
        Ok(SolveReport::new(result, iterations))
    }

    /// Run the pivot loop from the basis formed by the last `m` columns.
    fn solve_from_identity_basis<PR: PivotRule<F>>(
        &self,
        iterations: &mut usize,
    ) -> Result<OptimizationResult<F>, SolveError> {
        let tableau = Tableau::new(&self.problem, self.config.tolerance)?;
        if self.config.check_invariants {
            tableau.check_basic_feasible_solution_state()?;
        }

        finish::<F, PR>(tableau, Phase::One, &self.config, iterations, Vec::new())
    }

    fn solve_two_phases<PR: PivotRule<F>>(
        &self,
        iterations: &mut EnumMap<Phase, usize>,
    ) -> Result<OptimizationResult<F>, SolveError> {
        let feasibility = phase_one::compute_bfs::<F, PR>(
            &self.problem, &self.config, &mut iterations[Phase::One],
        )?;

        match feasibility {
            RankedFeasibilityResult::Feasible {
                rank,
                inverse_maintainer,
                basis_indices,
                non_basis_indices,
            } => {
                let rows_removed;
                let (provider, redundant_rows) = match rank {
                    Rank::Deficient(rows_to_remove) => {
                        rows_removed = self.problem.without_rows(&rows_to_remove);
                        (&rows_removed, rows_to_remove)
                    },
                    Rank::Full => (&self.problem, Vec::new()),
                };

                let tableau = Tableau::new_with_basis(
                    provider,
                    inverse_maintainer,
                    basis_indices,
                    non_basis_indices,
                    self.config.tolerance,
                );
                if self.config.check_invariants {
                    tableau.check_basic_feasible_solution_state()?;
                }

                finish::<F, PR>(tableau, Phase::Two, &self.config, &mut iterations[Phase::Two], redundant_rows)
            },
            RankedFeasibilityResult::Infeasible => Ok(OptimizationResult::Infeasible),
        }
    }
}

/// Run the pivot loop on a tableau with a basic feasible solution and collect the result.
fn finish<F: Field, PR: PivotRule<F>>(
    mut tableau: Tableau<F>,
    phase: Phase,
    config: &SolverConfig<F>,
    iterations: &mut usize,
    redundant_rows: Vec<usize>,
) -> Result<OptimizationResult<F>, SolveError> {
    let outcome = primal::<F, PR>(&mut tableau, phase, config, iterations)?;

    Ok(match outcome {
        PrimalOutcome::Optimal => {
            let objective = tableau.objective_function_value();
            OptimizationResult::FiniteOptimum {
                objective,
                basis: Basis::from_tableau(tableau, redundant_rows),
            }
        },
        PrimalOutcome::Unbounded { column } => {
            debug!("phase {:?}: column {} can be increased without bound", phase, column);
            OptimizationResult::Unbounded(Basis::from_tableau(tableau, redundant_rows))
        },
    })
}

fn describe<F: Field>(result: &OptimizationResult<F>) -> String {
    match result {
        OptimizationResult::Infeasible => "infeasible".to_string(),
        OptimizationResult::Unbounded(_) => "unbounded".to_string(),
        OptimizationResult::FiniteOptimum { objective, .. } => format!("optimal with objective {}", objective),
    }
}
