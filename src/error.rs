//! # Error reporting
//!
//! Whether a linear program is infeasible, unbounded or has an optimum is not an error: those are
//! the regular outcomes of the algorithm, see `algorithm::OptimizationResult`. The types in this
//! module describe the cases in which no such outcome could be computed.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::algorithm::two_phase::Phase;

/// A `SolveError` is created when the algorithm can't reach one of its regular outcomes.
///
/// It is the highest error in the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The problem is not a valid input, for example because dimensions don't match.
    Inconsistent(InconsistencyError),
    /// Rounding errors made it impossible to continue in a meaningful way.
    NumericalFailure(NumericalFailure),
    /// The maximum number of pivots was reached before an outcome was determined.
    IterationLimit {
        /// Phase that was running.
        phase: Phase,
        /// Number of pivots that were done in that phase.
        iterations: usize,
    },
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SolveError::Inconsistent(error) => error.fmt(f),
            SolveError::NumericalFailure(failure) => failure.fmt(f),
            SolveError::IterationLimit { phase, iterations } => write!(
                f, "IterationLimit: no outcome after {} pivots in phase {:?}", iterations, phase,
            ),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::Inconsistent(error) => Some(error),
            SolveError::NumericalFailure(failure) => Some(failure),
            SolveError::IterationLimit { .. } => None,
        }
    }
}

impl From<InconsistencyError> for SolveError {
    fn from(error: InconsistencyError) -> Self {
        SolveError::Inconsistent(error)
    }
}

impl From<NumericalFailure> for SolveError {
    fn from(failure: NumericalFailure) -> Self {
        SolveError::NumericalFailure(failure)
    }
}

/// Ways in which floating point computations can break the algorithm.
///
/// Values are converted to `f64` for reporting, regardless of the number type used.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalFailure {
    /// The pivot element is too close to zero to divide by.
    SingularPivot {
        /// Position in the basis of the variable that was about to leave.
        row: usize,
        /// The pivot element.
        value: f64,
    },
    /// A basic variable got an infinite or NaN value.
    NonFinite {
        /// Position in the basis.
        row: usize,
    },
    /// The maintained basis inverse is no longer an inverse of the basis matrix.
    InverseDrift {
        /// Largest deviation of `B^-1 B` from the identity.
        deviation: f64,
    },
    /// The basic solution no longer satisfies the constraints.
    ResidualDrift {
        /// Constraint that is violated the most.
        row: usize,
        /// The value of `(A_B x - b)[row]`.
        residual: f64,
    },
    /// A basic variable became negative.
    NegativeBasicValue {
        /// Position in the basis.
        row: usize,
        /// The negative value.
        value: f64,
    },
    /// A pivot made the objective function value larger.
    ObjectiveIncrease {
        /// Objective value before the pivot.
        before: f64,
        /// Objective value after the pivot.
        after: f64,
    },
    /// The auxiliary problem of the first phase, which is bounded by construction, was found to be
    /// unbounded.
    UnboundedAuxiliary,
}

impl Display for NumericalFailure {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "NumericalFailure: ")?;
        match self {
            NumericalFailure::SingularPivot { row, value } => write!(
                f, "pivot element {} at row {} is too close to zero", value, row,
            ),
            NumericalFailure::NonFinite { row } => write!(
                f, "basic variable at row {} is not finite", row,
            ),
            NumericalFailure::InverseDrift { deviation } => write!(
                f, "basis inverse deviates {} from an inverse", deviation,
            ),
            NumericalFailure::ResidualDrift { row, residual } => write!(
                f, "constraint {} is violated by {}", row, residual,
            ),
            NumericalFailure::NegativeBasicValue { row, value } => write!(
                f, "basic variable at row {} has negative value {}", row, value,
            ),
            NumericalFailure::ObjectiveIncrease { before, after } => write!(
                f, "objective value increased from {} to {}", before, after,
            ),
            NumericalFailure::UnboundedAuxiliary => write!(
                f, "the auxiliary problem of the first phase appears unbounded",
            ),
        }
    }
}

impl Error for NumericalFailure {}

/// An `InconsistencyError` is created when a linear program is inconsistently represented.
///
/// This `Error` is not returned when the linear program is infeasible or unbounded. It is meant
/// only for descriptions of linear programs, and should not be used after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> InconsistencyError {
        InconsistencyError { description: description.into() }
    }

    /// The human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Display for InconsistencyError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "InconsistencyError: {}", self.description)
    }
}

impl Error for InconsistencyError {}
