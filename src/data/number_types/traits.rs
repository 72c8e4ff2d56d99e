//! # Traits
//!
//! The Simplex method is defined over an ordered field. Floating point numbers are only an
//! approximation of such a field: the contracts that the trait below implies are not kept exactly,
//! which is why every comparison against zero in the algorithm goes through a tolerance.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, NumAssign};

/// Number type that the algorithms compute with.
///
/// Automatically a `Float` with the assigning operators, so that the matrix and vector types can
/// be written once for both `f32` and `f64`.
pub trait Field: Float + NumAssign + Sum + Debug + Display + Send + Sync + 'static {
    /// Tolerance used when no other tolerance is configured.
    ///
    /// Values with an absolute value below this tolerance are treated as zero when deciding
    /// whether a cost is negative or whether a direction component restricts the step length.
    fn default_tolerance() -> Self;

    /// Whether this value is zero, up to the tolerance.
    fn is_zero_within(self, tolerance: Self) -> bool {
        debug_assert!(tolerance >= Self::zero());

        self.abs() <= tolerance
    }

    /// Whether this value is negative beyond the tolerance.
    fn is_negative_within(self, tolerance: Self) -> bool {
        debug_assert!(tolerance >= Self::zero());

        self < -tolerance
    }

    /// Lossy conversion, used only for reporting values in errors and logs.
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Field for f64 {
    fn default_tolerance() -> Self {
        1e-9
    }
}

impl Field for f32 {
    fn default_tolerance() -> Self {
        1e-5
    }
}
