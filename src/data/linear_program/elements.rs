//! # Building blocks to describe linear programs.
use std::convert::TryFrom;

use crate::error::InconsistencyError;

/// The type of (in)equality a constraint had before it was brought into standard form.
///
/// Encoded by callers as `-1`, `0` and `1`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InequalitySign {
    Less,
    Equal,
    Greater,
}

impl TryFrom<i8> for InequalitySign {
    type Error = InconsistencyError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(InequalitySign::Less),
            0 => Ok(InequalitySign::Equal),
            1 => Ok(InequalitySign::Greater),
            other => Err(InconsistencyError::new(format!(
                "inequality sign should be -1, 0 or 1, not {}", other,
            ))),
        }
    }
}

impl From<InequalitySign> for i8 {
    fn from(sign: InequalitySign) -> Self {
        match sign {
            InequalitySign::Less => -1,
            InequalitySign::Equal => 0,
            InequalitySign::Greater => 1,
        }
    }
}
