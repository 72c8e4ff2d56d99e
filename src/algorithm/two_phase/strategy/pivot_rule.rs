//! # Pivot rules
//!
//! Strategies for choosing the variable that enters the basis.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Field;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `LeavingRule`.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The column index of the entering variable with its relative cost, or `None` if no column
    /// has a relative cost that is negative beyond the tableau's tolerance.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Columns are considered in the order in which the tableau stores its non basic columns. That
/// order changes with every pivot, as the leaving variable takes the place of the entering one.
pub struct FirstProfitable;
impl<F: Field> PivotRule<F> for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        tableau.relative_costs()
            .into_iter()
            .find(|&(_, cost)| cost.is_negative_within(tableau.tolerance()))
    }
}

/// Pivot on the column with the lowest index among those with a negative relative cost.
///
/// This is Bland's rule for the entering variable.
pub struct SmallestIndex;
impl<F: Field> PivotRule<F> for SmallestIndex {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        tableau.relative_costs()
            .into_iter()
            .filter(|&(_, cost)| cost.is_negative_within(tableau.tolerance()))
            .min_by_key(|&(j, _)| j)
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
pub struct SteepestDescentAlongVariable;
impl<F: Field> PivotRule<F> for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let mut smallest: Option<(usize, F)> = None;
        for (j, cost) in tableau.relative_costs()
            .into_iter()
            .filter(|&(_, cost)| cost.is_negative_within(tableau.tolerance())) {
            match smallest.as_mut() {
                Some((existing_j, existing_cost)) => if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                },
                None => smallest = Some((j, cost)),
            }
        }

        smallest
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::config::LeavingRule;
    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, SmallestIndex, SteepestDescentAlongVariable};
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::tests::problem_1;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn first_profitable() {
        let problem = problem_1::standard_form();
        let mut tableau = Tableau::new(&problem, TOLERANCE).unwrap();
        let mut rule = <FirstProfitable as PivotRule<f64>>::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((0, -1_f64)));

        // After the first pivot, column 3 sits in front of column 1 but is not profitable
        let direction = tableau.basic_direction(0);
        let (row, step) = tableau.select_primal_pivot_row(&direction, LeavingRule::FirstMinimum).unwrap();
        tableau.bring_into_basis(0, row, &direction, step).unwrap();
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((1, -3_f64)));
    }

    #[test]
    fn smallest_index() {
        let problem = problem_1::standard_form();
        let tableau = Tableau::new(&problem, TOLERANCE).unwrap();
        let mut rule = <SmallestIndex as PivotRule<f64>>::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((0, -1_f64)));
    }

    #[test]
    fn steepest_descent_along_variable() {
        let problem = problem_1::standard_form();
        let tableau = Tableau::new(&problem, TOLERANCE).unwrap();
        let mut rule = <SteepestDescentAlongVariable as PivotRule<f64>>::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((1, -2_f64)));
    }

    #[test]
    fn optimal() {
        let problem = problem_1::standard_form();
        let mut tableau = Tableau::new(&problem, TOLERANCE).unwrap();
        for column in [0, 1, 3] {
            let direction = tableau.basic_direction(column);
            let (row, step) = tableau.select_primal_pivot_row(&direction, LeavingRule::FirstMinimum).unwrap();
            tableau.bring_into_basis(column, row, &direction, step).unwrap();
        }

        assert_eq!(<FirstProfitable as PivotRule<f64>>::new().select_primal_pivot_column(&tableau), None);
        assert_eq!(<SmallestIndex as PivotRule<f64>>::new().select_primal_pivot_column(&tableau), None);
        assert_eq!(<SteepestDescentAlongVariable as PivotRule<f64>>::new().select_primal_pivot_column(&tableau), None);
    }
}
