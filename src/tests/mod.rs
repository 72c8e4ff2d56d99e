//! # Tests that require a look inside the crate.
//!
//! Each module holds one small problem. Convention for function and constant names:
//!
//! * `fn standard_form()`: the problem itself
//! * `const OPTIMAL_OBJECTIVE`: its optimal objective value, if there is one
//! * `fn primal_solution()`: an optimal solution over all variables
