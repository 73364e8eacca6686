//! Equations in one variable `X`: validation, like-term collection, reduced form and closed form
//! solutions up to degree 2.
//!
//! # Example
//! ```
//! use RustedComputor::polynomial::equation_api::Computor;
//! use RustedComputor::polynomial::solver::Solution;
//! let report = Computor::new().run("1 * X^2 - 2 * X^1 + 1 * X^0 = 0").unwrap();
//! assert_eq!(report.reduced.degree(), Some(2));
//! assert!(matches!(report.solution, Some(Solution::DoubleRoot { .. })));
//! println!("{}", report);
//! ```
/// integer-or-float coefficient with exact integer arithmetic
pub mod coefficient;
/// pipeline entry point and command line argument handling
pub mod equation_api;
/// "Reduced form: ... = 0" rendering
pub mod formatter;
/// nom scanner: grammar validation and term tokens
pub mod parse_equation;
pub mod poly_errors;
/// degree dispatch and discriminant analysis
pub mod solver;
/// settings read from a task document
pub mod solver_config;
/// term extraction, like-term collection and normalization to P(X) = 0
pub mod term_map;
