//! Human readable rendering of reduced equations:
//! "Reduced form: 1 * X^0 + 4 * X^1 = 0" and "Polynomial degree: 1".
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::term_map::{ReducedEquation, TermMap};
use itertools::Itertools;
use std::fmt;

/// what the formatter reports for a reduced equation
#[derive(Debug, Clone, PartialEq)]
pub enum ReducedForm {
    /// every coefficient is zero, nothing to solve
    Identity,
    Polynomial { terms: String, degree: u32 },
}

impl ReducedForm {
    /// false when the solver must be skipped
    pub fn needs_solving(&self) -> bool {
        matches!(self, ReducedForm::Polynomial { .. })
    }
}

fn format_term(position: usize, coefficient: &Coefficient, exponent: u32) -> String {
    let magnitude = coefficient.abs();
    match (position, coefficient.is_negative()) {
        (0, false) => format!("{} * X^{}", magnitude, exponent),
        (0, true) => format!("-{} * X^{}", magnitude, exponent),
        (_, false) => format!("+ {} * X^{}", magnitude, exponent),
        (_, true) => format!("- {} * X^{}", magnitude, exponent),
    }
}

/// ascending exponents, zero coefficients skipped; "0" if nothing is left
pub fn format_terms(terms: &TermMap) -> String {
    let rendered = terms
        .iter()
        .filter(|(_, coefficient)| !coefficient.is_zero())
        .enumerate()
        .map(|(position, (exponent, coefficient))| format_term(position, coefficient, *exponent))
        .join(" ");
    if rendered.is_empty() {
        "0".to_string()
    } else {
        rendered
    }
}

pub fn format_reduced(reduced: &ReducedEquation) -> ReducedForm {
    match reduced.degree() {
        None => ReducedForm::Identity,
        Some(degree) => ReducedForm::Polynomial {
            terms: format_terms(reduced.terms()),
            degree,
        },
    }
}

impl fmt::Display for ReducedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReducedForm::Identity => write!(f, "Everything is a solution."),
            ReducedForm::Polynomial { terms, degree } => {
                writeln!(f, "Reduced form: {} = 0", terms)?;
                write!(f, "Polynomial degree: {}", degree)
            }
        }
    }
}
