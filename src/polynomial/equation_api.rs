//! Entry point of the pipeline: raw equation string -> reduced form, degree and solutions.
//!
//! # Example
//! ```
//! use RustedComputor::polynomial::equation_api::Computor;
//! let report = Computor::new().run("5 * X^0 + 4 * X^1 = 4 * X^0").unwrap();
//! assert_eq!(
//!     report.to_string(),
//!     "Reduced form: 1 * X^0 + 4 * X^1 = 0\nPolynomial degree: 1\nThe solution is:\nX = -0.25"
//! );
//! ```
use crate::polynomial::formatter::{ReducedForm, format_reduced, format_terms};
use crate::polynomial::parse_equation::{parse_equation, raw_position, strip_whitespace};
use crate::polynomial::poly_errors::EquationError;
use crate::polynomial::solver::{Solution, solve};
use crate::polynomial::solver_config::SolverConfig;
use crate::polynomial::term_map::{ReducedEquation, TermMap, normalize, reduce};
use log::info;
use std::fmt;

pub const USAGE: &str = "[--config <file>] \"equation\"";

/// everything computed for one equation
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub left: TermMap,
    pub right: TermMap,
    pub reduced: ReducedEquation,
    pub form: ReducedForm,
    /// None when every value is a solution and solving was skipped
    pub solution: Option<Solution>,
    show_discriminant: bool,
    show_intermediate: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.show_intermediate {
            writeln!(f, "Left side: {}", format_terms(&self.left))?;
            writeln!(f, "Right side: {}", format_terms(&self.right))?;
        }
        write!(f, "{}", self.form)?;
        if let Some(solution) = &self.solution {
            for line in solution.describe(self.show_discriminant) {
                write!(f, "\n{}", line)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Computor {
    pub config: SolverConfig,
}

impl Computor {
    pub fn new() -> Self {
        Computor::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Computor { config }
    }

    /// validate, reduce, format and solve one equation
    pub fn run(&self, input: &str) -> Result<Report, EquationError> {
        let equation = strip_whitespace(input);
        info!("equation without whitespace: {}", equation);
        let raw = parse_equation(&equation).map_err(|e| match e {
            EquationError::Grammar {
                message,
                fragment,
                position,
            } => EquationError::Grammar {
                message,
                fragment,
                position: raw_position(input, position),
            },
            other => other,
        })?;
        let left = reduce(&raw.left)?;
        let right = reduce(&raw.right)?;
        let reduced = normalize(&left, &right)?;
        let form = format_reduced(&reduced);
        info!("degree: {:?}", reduced.degree());
        let solution = if form.needs_solving() {
            let solution = solve(&reduced, self.config.sqrt_method);
            if !solution.is_finite() {
                return Err(EquationError::OutOfRange(format!(
                    "the solutions of {} = 0 can't be represented",
                    format_terms(reduced.terms())
                )));
            }
            Some(solution)
        } else {
            None
        };
        Ok(Report {
            left,
            right,
            reduced,
            form,
            solution,
            show_discriminant: self.config.show_discriminant,
            show_intermediate: self.config.show_intermediate,
        })
    }
}

/// command line arguments (program name excluded): `equation` or `--config <file> equation`
pub fn parse_cli_args(args: &[String]) -> Result<(SolverConfig, &str), EquationError> {
    match args {
        [equation] if !equation.starts_with("--") => {
            Ok((SolverConfig::default(), equation.as_str()))
        }
        [flag, path, equation] if flag == "--config" => {
            Ok((SolverConfig::from_file(path)?, equation.as_str()))
        }
        [] => Err(EquationError::Usage("expecting exactly one equation".to_string())),
        _ => Err(EquationError::Usage(format!(
            "unexpected arguments: {}",
            args.join(" ")
        ))),
    }
}
