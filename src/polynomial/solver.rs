//! Closed form solutions for reduced equations of degree 0, 1 and 2.
use crate::numerical::square_root::{SqrtMethod, square_root};
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::term_map::ReducedEquation;
use log::{info, warn};
use num_complex::Complex;
use std::fmt;

/// outcome of solving P(X) = 0
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// 0 = 0. `Computor::run` stops at `ReducedForm::Identity` and never asks the solver for
    /// this case; it is returned only when `solve` is called directly on an empty equation.
    EveryValue,
    /// non-zero constant = 0
    NoSolution,
    Linear(f64),
    TwoReal {
        discriminant: Coefficient,
        roots: [f64; 2],
    },
    DoubleRoot {
        discriminant: Coefficient,
        root: f64,
    },
    /// complex conjugate pair, the first root has the positive imaginary part
    Complex {
        discriminant: Coefficient,
        roots: [Complex<f64>; 2],
    },
    DegreeTooHigh(u32),
}

/// -0 is reported as 0
fn clean(x: f64) -> f64 {
    x + 0.0
}

fn format_complex(z: &Complex<f64>) -> String {
    let sign = if z.im < 0.0 { '-' } else { '+' };
    format!("{} {} {}i", clean(z.re), sign, clean(z.im.abs()))
}

impl Solution {
    pub fn discriminant(&self) -> Option<Coefficient> {
        match self {
            Solution::TwoReal { discriminant, .. }
            | Solution::DoubleRoot { discriminant, .. }
            | Solution::Complex { discriminant, .. } => Some(*discriminant),
            _ => None,
        }
    }

    /// false when the discriminant or a root overflowed to inf or became NaN
    pub fn is_finite(&self) -> bool {
        let discriminant = self.discriminant().is_none_or(|d| d.is_finite());
        let roots = match self {
            Solution::Linear(root) | Solution::DoubleRoot { root, .. } => root.is_finite(),
            Solution::TwoReal { roots, .. } => roots.iter().all(|r| r.is_finite()),
            Solution::Complex { roots, .. } => roots.iter().all(|z| z.is_finite()),
            _ => true,
        };
        discriminant && roots
    }

    /// output lines, optionally with the discriminant of a quadratic
    pub fn describe(&self, show_discriminant: bool) -> Vec<String> {
        let mut lines = Vec::new();
        if show_discriminant {
            if let Some(discriminant) = self.discriminant() {
                lines.push(format!("Discriminant: {}", discriminant));
            }
        }
        match self {
            Solution::EveryValue => lines.push("Everything is a solution.".to_string()),
            Solution::NoSolution => lines.push("There is no solution.".to_string()),
            Solution::Linear(root) => {
                lines.push("The solution is:".to_string());
                lines.push(format!("X = {}", clean(*root)));
            }
            Solution::TwoReal { roots, .. } => {
                lines.push("Discriminant is strictly positive, the two solutions are:".to_string());
                lines.push(format!("X1 = {}", clean(roots[0])));
                lines.push(format!("X2 = {}", clean(roots[1])));
            }
            Solution::DoubleRoot { root, .. } => {
                lines.push("Discriminant is zero, the solution is:".to_string());
                lines.push(format!("X = {}", clean(*root)));
            }
            Solution::Complex { roots, .. } => {
                lines.push(
                    "Discriminant is strictly negative, the two complex solutions are:".to_string(),
                );
                lines.push(format!("X1 = {}", format_complex(&roots[0])));
                lines.push(format!("X2 = {}", format_complex(&roots[1])));
            }
            Solution::DegreeTooHigh(_) => lines.push(
                "The polynomial degree is strictly greater than 2, I can't solve.".to_string(),
            ),
        }
        lines
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(false).join("\n"))
    }
}

/// dispatch on the degree of the reduced equation
pub fn solve(reduced: &ReducedEquation, sqrt_method: SqrtMethod) -> Solution {
    let solution = match reduced.degree() {
        None => Solution::EveryValue,
        Some(0) => Solution::NoSolution,
        Some(1) => {
            let (c0, c1) = (reduced.coefficient(0), reduced.coefficient(1));
            Solution::Linear(-c0.to_f64() / c1.to_f64())
        }
        Some(2) => solve_quadratic(
            reduced.coefficient(2),
            reduced.coefficient(1),
            reduced.coefficient(0),
            sqrt_method,
        ),
        Some(degree) => {
            warn!("polynomial of degree {} is not solved", degree);
            Solution::DegreeTooHigh(degree)
        }
    };
    info!("solution: {:?}", solution);
    solution
}

/// a*X^2 + b*X + c = 0, a must be non-zero
pub fn solve_quadratic(
    a: Coefficient,
    b: Coefficient,
    c: Coefficient,
    sqrt_method: SqrtMethod,
) -> Solution {
    let discriminant = b * b - Coefficient::Integer(4) * a * c;
    info!("discriminant = {}", discriminant);
    let two_a = (Coefficient::Integer(2) * a).to_f64();
    let minus_b = (-b).to_f64();
    let zero = Coefficient::zero();

    if discriminant > zero {
        let root = square_root(discriminant.to_f64(), sqrt_method);
        Solution::TwoReal {
            discriminant,
            roots: [(minus_b + root) / two_a, (minus_b - root) / two_a],
        }
    } else if discriminant == zero {
        Solution::DoubleRoot {
            discriminant,
            root: minus_b / two_a,
        }
    } else {
        let real = minus_b / two_a;
        let imaginary = (square_root((-discriminant).to_f64(), sqrt_method) / two_a).abs();
        Solution::Complex {
            discriminant,
            roots: [Complex::new(real, imaginary), Complex::new(real, -imaginary)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reduced(entries: &[(u32, Coefficient)]) -> ReducedEquation {
        ReducedEquation::from_terms(entries.iter().copied().collect())
    }

    #[test]
    fn test_constant_has_no_solution() {
        let eq = reduced(&[(0, Coefficient::Integer(5))]);
        let solution = solve(&eq, SqrtMethod::Adaptive);
        assert_eq!(solution, Solution::NoSolution);
        assert_eq!(solution.to_string(), "There is no solution.");
    }

    #[test]
    fn test_linear() {
        let eq = reduced(&[(0, Coefficient::Integer(1)), (1, Coefficient::Integer(4))]);
        let solution = solve(&eq, SqrtMethod::Adaptive);
        assert_eq!(solution, Solution::Linear(-0.25));
        assert_eq!(solution.to_string(), "The solution is:\nX = -0.25");
        // no constant term: the root is 0, never -0
        let eq = reduced(&[(1, Coefficient::Integer(3))]);
        assert_eq!(solve(&eq, SqrtMethod::Adaptive).to_string(), "The solution is:\nX = 0");
    }

    #[test]
    fn test_two_real_roots() {
        let solution = solve_quadratic(
            Coefficient::Float(-9.3),
            Coefficient::Integer(4),
            Coefficient::Integer(4),
            SqrtMethod::Adaptive,
        );
        match solution {
            Solution::TwoReal {
                discriminant,
                roots,
            } => {
                assert_relative_eq!(discriminant.to_f64(), 164.8, epsilon = 1e-10);
                assert_relative_eq!(roots[0], -0.475131, epsilon = 1e-6);
                assert_relative_eq!(roots[1], 0.905239, epsilon = 1e-6);
            }
            other => panic!("expected two real roots, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_roots_are_exact() {
        // X^2 - 5X + 6 = 0
        let solution = solve_quadratic(
            Coefficient::Integer(1),
            Coefficient::Integer(-5),
            Coefficient::Integer(6),
            SqrtMethod::Reference,
        );
        assert_eq!(
            solution.describe(true),
            vec![
                "Discriminant: 1",
                "Discriminant is strictly positive, the two solutions are:",
                "X1 = 3",
                "X2 = 2",
            ]
        );
    }

    #[test]
    fn test_double_root() {
        let eq = reduced(&[
            (0, Coefficient::Integer(1)),
            (1, Coefficient::Integer(-2)),
            (2, Coefficient::Integer(1)),
        ]);
        let solution = solve(&eq, SqrtMethod::Adaptive);
        assert_eq!(
            solution,
            Solution::DoubleRoot {
                discriminant: Coefficient::Integer(0),
                root: 1.0
            }
        );
        assert_eq!(
            solution.to_string(),
            "Discriminant is zero, the solution is:\nX = 1"
        );
    }

    #[test]
    fn test_complex_roots() {
        let eq = reduced(&[(0, Coefficient::Integer(1)), (2, Coefficient::Integer(1))]);
        let solution = solve(&eq, SqrtMethod::Adaptive);
        assert_eq!(
            solution,
            Solution::Complex {
                discriminant: Coefficient::Integer(-4),
                roots: [Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)]
            }
        );
        assert_eq!(
            solution.to_string(),
            "Discriminant is strictly negative, the two complex solutions are:\nX1 = 0 + 1i\nX2 = 0 - 1i"
        );
    }

    #[test]
    fn test_complex_imaginary_part_is_non_negative_for_negative_a() {
        // -2X^2 + 2X - 1 = 0  ->  0.5 ± 0.5i
        let solution = solve_quadratic(
            Coefficient::Integer(-2),
            Coefficient::Integer(2),
            Coefficient::Integer(-1),
            SqrtMethod::Adaptive,
        );
        match solution {
            Solution::Complex { roots, .. } => {
                assert_relative_eq!(roots[0].re, 0.5);
                assert_relative_eq!(roots[0].im, 0.5);
                assert_relative_eq!(roots[1].im, -0.5);
            }
            other => panic!("expected complex roots, got {:?}", other),
        }
    }

    #[test]
    fn test_degree_too_high() {
        let eq = reduced(&[(0, Coefficient::Integer(1)), (3, Coefficient::Integer(1))]);
        let solution = solve(&eq, SqrtMethod::Adaptive);
        assert_eq!(solution, Solution::DegreeTooHigh(3));
        assert_eq!(solution.discriminant(), None);
        assert!(!solution.describe(true).iter().any(|line| line.contains("X =")));
    }

    #[test]
    fn test_overflowing_discriminant_is_not_finite() {
        let huge = Coefficient::Float(1e200);
        let solution = solve_quadratic(huge, huge, huge, SqrtMethod::Adaptive);
        assert!(!solution.is_finite());
        let solution = solve_quadratic(
            Coefficient::Integer(1),
            Coefficient::Integer(-5),
            Coefficient::Integer(6),
            SqrtMethod::Adaptive,
        );
        assert!(solution.is_finite());
        assert!(Solution::NoSolution.is_finite());
    }

    #[test]
    fn test_identity() {
        let solution = solve(&ReducedEquation::default(), SqrtMethod::Adaptive);
        assert_eq!(solution, Solution::EveryValue);
    }
}
