//! Square root used by the quadratic solver.
//!
//! Both methods return integral roots exactly when the argument is a perfect square, so integer
//! discriminants don't pick up round-off.
//! - `Reference`: linear perfect-square scan for integral input, then exactly 10 Newton steps
//!   from x0 = 1. Ten fixed steps are enough for the magnitudes met in practice, but the
//!   estimate is NOT converged for large arguments (e.g. sqrt(1e12) is still far off).
//! - `Adaptive`: Newton from a power of two at or above the root, run until the estimate stops
//!   decreasing, then the perfect-square check on the rounded estimate.
use log::debug;
use strum_macros::{Display, EnumString};

/// number of Newton steps of the reference method
pub const REFERENCE_ITERATIONS: usize = 10;
/// safety cap for the adaptive method, convergence takes well under 10 steps from its start point
pub const ADAPTIVE_MAX_ITERATIONS: usize = 100;
/// integers up to 2^53 are exact in f64
const EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SqrtMethod {
    Reference,
    #[default]
    Adaptive,
}

fn is_exact_integer(n: f64) -> bool {
    n.fract() == 0.0 && n < EXACT_F64_INT
}

/// principal square root of a non-negative n, NaN for negative input
pub fn square_root(n: f64, method: SqrtMethod) -> f64 {
    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }
    let root = match method {
        SqrtMethod::Reference => sqrt_reference(n),
        SqrtMethod::Adaptive => sqrt_adaptive(n),
    };
    debug!("sqrt({}) = {} ({} method)", n, root, method);
    root
}

pub fn sqrt_reference(n: f64) -> f64 {
    if is_exact_integer(n) {
        let n_int = n as u64;
        for i in 0..=n_int / 2 {
            let square = u128::from(i) * u128::from(i);
            if square == u128::from(n_int) {
                return i as f64;
            }
            // no later candidate can match
            if square > u128::from(n_int) {
                break;
            }
        }
    }
    let mut x_n = 1.0;
    for _ in 0..REFERENCE_ITERATIONS {
        x_n = 0.5 * (x_n + n / x_n);
    }
    x_n
}

pub fn sqrt_adaptive(n: f64) -> f64 {
    if n == 0.0 {
        return 0.0;
    }
    if n.is_infinite() {
        return n;
    }
    // 2^ceil(log2(n)/2) >= sqrt(n), so the iterates decrease monotonically
    let mut x_n = 2f64.powi((n.log2() / 2.0).ceil() as i32);
    for _ in 0..ADAPTIVE_MAX_ITERATIONS {
        let next = 0.5 * (x_n + n / x_n);
        if next >= x_n {
            break;
        }
        x_n = next;
    }
    if is_exact_integer(n) {
        let rounded = x_n.round();
        if rounded * rounded == n {
            return rounded;
        }
    }
    x_n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::str::FromStr;

    #[test]
    fn test_perfect_squares_are_exact() {
        for k in 0..=1000u64 {
            let n = (k * k) as f64;
            assert_eq!(sqrt_reference(n), k as f64, "reference sqrt({})", n);
            assert_eq!(sqrt_adaptive(n), k as f64, "adaptive sqrt({})", n);
        }
    }

    #[test]
    fn test_large_perfect_square_adaptive() {
        let k = 94_906_265u64;
        assert_eq!(sqrt_adaptive((k * k) as f64), k as f64);
    }

    #[test]
    fn test_non_perfect_squares() {
        for n in [2.0, 3.0, 164.8, 0.25, 1e-6, 12345.678] {
            assert_relative_eq!(sqrt_adaptive(n), n.sqrt(), epsilon = 1e-12, max_relative = 1e-14);
        }
        // ten steps from 1 are enough for moderate arguments
        for n in [2.0, 3.0, 164.8, 0.25] {
            assert_relative_eq!(sqrt_reference(n), n.sqrt(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reference_precision_limit() {
        // ten fixed steps from x0 = 1 have not converged for a big non-square argument
        let n = 1e12 + 1.0;
        assert!((sqrt_reference(n) - n.sqrt()).abs() > 1.0);
        assert_relative_eq!(sqrt_adaptive(n), n.sqrt(), max_relative = 1e-14);
    }

    #[test]
    fn test_square_root_dispatch() {
        assert_eq!(square_root(16.0, SqrtMethod::Reference), 4.0);
        assert_eq!(square_root(16.0, SqrtMethod::Adaptive), 4.0);
        assert!(square_root(-1.0, SqrtMethod::Adaptive).is_nan());
        assert!(square_root(-4.0, SqrtMethod::Reference).is_nan());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(SqrtMethod::from_str("reference").unwrap(), SqrtMethod::Reference);
        assert_eq!(SqrtMethod::from_str("Adaptive").unwrap(), SqrtMethod::Adaptive);
        assert!(SqrtMethod::from_str("bisection").is_err());
        assert_eq!(SqrtMethod::Reference.to_string(), "reference");
        assert_eq!(SqrtMethod::default(), SqrtMethod::Adaptive);
    }
}
