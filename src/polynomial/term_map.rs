//! Term extraction and like-term collection.
//!
//! `reduce` folds the scanned terms of one side into a map exponent -> summed coefficient,
//! `normalize` moves everything to the left side: left - right = 0.
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::parse_equation::RawTerm;
use crate::polynomial::poly_errors::EquationError;
use log::debug;
use std::collections::BTreeMap;

/// exponent -> coefficient, iterated in ascending exponent order
pub type TermMap = BTreeMap<u32, Coefficient>;

/// decode the numbers of one scanned term into (exponent, signed coefficient)
pub fn extract_term(raw: &RawTerm) -> Result<(u32, Coefficient), EquationError> {
    let decode_error = |reason: &str| EquationError::TermDecode {
        term: raw.text.to_string(),
        reason: reason.to_string(),
    };
    let coefficient = Coefficient::from_literal(raw.coefficient)
        .ok_or_else(|| decode_error("the coefficient is not a number"))?;
    if !coefficient.is_finite() {
        return Err(decode_error("the coefficient is out of range"));
    }
    let coefficient = if raw.sign == '-' {
        -coefficient
    } else {
        coefficient
    };

    if raw.exponent.contains('.') {
        return Err(decode_error("the exponent must be an integer"));
    }
    let exponent: i64 = raw
        .exponent
        .parse()
        .map_err(|_| decode_error("the exponent is out of range"))?;
    if exponent < 0 {
        return Err(EquationError::Exponent {
            term: raw.text.to_string(),
        });
    }
    let exponent =
        u32::try_from(exponent).map_err(|_| decode_error("the exponent is out of range"))?;
    Ok((exponent, coefficient))
}

fn sum_out_of_range(term: String) -> EquationError {
    EquationError::TermDecode {
        term,
        reason: "the sum of the coefficients is out of range".to_string(),
    }
}

/// sum the coefficients of terms sharing an exponent. Entries may be zero here.
pub fn reduce(terms: &[RawTerm]) -> Result<TermMap, EquationError> {
    terms.iter().try_fold(TermMap::new(), |mut map, raw| {
        let (exponent, coefficient) = extract_term(raw)?;
        let entry = map.entry(exponent).or_default();
        *entry = *entry + coefficient;
        if !entry.is_finite() {
            return Err(sum_out_of_range(raw.text.to_string()));
        }
        Ok(map)
    })
}

/// `left - right`, the equation rewritten as P(X) = 0
pub fn normalize(left: &TermMap, right: &TermMap) -> Result<ReducedEquation, EquationError> {
    let mut terms = left.clone();
    for (exponent, coefficient) in right {
        let entry = terms.entry(*exponent).or_default();
        *entry = *entry - *coefficient;
        if !entry.is_finite() {
            return Err(sum_out_of_range(format!("X^{}", exponent)));
        }
    }
    let reduced = ReducedEquation::from_terms(terms);
    debug!("reduced equation: {:?}", reduced.terms());
    Ok(reduced)
}

/// P(X) = 0 with like terms combined. Never holds a zero coefficient: a missing exponent
/// means coefficient 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReducedEquation {
    terms: TermMap,
}

impl ReducedEquation {
    pub fn from_terms(terms: TermMap) -> Self {
        let terms = terms
            .into_iter()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .collect();
        ReducedEquation { terms }
    }

    pub fn terms(&self) -> &TermMap {
        &self.terms
    }

    pub fn coefficient(&self, exponent: u32) -> Coefficient {
        self.terms.get(&exponent).copied().unwrap_or_default()
    }

    /// highest exponent with a non-zero coefficient, None when every coefficient is zero
    pub fn degree(&self) -> Option<u32> {
        self.terms.keys().next_back().copied()
    }

    /// 0 = 0: every value of X is a solution
    pub fn is_identity(&self) -> bool {
        self.terms.is_empty()
    }

    /// the same equation with everything moved to the other side
    pub fn negated(&self) -> ReducedEquation {
        ReducedEquation {
            terms: self.terms.iter().map(|(e, c)| (*e, -*c)).collect(),
        }
    }
}
