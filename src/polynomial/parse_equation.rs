//! Scanner for equations like "5*X^0+4*X^1-9.3*X^2=1*X^0" (whitespace already stripped).
//!
//! grammar of one side:
//!     side     := constant | lead (sign term)*
//!     lead     := sign? term
//!     term     := number "*X^" "-"? number
//!     constant := sign? number                  (read as number*X^0, only as a whole side)
//!     number   := digits ("." digits)?
//! the equation is exactly one "=" between two sides, and both sides must be consumed entirely.
//! Negative and decimal exponents are let through the scanner on purpose: they are reported with a
//! precise message by the term extractor.
use crate::polynomial::poly_errors::EquationError;
use log::debug;
use nom::{
    IResult, Offset, Parser,
    bytes::complete::tag,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, consumed, map, opt, recognize},
    multi::many0,
    sequence::pair,
};

/// one term as it was written, before its numbers are decoded
#[derive(Debug, Clone, PartialEq)]
pub struct RawTerm<'a> {
    /// '+' or '-'
    pub sign: char,
    pub coefficient: &'a str,
    pub exponent: &'a str,
    /// the whole term as found in the input, sign included
    pub text: &'a str,
}

/// both sides of a scanned equation
#[derive(Debug, Clone, PartialEq)]
pub struct RawEquation<'a> {
    pub left: Vec<RawTerm<'a>>,
    pub right: Vec<RawTerm<'a>>,
}

/// whitespace is insignificant anywhere in the equation
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// map a byte offset in `strip_whitespace(input)` back to the byte offset of the same
/// character in `input`; the end of the stripped string maps to the end of `input`
pub fn raw_position(input: &str, stripped_position: usize) -> usize {
    let mut stripped = 0;
    for (i, c) in input.char_indices().filter(|(_, c)| !c.is_whitespace()) {
        if stripped >= stripped_position {
            return i;
        }
        stripped += c.len_utf8();
    }
    input.len()
}

pub fn parse_number(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(char('.'), digit1)))).parse(input)
}

fn parse_exponent(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), parse_number)).parse(input)
}

/// "<number>*X^<exponent>" -> (coefficient, exponent)
fn parse_term_body(input: &str) -> IResult<&str, (&str, &str)> {
    map(
        (parse_number, tag("*X^"), parse_exponent),
        |(coefficient, _, exponent)| (coefficient, exponent),
    )
    .parse(input)
}

fn raw_term<'a>(text: &'a str, sign: Option<char>, body: (&'a str, &'a str)) -> RawTerm<'a> {
    RawTerm {
        sign: sign.unwrap_or('+'),
        coefficient: body.0,
        exponent: body.1,
        text,
    }
}

/// first term of a side, the sign is optional
pub fn parse_leading_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    map(
        consumed(pair(opt(one_of("+-")), parse_term_body)),
        |(text, (sign, body))| raw_term(text, sign, body),
    )
    .parse(input)
}

/// every following term must carry its sign
pub fn parse_signed_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    map(
        consumed(pair(one_of("+-"), parse_term_body)),
        |(text, (sign, body))| raw_term(text, Some(sign), body),
    )
    .parse(input)
}

fn parse_terms(input: &str) -> IResult<&str, Vec<RawTerm<'_>>> {
    let (input, first) = parse_leading_term(input)?;
    let (input, rest) = many0(parse_signed_term).parse(input)?;
    let mut terms = Vec::with_capacity(rest.len() + 1);
    terms.push(first);
    terms.extend(rest);
    Ok((input, terms))
}

fn parse_constant(input: &str) -> IResult<&str, RawTerm<'_>> {
    map(
        consumed(pair(opt(one_of("+-")), parse_number)),
        |(text, (sign, number))| raw_term(text, sign, (number, "0")),
    )
    .parse(input)
}

/// scan one side of the equation. `base` is the byte offset of the side inside the whole
/// equation, used for error positions.
pub fn parse_side(side: &str, base: usize) -> Result<Vec<RawTerm<'_>>, EquationError> {
    if side.is_empty() {
        return Err(EquationError::grammar(
            "one side of the equation is empty",
            "",
            base,
        ));
    }
    if let Ok((_, constant)) = all_consuming(parse_constant).parse(side) {
        return Ok(vec![constant]);
    }
    match parse_terms(side) {
        Ok(("", terms)) => Ok(terms),
        Ok((rest, _)) => Err(EquationError::grammar(
            "unexpected content after the last term",
            rest,
            base + side.offset(rest),
        )),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(EquationError::grammar(
            "expected a term of the form <number>*X^<number>",
            e.input,
            base + side.offset(e.input),
        )),
        Err(nom::Err::Incomplete(_)) => Err(EquationError::grammar(
            "incomplete term",
            side,
            base,
        )),
    }
}

/// validate the whole equation (whitespace must already be stripped) and scan both sides
pub fn parse_equation(equation: &str) -> Result<RawEquation<'_>, EquationError> {
    let equal_signs: Vec<usize> = equation.match_indices('=').map(|(i, _)| i).collect();
    let pos = match equal_signs.as_slice() {
        [] => {
            return Err(EquationError::grammar(
                "expecting exactly one '=', found none",
                equation,
                0,
            ));
        }
        [pos] => *pos,
        [_, second, ..] => {
            return Err(EquationError::grammar(
                "expecting exactly one '=', found more",
                &equation[*second..],
                *second,
            ));
        }
    };
    let left = parse_side(&equation[..pos], 0)?;
    let right = parse_side(&equation[pos + 1..], pos + 1)?;
    debug!(
        "scanned {} term(s) on the left, {} term(s) on the right",
        left.len(),
        right.len()
    );
    Ok(RawEquation { left, right })
}
