//! parse a settings document with structure like "title1 key1: value1 key2: value2 title2 key3: value3"
//! into HashMap<String, HashMap<String, Value>>.
//! Lines starting with //, #, % or ; are comments.
//!
//! # Example
//! ```
//! use RustedComputor::Utils::task_parser::{Value, parse_document_complete};
//! let doc = "computor\n loglevel: info\n show_discriminant: true";
//! let parsed = parse_document_complete(doc).unwrap();
//! assert_eq!(parsed["computor"]["show_discriminant"], Value::Boolean(true));
//! ```
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, recognize},
    multi::{many0, many1},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;

pub type SectionMap = HashMap<String, Value>;
pub type DocumentMap = HashMap<String, SectionMap>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// identifier: a letter or underscore followed by letters, digits or underscores
fn parse_identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    map(parser, String::from).parse(input)
}

/// Parses a title, trailing whitespace and newlines are dropped
pub fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, title) = parse_identifier(input)?;
    Ok((input.trim_start(), title))
}

pub fn parse_key(input: &str) -> IResult<&str, String> {
    parse_identifier(input)
}

/// a single value runs until whitespace or ';'
pub fn parse_value(input: &str) -> IResult<&str, Value> {
    let value_parser = take_while1(|c: char| !c.is_whitespace() && c != ';');
    map(value_parser, |s: &str| {
        if let Ok(val) = s.parse::<i64>() {
            Value::Integer(val)
        } else if let Ok(val) = s.parse::<f64>() {
            Value::Float(val)
        } else if let Ok(val) = s.parse::<bool>() {
            Value::Boolean(val)
        } else {
            Value::String(s.to_string())
        }
    })
    .parse(input)
}

/// "key: value"
pub fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Value)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_key, colon_separator, parse_value);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim_start_matches(|c: char| c.is_whitespace() || c == ';'), result))
}

/// Parses a section with a title and one or more key-value pairs
pub fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let (input, pairs) = many1(terminated(parse_key_value_pair, space0)).parse(input)?;
    Ok((input, (title, pairs.into_iter().collect())))
}

/// Filters out comment lines (starting with //, #, %, or ;) and empty lines
pub fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the sections of a document (comments must already be filtered out)
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let mut parser = many1(delimited(multispace0, parse_section, multispace0));
    let (input, sections) = parser.parse(input)?;
    let mut result = DocumentMap::new();
    for (title, section) in sections {
        // a repeated title extends the earlier section
        result.entry(title).or_default().extend(section);
    }
    Ok((input, result))
}

/// filter comments, parse, and require the whole document to be consumed
pub fn parse_document_complete(input: &str) -> Result<DocumentMap, String> {
    let filtered = filter_comments(input);
    match parse_document(&filtered) {
        Ok((remaining, parsed)) => {
            if !remaining.trim().is_empty() {
                return Err(format!(
                    "Failed to parse entire document. Remaining: '{}'",
                    remaining
                ));
            }
            Ok(parsed)
        }
        Err(e) => Err(format!("Parsing error: {:?}", e)),
    }
}
