use std::fmt;

/// Error types for parsing and solving an equation
#[derive(Debug, Clone, PartialEq)]
pub enum EquationError {
    /// wrong command line arguments
    Usage(String),
    /// the equation does not match the accepted syntax; `position` is the byte offset of
    /// `fragment` in the equation as written, whitespace included
    Grammar {
        message: String,
        fragment: String,
        position: usize,
    },
    /// a term has a negative exponent
    Exponent { term: String },
    /// a term matched the syntax but its numbers can't be decoded
    TermDecode { term: String, reason: String },
    /// malformed configuration document
    Config(String),
    /// coefficients are valid but the discriminant or a root overflows f64
    OutOfRange(String),
}

impl EquationError {
    pub fn grammar(message: &str, fragment: &str, position: usize) -> Self {
        EquationError::Grammar {
            message: message.to_string(),
            fragment: fragment.to_string(),
            position,
        }
    }
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EquationError::Usage(msg) => write!(f, "{}", msg),
            EquationError::Grammar {
                message,
                fragment,
                position,
            } => {
                if fragment.is_empty() {
                    write!(f, "Malformed expression: {} (at position {})", message, position)
                } else {
                    write!(
                        f,
                        "Malformed expression: {} at position {}: \"{}\"",
                        message, position, fragment
                    )
                }
            }
            EquationError::Exponent { term } => write!(
                f,
                "The exponent of the term \"{}\" must be a non-negative integer",
                term
            ),
            EquationError::TermDecode { term, reason } => {
                write!(f, "Malformed term \"{}\": {}", term, reason)
            }
            EquationError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            EquationError::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
        }
    }
}

impl std::error::Error for EquationError {}
