//! Settings of the equation solver, read from a task document like
//! ```text
//! computor
//! loglevel: info
//! sqrt_method: reference
//! show_discriminant: true
//! show_intermediate: false
//! ```
use crate::Utils::task_parser::{Value, parse_document_complete};
use crate::numerical::square_root::SqrtMethod;
use crate::polynomial::poly_errors::EquationError;
use log::LevelFilter;
use std::path::Path;
use std::str::FromStr;

/// title of the section holding the solver settings
pub const CONFIG_SECTION: &str = "computor";

#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// off (or none), error, warn, info, debug, trace
    pub loglevel: Option<String>,
    pub sqrt_method: SqrtMethod,
    /// print the discriminant of quadratic equations
    pub show_discriminant: bool,
    /// print both sides after like-term collection
    pub show_intermediate: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            loglevel: Some("warn".to_string()),
            sqrt_method: SqrtMethod::default(),
            show_discriminant: false,
            show_intermediate: false,
        }
    }
}

fn expect_boolean(key: &str, value: &Value) -> Result<bool, EquationError> {
    value
        .as_boolean()
        .ok_or_else(|| EquationError::Config(format!("{} must be true or false, got {}", key, value)))
}

impl SolverConfig {
    pub fn log_level(&self) -> Result<LevelFilter, EquationError> {
        match self.loglevel.as_deref() {
            None => Ok(LevelFilter::Warn),
            Some("none") => Ok(LevelFilter::Off),
            Some(level) => LevelFilter::from_str(level).map_err(|_| {
                EquationError::Config(format!(
                    "loglevel must be off, error, warn, info, debug or trace, got {}",
                    level
                ))
            }),
        }
    }

    pub fn from_document(document: &str) -> Result<Self, EquationError> {
        let parsed = parse_document_complete(document).map_err(EquationError::Config)?;
        let mut config = SolverConfig::default();
        for (title, section) in parsed {
            if title != CONFIG_SECTION {
                return Err(EquationError::Config(format!(
                    "unknown section {}, expected {}",
                    title, CONFIG_SECTION
                )));
            }
            for (key, value) in section {
                match key.as_str() {
                    "loglevel" => config.loglevel = Some(value.to_string()),
                    "sqrt_method" => {
                        config.sqrt_method = SqrtMethod::from_str(&value.to_string()).map_err(|_| {
                            EquationError::Config(format!(
                                "sqrt_method must be reference or adaptive, got {}",
                                value
                            ))
                        })?
                    }
                    "show_discriminant" => config.show_discriminant = expect_boolean(&key, &value)?,
                    "show_intermediate" => config.show_intermediate = expect_boolean(&key, &value)?,
                    other => {
                        return Err(EquationError::Config(format!("unknown key {}", other)));
                    }
                }
            }
        }
        // reject a bad level here rather than when the logger is started
        config.log_level()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EquationError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|e| {
            EquationError::Config(format!("can't read {}: {}", path.display(), e))
        })?;
        SolverConfig::from_document(&document)
    }
}
