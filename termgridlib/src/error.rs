//! Error types for termgridlib

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// One rejected setting: the parameter, what was wrong with the received
/// value, and the accepted domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViolation {
    /// Parameter name as it appears on the configuration surface
    pub parameter: &'static str,
    /// What was wrong with the received value
    pub problem: String,
    /// Accepted domain for the parameter
    pub expected: &'static str,
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (expected {})",
            self.parameter, self.problem, self.expected
        )
    }
}

/// Errors that can occur while resolving settings or constructing a table
#[derive(Error, Debug)]
pub enum TermgridError {
    /// One or more settings failed validation; every violation found in the
    /// pass is reported, not just the first
    #[error("invalid configuration: {}", join_violations(.violations))]
    Config {
        /// All violations found during the validation pass
        violations: Vec<ConfigViolation>,
    },

    /// A table needs at least one header column
    #[error("table header must contain at least one column")]
    EmptyHeader,
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display_names_parameter_and_domain() {
        let violation = ConfigViolation {
            parameter: "margin",
            problem: "-1 is negative".to_string(),
            expected: "integer >= 0",
        };
        assert_eq!(violation.to_string(), "margin: -1 is negative (expected integer >= 0)");
    }

    #[test]
    fn test_config_error_lists_every_violation() {
        let error = TermgridError::Config {
            violations: vec![
                ConfigViolation {
                    parameter: "margin",
                    problem: "-1 is negative".to_string(),
                    expected: "integer >= 0",
                },
                ConfigViolation {
                    parameter: "maxWidth",
                    problem: "5 is below the minimum".to_string(),
                    expected: "integer >= 10, 'auto' or 'Infinity'",
                },
            ],
        };
        let message = error.to_string();
        assert!(message.contains("margin"));
        assert!(message.contains("maxWidth"));
    }
}
