//! Unified error surface for configuration resolution.
//!
//! Resolution either produces a fully valid [`Config`](crate::Config) or a
//! single [`ResolveError`] aggregating every coercion failure and every
//! cross-field violation found in the attempt. There is no partially-valid
//! object and no retry at this layer - the caller decides whether to abort
//! startup or try different property sources.

use std::fmt;

use thiserror::Error;

use crate::coerce::CoercionError;
use crate::config::validation::ValidationError;

/// One problem found while resolving a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Problem {
    /// A raw value could not be converted to its declared type.
    #[error(transparent)]
    Coercion(#[from] CoercionError),
    /// A relationship between coerced fields was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A rejected resolution attempt, carrying every problem found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    problems: Vec<Problem>,
}

impl ResolveError {
    pub(crate) fn new(problems: Vec<Problem>) -> Self {
        debug_assert!(!problems.is_empty());
        Self { problems }
    }

    /// All problems found, coercion failures first, in schema order.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Consume the error, yielding the problems.
    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "configuration rejected with {} problem(s)",
            self.problems.len()
        )?;
        for problem in &self.problems {
            write!(f, "\n  - {problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_problem() {
        let err = ResolveError::new(vec![
            Problem::Coercion(CoercionError {
                key: "client.soTimeout".to_string(),
                value: "soon".to_string(),
                expected: "duration in milliseconds",
            }),
            Problem::Validation(ValidationError::SigningEnforcedWithoutSigning),
        ]);
        let rendered = err.to_string();
        assert!(rendered.contains("2 problem(s)"));
        assert!(rendered.contains("client.soTimeout"));
        assert!(rendered.contains("signingEnforced"));
    }
}
