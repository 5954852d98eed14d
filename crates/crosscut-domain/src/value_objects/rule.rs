//! Rule check outcomes

use crate::error::{Error, Result};

/// Value Object: Rule Outcome
///
/// Tagged result of one rule check (or of a whole chain). Produced by
/// each check, consumed by the chain evaluator, discarded afterwards.
///
/// ## Example
///
/// ```rust
/// use crosscut_domain::value_objects::RuleOutcome;
///
/// let outcome = RuleOutcome::failed("name already exists");
/// assert!(!outcome.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The check passed
    Ok,
    /// The check failed with a human-readable reason
    Failed(String),
}

impl RuleOutcome {
    /// Create a failed outcome
    pub fn failed<S: Into<String>>(reason: S) -> Self {
        Self::Failed(reason.into())
    }

    /// Whether the check passed
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// The failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ok => None,
            Self::Failed(reason) => Some(reason),
        }
    }

    /// Convert into a `Result`, mapping a failure to [`Error::Rule`]
    ///
    /// The reason string propagates to the caller unchanged.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Ok => Ok(()),
            Self::Failed(reason) => Err(Error::Rule { reason }),
        }
    }
}
