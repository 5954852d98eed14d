//! Short-circuiting rule chain
//!
//! Runs an ordered sequence of zero-argument predicate checks and stops
//! at the first failure. Checks after the first failure are never
//! evaluated, so callers should order cheap checks first.

use crosscut_domain::value_objects::RuleOutcome;

/// A deferred rule check
///
/// Each check is a zero-argument predicate producing a [`RuleOutcome`].
/// The closure may capture whatever state the rule needs (repository
/// handles, the operation's arguments); the chain itself performs no
/// side effects beyond evaluating the checks.
pub type RuleCheck = Box<dyn FnOnce() -> RuleOutcome + Send>;

/// Box a closure into a [`RuleCheck`]
pub fn check<F>(f: F) -> RuleCheck
where
    F: FnOnce() -> RuleOutcome + Send + 'static,
{
    Box::new(f)
}

/// Ordered, short-circuiting rule evaluation
pub struct RuleChain;

impl RuleChain {
    /// Evaluate checks in declared order
    ///
    /// Returns the first `Failed` outcome encountered, with its reason
    /// unchanged; returns `Ok` only when every check passes.
    pub fn run<I>(checks: I) -> RuleOutcome
    where
        I: IntoIterator<Item = RuleCheck>,
    {
        for check in checks {
            let outcome = check();
            if !outcome.is_ok() {
                return outcome;
            }
        }
        RuleOutcome::Ok
    }
}
