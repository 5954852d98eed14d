//! Business rule chains

pub mod chain;

pub use chain::{RuleChain, RuleCheck, check};
