//! Concern declarations
//!
//! A concern is a cross-cutting behavior (validation, caching, timing)
//! applied to an operation independent of its core logic. Declarations
//! are attached to an operation name at registration time and never
//! mutated afterwards; the pipeline executes them in the fixed order
//! Validate → cache lookup → target → CachePut/CacheInvalidate →
//! Measure-report.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Value Object: Concern Declaration
///
/// One cross-cutting behavior declared for an operation. Multiple
/// declarations of the same kind may be attached to one operation; they
/// all execute, in declaration order.
///
/// ## Example
///
/// ```rust
/// use crosscut_domain::value_objects::ConcernDeclaration;
/// use std::time::Duration;
///
/// let concerns = vec![
///     ConcernDeclaration::validate("car"),
///     ConcernDeclaration::cache_invalidate("CarService.Get"),
///     ConcernDeclaration::measure(Some(Duration::from_millis(250))),
/// ];
/// assert_eq!(concerns.len(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ConcernDeclaration {
    /// Validate structured arguments against a registered schema before
    /// the target runs
    Validate {
        /// Name of the schema in the schema registry
        schema: String,
    },
    /// Cache the operation result under a group key (marks the operation
    /// cache-eligible as a read)
    CachePut {
        /// Group key the stored entry belongs to
        group: String,
        /// Entry TTL; `None` falls back to the configured default
        ttl: Option<Duration>,
    },
    /// Invalidate every cached entry tagged with the group key after the
    /// target succeeds
    CacheInvalidate {
        /// Group key to invalidate
        group: String,
    },
    /// Measure wall-clock duration of the whole invocation span and
    /// report when it exceeds the threshold
    Measure {
        /// Slow-call threshold; `None` falls back to the configured default
        threshold: Option<Duration>,
    },
}

impl ConcernDeclaration {
    /// Declare validation against a registered schema
    pub fn validate<S: Into<String>>(schema: S) -> Self {
        Self::Validate {
            schema: schema.into(),
        }
    }

    /// Declare result caching under a group key with the default TTL
    pub fn cache_put<S: Into<String>>(group: S) -> Self {
        Self::CachePut {
            group: group.into(),
            ttl: None,
        }
    }

    /// Declare result caching under a group key with an explicit TTL
    pub fn cache_put_with_ttl<S: Into<String>>(group: S, ttl: Duration) -> Self {
        Self::CachePut {
            group: group.into(),
            ttl: Some(ttl),
        }
    }

    /// Declare group invalidation after a successful write
    pub fn cache_invalidate<S: Into<String>>(group: S) -> Self {
        Self::CacheInvalidate {
            group: group.into(),
        }
    }

    /// Declare performance measurement of the invocation span
    pub fn measure(threshold: Option<Duration>) -> Self {
        Self::Measure { threshold }
    }

    /// Short kind label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validate { .. } => "validate",
            Self::CachePut { .. } => "cache_put",
            Self::CacheInvalidate { .. } => "cache_invalidate",
            Self::Measure { .. } => "measure",
        }
    }
}
