//! # crosscut
//!
//! A declarative cross-cutting interception library: service operations
//! are registered with concern declarations — validation, result
//! caching, cache invalidation, performance measurement — and invoked
//! through a pipeline that composes those concerns around the target
//! callable, which stays free of them.
//!
//! ## Example
//!
//! ```ignore
//! use crosscut::prelude::*;
//! use serde_json::json;
//!
//! let mut schemas = SchemaRegistry::new();
//! schemas.register(
//!     ValidationSchema::new("car")
//!         .field("description", vec![Constraint::Required, Constraint::MinLength(2)]),
//! );
//!
//! let mut concerns = ConcernRegistry::new();
//! concerns.register("CarService.GetAll", [ConcernDeclaration::cache_put("CarService.Get")]);
//! concerns.register("CarService.Add", [
//!     ConcernDeclaration::validate("car"),
//!     ConcernDeclaration::cache_invalidate("CarService.Get"),
//! ]);
//!
//! let pipeline = build_pipeline(&AppConfig::default(), schemas, concerns)?;
//!
//! let cars = pipeline
//!     .invoke(Invocation::new(Operation::new("CarService.GetAll"), || async {
//!         Ok(json!([]))  // the real repository call
//!     }))
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! The workspace follows Clean Architecture layering:
//!
//! - [`domain`] - Core types, error taxonomy, and ports
//! - [`application`] - Rule chain, validator, key builder, monitor, pipeline
//! - [`providers`] - Cache backend implementations
//! - [`infrastructure`] - Configuration, logging, wiring, report sinks

pub use crosscut_application as application;
pub use crosscut_domain as domain;
pub use crosscut_infrastructure as infrastructure;
pub use crosscut_providers as providers;

/// Commonly used types, re-exported in one place
pub mod prelude {
    pub use crosscut_application::cache_keys::KeyBuilder;
    pub use crosscut_application::pipeline::{Invocation, Pipeline, PipelineBuilder};
    pub use crosscut_application::registry::{ConcernRegistry, SchemaRegistry};
    pub use crosscut_application::rules::{RuleChain, RuleCheck, check};
    pub use crosscut_application::timing::PerformanceMonitor;
    pub use crosscut_application::validation::Validator;
    pub use crosscut_domain::error::{Error, Result};
    pub use crosscut_domain::ports::infrastructure::reporter::{
        PerformanceReporter, SlowOperationReport,
    };
    pub use crosscut_domain::ports::providers::cache::{
        CacheEntryConfig, CacheProvider, CacheStats,
    };
    pub use crosscut_domain::value_objects::{
        ArgValue, ConcernDeclaration, Constraint, Operation, RuleOutcome, ValidationSchema,
    };
    pub use crosscut_infrastructure::cache::{SharedCacheStore, build_cache_provider};
    pub use crosscut_infrastructure::config::{AppConfig, ConfigLoader};
    pub use crosscut_infrastructure::reporting::{CollectingReporter, TracingReporter};
    pub use crosscut_infrastructure::wiring::build_pipeline;
    pub use crosscut_providers::cache::{MemoryCacheProvider, NullCacheProvider};
}
