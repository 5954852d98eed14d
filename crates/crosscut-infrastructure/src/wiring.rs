//! Explicit pipeline assembly
//!
//! Builds a ready-to-use pipeline from configuration and the
//! startup-populated registries. All state is constructed here and
//! passed in; nothing is discovered through ambient registration.

use crate::cache::build_cache_provider;
use crate::config::AppConfig;
use crate::reporting::TracingReporter;
use crosscut_application::pipeline::Pipeline;
use crosscut_application::registry::{ConcernRegistry, SchemaRegistry};
use crosscut_domain::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Assemble a pipeline from configuration
///
/// The cache backend comes from `config.cache`, slow calls are reported
/// through the tracing reporter, and the default measure threshold
/// comes from `config.pipeline`.
pub fn build_pipeline(
    config: &AppConfig,
    schemas: SchemaRegistry,
    concerns: ConcernRegistry,
) -> Result<Pipeline> {
    let cache = build_cache_provider(&config.cache);
    let operations = concerns.len();

    let pipeline = Pipeline::builder()
        .with_cache(cache)
        .with_reporter(Arc::new(TracingReporter::new()))
        .with_schemas(schemas)
        .with_concerns(concerns)
        .with_slow_call_threshold(Duration::from_millis(config.pipeline.slow_call_threshold_ms))
        .build()?;

    info!(operations, "interception pipeline assembled");
    Ok(pipeline)
}
