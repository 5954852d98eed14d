//! Pipeline implementation and builder

use crate::cache_keys::KeyBuilder;
use crate::pipeline::invocation::{Invocation, TargetFn};
use crate::registry::{ConcernRegistry, SchemaRegistry};
use crate::rules::{RuleChain, RuleCheck};
use crate::timing::{NoopReporter, PerformanceMonitor};
use crate::validation::Validator;
use crosscut_domain::constants::DEFAULT_SLOW_CALL_THRESHOLD_MS;
use crosscut_domain::error::{Error, Result};
use crosscut_domain::ports::infrastructure::reporter::PerformanceReporter;
use crosscut_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use crosscut_domain::value_objects::{ConcernDeclaration, Operation};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Instrument, debug, info_span, warn};
use uuid::Uuid;

/// Builder for [`Pipeline`]
///
/// The cache backend is mandatory; the reporter defaults to a no-op
/// sink and both registries default to empty.
#[derive(Default)]
pub struct PipelineBuilder {
    cache: Option<Arc<dyn CacheProvider>>,
    reporter: Option<Arc<dyn PerformanceReporter>>,
    schemas: Option<SchemaRegistry>,
    concerns: Option<ConcernRegistry>,
    slow_call_threshold: Option<Duration>,
}

impl PipelineBuilder {
    /// Set the cache backend
    pub fn with_cache(mut self, cache: Arc<dyn CacheProvider>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the performance report sink
    pub fn with_reporter(mut self, reporter: Arc<dyn PerformanceReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Set the validation schema registry
    pub fn with_schemas(mut self, schemas: SchemaRegistry) -> Self {
        self.schemas = Some(schemas);
        self
    }

    /// Set the concern declaration registry
    pub fn with_concerns(mut self, concerns: ConcernRegistry) -> Self {
        self.concerns = Some(concerns);
        self
    }

    /// Set the default slow-call threshold used by `Measure` concerns
    /// that declare none
    pub fn with_slow_call_threshold(mut self, threshold: Duration) -> Self {
        self.slow_call_threshold = Some(threshold);
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<Pipeline> {
        let cache = self
            .cache
            .ok_or_else(|| Error::configuration("pipeline requires a cache backend"))?;
        let reporter = self.reporter.unwrap_or_else(|| Arc::new(NoopReporter));

        Ok(Pipeline {
            cache,
            monitor: PerformanceMonitor::new(reporter),
            schemas: Arc::new(self.schemas.unwrap_or_default()),
            concerns: Arc::new(self.concerns.unwrap_or_default()),
            slow_call_threshold: self
                .slow_call_threshold
                .unwrap_or(Duration::from_millis(DEFAULT_SLOW_CALL_THRESHOLD_MS)),
        })
    }
}

/// The interception pipeline
///
/// Holds the shared cache backend, the performance monitor, and the
/// startup-populated registries. The pipeline itself takes no per-call
/// lock; concurrency is bounded only at the cache backend, so
/// invocations from independent call sites run freely in parallel.
pub struct Pipeline {
    cache: Arc<dyn CacheProvider>,
    monitor: PerformanceMonitor,
    schemas: Arc<SchemaRegistry>,
    concerns: Arc<ConcernRegistry>,
    slow_call_threshold: Duration,
}

impl Pipeline {
    /// Start building a pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// The cache backend this pipeline stores results in
    pub fn cache(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.cache)
    }

    /// Invoke an operation through its declared concerns
    ///
    /// Returns the operation result (possibly served from cache) or the
    /// first short-circuiting failure. Target failures pass through
    /// unchanged; cache backend failures never surface from here.
    pub async fn invoke(&self, invocation: Invocation) -> Result<Value> {
        let Invocation {
            operation,
            rules,
            target,
        } = invocation;
        let concerns = self.concerns.concerns_for(&operation.name).to_vec();
        let correlation = Uuid::new_v4();
        let span = info_span!("invoke", operation = %operation.name, %correlation);

        async {
            let started = Instant::now();
            let outcome = self.run_stages(&operation, &concerns, rules, target).await;
            let elapsed = started.elapsed();

            // Measure wraps the entire span, validation and cache
            // lookup included, and reports on failure too.
            for concern in &concerns {
                if let ConcernDeclaration::Measure { threshold } = concern {
                    self.monitor.observe(
                        &operation.name,
                        threshold.unwrap_or(self.slow_call_threshold),
                        elapsed,
                    );
                }
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn run_stages(
        &self,
        operation: &Operation,
        concerns: &[ConcernDeclaration],
        rules: Vec<RuleCheck>,
        target: TargetFn,
    ) -> Result<Value> {
        // Validating
        for concern in concerns {
            if let ConcernDeclaration::Validate { schema } = concern {
                self.validate(operation, schema)?;
            }
        }
        RuleChain::run(rules).into_result()?;

        // CacheCheck: the key is derived once and shared by lookup and store
        let cache_key = concerns
            .iter()
            .any(|c| matches!(c, ConcernDeclaration::CachePut { .. }))
            .then(|| KeyBuilder::build_key(operation));

        if let Some(key) = &cache_key {
            if let Some(cached) = self.cache_lookup(key).await {
                debug!(%key, "cache hit");
                return Ok(cached);
            }
        }

        // Executing: a target failure propagates unchanged, skipping
        // every cache write and invalidation below.
        let result = target().await?;

        // PostProcess
        if let Some(key) = &cache_key {
            self.cache_store(key, &result, concerns).await;
        }
        for concern in concerns {
            if let ConcernDeclaration::CacheInvalidate { group } = concern {
                match self.cache.invalidate_group(group).await {
                    Ok(removed) => debug!(%group, removed, "cache group invalidated"),
                    Err(err) => warn!(%group, error = %err, "cache invalidation failed; continuing"),
                }
            }
        }

        Ok(result)
    }

    /// Run one `Validate` concern against the operation's structured
    /// arguments
    ///
    /// Scalar arguments carry no fields to check; an operation without
    /// structured arguments passes vacuously, matching declarative
    /// validators that only inspect matching parameter types.
    fn validate(&self, operation: &Operation, schema: &str) -> Result<()> {
        let schema = self
            .schemas
            .get(schema)
            .ok_or_else(|| Error::configuration(format!("unknown validation schema '{schema}'")))?;

        for instance in operation.json_args() {
            if let Some(violation) = Validator::check(schema, instance) {
                debug!(
                    operation = %operation.name,
                    field = %violation.field,
                    constraint = violation.constraint,
                    "validation failed"
                );
                return Err(Error::validation(
                    violation.field,
                    violation.constraint,
                    violation.message,
                ));
            }
        }
        Ok(())
    }

    /// Cache lookup that never fails the invocation
    ///
    /// Backend errors and corrupt payloads count as a miss: caching is
    /// an optimization, not a correctness requirement.
    async fn cache_lookup(&self, key: &str) -> Option<Value> {
        match self.cache.get_json(key).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(%key, error = %err, "corrupt cache payload; treating as miss");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(%key, error = %err, "cache read failed; treating as miss");
                None
            }
        }
    }

    /// Store a successful result under every declared `CachePut` group
    ///
    /// One entry is stored per key; its group membership is the union of
    /// the declared groups and its TTL comes from the first declaration
    /// carrying one. Write failures are logged and swallowed.
    async fn cache_store(&self, key: &str, result: &Value, concerns: &[ConcernDeclaration]) {
        let mut config = CacheEntryConfig::new();
        for concern in concerns {
            if let ConcernDeclaration::CachePut { group, ttl } = concern {
                config = config.with_group(group.clone());
                if config.ttl.is_none()
                    && let Some(ttl) = ttl
                {
                    config = config.with_ttl(*ttl);
                }
            }
        }

        if let Err(err) = self.cache.set_json(key, &result.to_string(), config).await {
            warn!(%key, error = %err, "cache write failed; continuing");
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("cache", &self.cache.provider_name())
            .field("operations", &self.concerns.len())
            .field("slow_call_threshold", &self.slow_call_threshold)
            .finish()
    }
}
