//! End-to-end pipeline scenarios against a real in-memory cache
//!
//! The fixtures model a small rental-car service layer: `GetAll`-style
//! reads declare result caching under a service group, `Add`-style
//! writes declare validation and group invalidation.

use crosscut_application::pipeline::{Invocation, Pipeline};
use crosscut_application::registry::{ConcernRegistry, SchemaRegistry};
use crosscut_domain::error::Error;
use crosscut_domain::ports::infrastructure::reporter::{PerformanceReporter, SlowOperationReport};
use crosscut_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use crosscut_domain::value_objects::{ConcernDeclaration, Constraint, Operation, RuleOutcome, ValidationSchema};
use crosscut_providers::cache::MemoryCacheProvider;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const CAR_READ_GROUP: &str = "CarService.Get";

#[derive(Debug, Default)]
struct RecordingReporter {
    reports: Mutex<Vec<SlowOperationReport>>,
}

impl PerformanceReporter for RecordingReporter {
    fn report(&self, report: SlowOperationReport) {
        self.reports.lock().unwrap().push(report);
    }
}

fn car_schema() -> ValidationSchema {
    ValidationSchema::new("car")
        .field("description", vec![Constraint::Required, Constraint::MinLength(2)])
        .field("daily_price", vec![Constraint::Required, Constraint::Range { min: 0.0, max: 10_000.0 }])
}

fn car_concerns() -> ConcernRegistry {
    let mut concerns = ConcernRegistry::new();
    concerns.register(
        "CarService.GetAll",
        [ConcernDeclaration::cache_put(CAR_READ_GROUP)],
    );
    concerns.register(
        "CarService.Add",
        [
            ConcernDeclaration::validate("car"),
            ConcernDeclaration::cache_invalidate(CAR_READ_GROUP),
        ],
    );
    concerns
}

fn car_pipeline(cache: Arc<MemoryCacheProvider>) -> Pipeline {
    let mut schemas = SchemaRegistry::new();
    schemas.register(car_schema());

    Pipeline::builder()
        .with_cache(cache)
        .with_schemas(schemas)
        .with_concerns(car_concerns())
        .build()
        .unwrap()
}

/// Target returning `result`, counting how often it actually runs
fn counted(counter: &Arc<AtomicUsize>, result: Value) -> impl FnOnce() -> std::pin::Pin<Box<dyn Future<Output = crosscut_domain::error::Result<Value>> + Send>> + Send + 'static {
    let counter = Arc::clone(counter);
    move || {
        Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(result)
        })
    }
}

#[tokio::test]
async fn cache_hit_bypasses_target_execution() {
    let cache = Arc::new(MemoryCacheProvider::new());
    let pipeline = car_pipeline(Arc::clone(&cache));
    let calls = Arc::new(AtomicUsize::new(0));
    let cars = json!([{"id": 1, "description": "sedan"}]);

    let first = pipeline
        .invoke(Invocation::new(
            Operation::new("CarService.GetAll"),
            counted(&calls, cars.clone()),
        ))
        .await
        .unwrap();

    let second = pipeline
        .invoke(Invocation::new(
            Operation::new("CarService.GetAll"),
            counted(&calls, json!("must not run")),
        ))
        .await
        .unwrap();

    // Target invoked exactly once; second result served from cache
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, cars);
    assert_eq!(second, cars);
}

#[tokio::test]
async fn differing_arguments_are_cached_independently() {
    let cache: Arc<dyn CacheProvider> = Arc::new(MemoryCacheProvider::new());
    let mut concerns = ConcernRegistry::new();
    concerns.register(
        "CarService.GetCarsByBrandId",
        [ConcernDeclaration::cache_put(CAR_READ_GROUP)],
    );
    let pipeline = Pipeline::builder()
        .with_cache(Arc::clone(&cache))
        .with_concerns(concerns)
        .build()
        .unwrap();
    let calls = Arc::new(AtomicUsize::new(0));

    for brand_id in [1i64, 2, 1] {
        pipeline
            .invoke(Invocation::new(
                Operation::new("CarService.GetCarsByBrandId").with_arg(brand_id),
                counted(&calls, json!([brand_id])),
            ))
            .await
            .unwrap();
    }

    // brand 1 hits cache on its second call, brand 2 is its own entry
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.size().await.unwrap(), 2);
}

#[tokio::test]
async fn failing_validation_skips_target_and_cache() {
    let cache = Arc::new(MemoryCacheProvider::new());
    // Pre-populated read entry must survive the failed write
    cache
        .set_json(
            "CarService.GetAll",
            "[]",
            CacheEntryConfig::new().with_group(CAR_READ_GROUP),
        )
        .await
        .unwrap();

    let pipeline = car_pipeline(Arc::clone(&cache));
    let calls = Arc::new(AtomicUsize::new(0));

    let err = pipeline
        .invoke(Invocation::new(
            Operation::new("CarService.Add").with_arg(json!({"description": "x", "daily_price": 50})),
            counted(&calls, json!(1)),
        ))
        .await
        .unwrap_err();

    match err {
        Error::Validation { field, constraint, .. } => {
            assert_eq!(field, "description");
            assert_eq!(constraint, "min_length");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    // Zero cache mutations: the read group entry is still there
    assert!(cache.get_json("CarService.GetAll").await.unwrap().is_some());
}

#[tokio::test]
async fn failing_business_rule_skips_target_and_cache() {
    let cache = Arc::new(MemoryCacheProvider::new());
    cache
        .set_json(
            "CarService.GetAll",
            "[]",
            CacheEntryConfig::new().with_group(CAR_READ_GROUP),
        )
        .await
        .unwrap();

    let pipeline = car_pipeline(Arc::clone(&cache));
    let calls = Arc::new(AtomicUsize::new(0));

    let err = pipeline
        .invoke(
            Invocation::new(
                Operation::new("CarService.Add")
                    .with_arg(json!({"description": "X", "daily_price": 50})),
                counted(&calls, json!(1)),
            )
            .with_rule(|| RuleOutcome::failed("name already exists")),
        )
        .await
        .unwrap_err();

    match err {
        Error::Rule { reason } => assert_eq!(reason, "name already exists"),
        other => panic!("expected rule error, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(cache.get_json("CarService.GetAll").await.unwrap().is_some());
}

#[tokio::test]
async fn write_invalidates_read_group() {
    let cache = Arc::new(MemoryCacheProvider::new());
    let pipeline = car_pipeline(Arc::clone(&cache));
    let reads = Arc::new(AtomicUsize::new(0));

    let get_all = |result: Value| {
        Invocation::new(Operation::new("CarService.GetAll"), counted(&reads, result))
    };

    pipeline.invoke(get_all(json!([]))).await.unwrap();

    // Add declares CacheInvalidate(CarService.Get); GetAll is in that group
    pipeline
        .invoke(Invocation::new(
            Operation::new("CarService.Add")
                .with_arg(json!({"description": "family sedan", "daily_price": 50})),
            || Box::pin(async { Ok(json!(1)) }),
        ))
        .await
        .unwrap();

    let refreshed = pipeline
        .invoke(get_all(json!([{"id": 1, "description": "family sedan"}])))
        .await
        .unwrap();

    // Second read missed the cache and re-invoked the target
    assert_eq!(reads.load(Ordering::SeqCst), 2);
    assert_eq!(refreshed, json!([{"id": 1, "description": "family sedan"}]));
}

#[tokio::test]
async fn intervening_unrelated_write_keeps_read_cached() {
    let cache: Arc<dyn CacheProvider> = Arc::new(MemoryCacheProvider::new());
    let mut concerns = car_concerns();
    concerns.register(
        "BrandService.Add",
        [ConcernDeclaration::cache_invalidate("BrandService.Get")],
    );
    let mut schemas = SchemaRegistry::new();
    schemas.register(car_schema());
    let pipeline = Pipeline::builder()
        .with_cache(Arc::clone(&cache))
        .with_schemas(schemas)
        .with_concerns(concerns)
        .build()
        .unwrap();
    let reads = Arc::new(AtomicUsize::new(0));

    pipeline
        .invoke(Invocation::new(
            Operation::new("CarService.GetAll"),
            counted(&reads, json!([])),
        ))
        .await
        .unwrap();

    pipeline
        .invoke(Invocation::new(Operation::new("BrandService.Add"), || {
            Box::pin(async { Ok(json!(1)) })
        }))
        .await
        .unwrap();

    pipeline
        .invoke(Invocation::new(
            Operation::new("CarService.GetAll"),
            counted(&reads, json!(["stale"])),
        ))
        .await
        .unwrap();

    // No intervening car write: second read still served from cache
    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cache_hit_never_triggers_invalidation() {
    let cache: Arc<dyn CacheProvider> = Arc::new(MemoryCacheProvider::new());
    let mut concerns = ConcernRegistry::new();
    // A hybrid operation: caches its own result and invalidates another group
    concerns.register(
        "ReportService.Rebuild",
        [
            ConcernDeclaration::cache_put("ReportService.Get"),
            ConcernDeclaration::cache_invalidate("CarService.Get"),
        ],
    );
    let pipeline = Pipeline::builder()
        .with_cache(Arc::clone(&cache))
        .with_concerns(concerns)
        .build()
        .unwrap();

    let seed_read_entry = || async {
        cache
            .set_json(
                "CarService.GetAll",
                "[]",
                CacheEntryConfig::new().with_group(CAR_READ_GROUP),
            )
            .await
            .unwrap();
    };

    seed_read_entry().await;
    pipeline
        .invoke(Invocation::new(Operation::new("ReportService.Rebuild"), || {
            Box::pin(async { Ok(json!({"rows": 3})) })
        }))
        .await
        .unwrap();
    // Miss path ran: the car read group was invalidated
    assert!(cache.get_json("CarService.GetAll").await.unwrap().is_none());

    seed_read_entry().await;
    let cached = pipeline
        .invoke(Invocation::new(Operation::new("ReportService.Rebuild"), || {
            Box::pin(async { Ok(json!("must not run")) })
        }))
        .await
        .unwrap();
    // Hit path: result from cache, no invalidation of the reseeded entry
    assert_eq!(cached, json!({"rows": 3}));
    assert!(cache.get_json("CarService.GetAll").await.unwrap().is_some());
}

#[tokio::test]
async fn target_failure_passes_through_and_skips_cache_writes() {
    let cache = Arc::new(MemoryCacheProvider::new());
    let pipeline = car_pipeline(Arc::clone(&cache));
    let calls = Arc::new(AtomicUsize::new(0));

    let failing = |calls: &Arc<AtomicUsize>| {
        let calls = Arc::clone(calls);
        move || -> std::pin::Pin<Box<dyn Future<Output = crosscut_domain::error::Result<Value>> + Send>> {
            Box::pin(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(Error::target("repository unavailable"))
            })
        }
    };

    let err = pipeline
        .invoke(Invocation::new(
            Operation::new("CarService.GetAll"),
            failing(&calls),
        ))
        .await
        .unwrap_err();
    match err {
        Error::Target { message, .. } => assert_eq!(message, "repository unavailable"),
        other => panic!("expected target error, got {other:?}"),
    }
    assert_eq!(cache.size().await.unwrap(), 0);

    // Nothing was cached, so the next call executes the target again
    pipeline
        .invoke(Invocation::new(
            Operation::new("CarService.GetAll"),
            failing(&calls),
        ))
        .await
        .unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn measure_reports_slow_calls_only() {
    let cache = Arc::new(MemoryCacheProvider::new());
    let reporter = Arc::new(RecordingReporter::default());
    let mut concerns = ConcernRegistry::new();
    concerns.register(
        "RentalService.GetRentalDetails",
        [ConcernDeclaration::measure(Some(Duration::from_millis(250)))],
    );
    let pipeline = Pipeline::builder()
        .with_cache(cache)
        .with_reporter(reporter.clone())
        .with_concerns(concerns)
        .build()
        .unwrap();

    pipeline
        .invoke(Invocation::new(
            Operation::new("RentalService.GetRentalDetails"),
            || Box::pin(async { Ok(json!([])) }),
        ))
        .await
        .unwrap();
    assert!(reporter.reports.lock().unwrap().is_empty());

    pipeline
        .invoke(Invocation::new(
            Operation::new("RentalService.GetRentalDetails"),
            || {
                Box::pin(async {
                    tokio::time::sleep(Duration::from_millis(400)).await;
                    Ok(json!([]))
                })
            },
        ))
        .await
        .unwrap();

    let reports = reporter.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].operation, "RentalService.GetRentalDetails");
    assert!(reports[0].elapsed >= Duration::from_millis(400));
}

#[tokio::test]
async fn measure_wraps_failed_invocations_too() {
    let cache = Arc::new(MemoryCacheProvider::new());
    let reporter = Arc::new(RecordingReporter::default());
    let mut concerns = ConcernRegistry::new();
    concerns.register(
        "RentalService.Rent",
        [ConcernDeclaration::measure(Some(Duration::from_millis(1)))],
    );
    let pipeline = Pipeline::builder()
        .with_cache(cache)
        .with_reporter(reporter.clone())
        .with_concerns(concerns)
        .build()
        .unwrap();

    let err = pipeline
        .invoke(Invocation::new(Operation::new("RentalService.Rent"), || {
            Box::pin(async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                Err(Error::target("payment rejected"))
            })
        }))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Target { .. }));
    assert_eq!(reporter.reports.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn operation_without_concerns_is_a_plain_call() {
    let cache: Arc<dyn CacheProvider> = Arc::new(MemoryCacheProvider::new());
    let pipeline = Pipeline::builder()
        .with_cache(Arc::clone(&cache))
        .build()
        .unwrap();

    let result = pipeline
        .invoke(Invocation::new(Operation::new("ColorService.GetAll"), || {
            Box::pin(async { Ok(json!(["red", "green"])) })
        }))
        .await
        .unwrap();

    assert_eq!(result, json!(["red", "green"]));
    assert_eq!(cache.size().await.unwrap(), 0);
}

#[tokio::test]
async fn validate_concern_with_unknown_schema_is_a_configuration_error() {
    let cache = Arc::new(MemoryCacheProvider::new());
    let mut concerns = ConcernRegistry::new();
    concerns.register("Op", [ConcernDeclaration::validate("missing")]);
    let pipeline = Pipeline::builder()
        .with_cache(cache)
        .with_concerns(concerns)
        .build()
        .unwrap();

    let err = pipeline
        .invoke(Invocation::new(
            Operation::new("Op").with_arg(json!({})),
            || Box::pin(async { Ok(json!(null)) }),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[tokio::test]
async fn concurrent_reads_share_one_store() {
    let cache = Arc::new(MemoryCacheProvider::new());
    let pipeline = Arc::new(car_pipeline(Arc::clone(&cache)));
    let calls = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let pipeline = Arc::clone(&pipeline);
        let calls = Arc::clone(&calls);
        handles.push(tokio::spawn(async move {
            pipeline
                .invoke(Invocation::new(
                    Operation::new("CarService.GetAll"),
                    counted(&calls, json!([])),
                ))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), json!([]));
    }

    // No single-flight guarantee, but every call lands on the same key
    assert!(calls.load(Ordering::SeqCst) >= 1);
    assert_eq!(cache.size().await.unwrap(), 1);

    // A later call is served from the now-warm cache
    let warm = Arc::new(AtomicUsize::new(0));
    pipeline
        .invoke(Invocation::new(
            Operation::new("CarService.GetAll"),
            counted(&warm, json!("must not run")),
        ))
        .await
        .unwrap();
    assert_eq!(warm.load(Ordering::SeqCst), 0);
}
