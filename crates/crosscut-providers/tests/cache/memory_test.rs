//! Memory Cache Provider Tests

use crosscut_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use crosscut_providers::cache::MemoryCacheProvider;
use std::time::Duration;

#[tokio::test]
async fn test_memory_provider_round_trip() {
    let provider = MemoryCacheProvider::new();

    provider
        .set_json("cars:all", r#"[{"id":1}]"#, CacheEntryConfig::default())
        .await
        .unwrap();

    let retrieved = provider.get_json("cars:all").await.unwrap();
    assert_eq!(retrieved.as_deref(), Some(r#"[{"id":1}]"#));

    assert!(provider.exists("cars:all").await.unwrap());
    assert!(provider.delete("cars:all").await.unwrap());
    assert!(!provider.exists("cars:all").await.unwrap());
    assert!(provider.get_json("cars:all").await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_provider_nonexistent_key() {
    let provider = MemoryCacheProvider::new();

    assert!(provider.get_json("nonexistent").await.unwrap().is_none());
    assert!(!provider.exists("nonexistent").await.unwrap());
    assert!(!provider.delete("nonexistent").await.unwrap());
}

#[tokio::test]
async fn test_memory_provider_ttl_expiry() {
    let provider = MemoryCacheProvider::new();

    provider
        .set_json(
            "short-lived",
            "\"v\"",
            CacheEntryConfig::new().with_ttl(Duration::from_millis(1)),
        )
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(provider.get_json("short-lived").await.unwrap().is_none());
    assert_eq!(provider.size().await.unwrap(), 0);
}

#[tokio::test]
async fn test_memory_provider_group_invalidation() {
    let provider = MemoryCacheProvider::new();
    let group_config = || CacheEntryConfig::new().with_group("CarService.Get");

    provider
        .set_json("CarService.GetAll", "[]", group_config())
        .await
        .unwrap();
    provider
        .set_json("CarService.GetById|i:1", "{}", group_config())
        .await
        .unwrap();
    provider
        .set_json("BrandService.GetAll", "[]", CacheEntryConfig::new().with_group("BrandService.Get"))
        .await
        .unwrap();

    let removed = provider.invalidate_group("CarService.Get").await.unwrap();
    assert_eq!(removed, 2);

    assert!(provider.get_json("CarService.GetAll").await.unwrap().is_none());
    assert!(provider.get_json("CarService.GetById|i:1").await.unwrap().is_none());
    // Unrelated group untouched
    assert!(provider.get_json("BrandService.GetAll").await.unwrap().is_some());
}

#[tokio::test]
async fn test_memory_provider_invalidate_empty_group_is_noop() {
    let provider = MemoryCacheProvider::new();
    let removed = provider.invalidate_group("no-such-group").await.unwrap();
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn test_memory_provider_overwrite_preserves_groups() {
    let provider = MemoryCacheProvider::new();

    provider
        .set_json("k", "\"v1\"", CacheEntryConfig::new().with_group("g"))
        .await
        .unwrap();

    // Overwrite without groups: value refreshed, membership kept
    provider
        .set_json("k", "\"v2\"", CacheEntryConfig::default())
        .await
        .unwrap();
    assert_eq!(provider.get_json("k").await.unwrap().as_deref(), Some("\"v2\""));

    assert_eq!(provider.invalidate_group("g").await.unwrap(), 1);
    assert!(provider.get_json("k").await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_provider_overwrite_respecifies_groups() {
    let provider = MemoryCacheProvider::new();

    provider
        .set_json("k", "\"v1\"", CacheEntryConfig::new().with_group("old"))
        .await
        .unwrap();
    provider
        .set_json("k", "\"v2\"", CacheEntryConfig::new().with_group("new"))
        .await
        .unwrap();

    // Old membership replaced
    assert_eq!(provider.invalidate_group("old").await.unwrap(), 0);
    assert!(provider.exists("k").await.unwrap());
    assert_eq!(provider.invalidate_group("new").await.unwrap(), 1);
    assert!(!provider.exists("k").await.unwrap());
}

#[tokio::test]
async fn test_memory_provider_clear() {
    let provider = MemoryCacheProvider::new();

    provider
        .set_json("key1", "\"value1\"", CacheEntryConfig::default())
        .await
        .unwrap();
    provider
        .set_json("key2", "\"value2\"", CacheEntryConfig::default())
        .await
        .unwrap();
    assert_eq!(provider.size().await.unwrap(), 2);

    provider.clear().await.unwrap();

    assert_eq!(provider.size().await.unwrap(), 0);
    assert!(!provider.exists("key1").await.unwrap());
    assert!(!provider.exists("key2").await.unwrap());
}

#[tokio::test]
async fn test_memory_provider_stats() {
    let provider = MemoryCacheProvider::new();

    provider
        .set_json("k", "\"v\"", CacheEntryConfig::default())
        .await
        .unwrap();

    provider.get_json("k").await.unwrap();
    provider.get_json("k").await.unwrap();
    provider.get_json("absent").await.unwrap();

    let stats = provider.stats().await.unwrap();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 1);
    assert!((stats.hit_rate - 2.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_memory_provider_concurrent_access() {
    use std::sync::Arc;

    let provider = Arc::new(MemoryCacheProvider::new());
    let mut handles = Vec::new();

    for worker in 0..8 {
        let provider = Arc::clone(&provider);
        handles.push(tokio::spawn(async move {
            for i in 0..50 {
                let key = format!("k{}", i % 10);
                provider
                    .set_json(
                        &key,
                        &format!("\"{worker}-{i}\""),
                        CacheEntryConfig::new().with_group("shared"),
                    )
                    .await
                    .unwrap();
                provider.get_json(&key).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Every live entry belongs to the shared group
    let size = provider.size().await.unwrap();
    assert_eq!(provider.invalidate_group("shared").await.unwrap(), size);
    assert_eq!(provider.size().await.unwrap(), 0);
}
