//! Config file round-trip and edge case tests.

use std::path::PathBuf;
use steamglance_core::ArtworkStyle;
use steamglance_store::{BridgeConfig, StoreError};
use tempfile::TempDir;

fn configured() -> BridgeConfig {
    BridgeConfig {
        steam_api_key: "KEY".to_string(),
        steam_id: "76561197960287930".to_string(),
        update_interval: 45,
        artwork_style: ArtworkStyle::Library,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    configured().save_to(&path).await.unwrap();
    let loaded = BridgeConfig::load_from(&path).await.unwrap();

    assert_eq!(loaded, configured());
}

#[tokio::test]
async fn test_missing_file_yields_defaults() {
    let path = PathBuf::from("/nonexistent/steamglance/config.json");
    let loaded = BridgeConfig::load_from(&path).await.unwrap();
    assert_eq!(loaded, BridgeConfig::default());
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("steamglance").join("config.json");

    configured().save_to(&path).await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_corrupt_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    let result = BridgeConfig::load_from(&path).await;
    assert!(matches!(result, Err(StoreError::Serialization(_))));
}

#[tokio::test]
async fn test_file_written_with_snake_case_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    configured().save_to(&path).await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
    assert_eq!(raw["steam_id"], "76561197960287930");
    assert_eq!(raw["update_interval"], 45);
    assert_eq!(raw["artwork_style"], "library");
    assert_eq!(raw["rate_limit_period_ms"], 1000);
}

#[tokio::test]
async fn test_overwrite_keeps_latest() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    configured().save_to(&path).await.unwrap();
    let mut updated = configured();
    updated.set_update_interval(120).unwrap();
    updated.save_to(&path).await.unwrap();

    let loaded = BridgeConfig::load_from(&path).await.unwrap();
    assert_eq!(loaded.update_interval, 120);
}
