//! 設定ファイルテスト

use accident_detect::config::{Config, API_URL_ENV};
use accident_detect::error::DetectError;
use tempfile::tempdir;

/// 設定ファイルがない場合はデフォルト
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読込失敗");
    assert_eq!(config, Config::default());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_endpoint("https://detect.example.com/api".to_string()).expect("設定失敗");
    config.set_timeout(15).expect("設定失敗");
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読込失敗");
    assert_eq!(loaded.api_base_url, "https://detect.example.com/api");
    assert_eq!(loaded.timeout_seconds, 15);
}

/// 一部の項目だけの設定ファイル
#[test]
fn test_load_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

    let config = Config::load_from(&path).expect("読込失敗");
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.api_base_url, Config::default().api_base_url);
}

/// タイムアウト0は1秒に補正
#[test]
fn test_load_zero_timeout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 0}"#).unwrap();

    let config = Config::load_from(&path).expect("読込失敗");
    assert_eq!(config.timeout_seconds, 1);
}

/// 壊れた設定ファイル
#[test]
fn test_load_invalid_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, DetectError::JsonParse(_)));
}

#[test]
fn test_invalid_values_rejected() {
    let mut config = Config::default();
    assert!(matches!(
        config.set_endpoint("ftp://example.com".to_string()),
        Err(DetectError::Config(_))
    ));
    assert!(matches!(config.set_timeout(0), Err(DetectError::Config(_))));
    assert_eq!(config, Config::default());
}

/// 引数のエンドポイントが最優先
#[test]
fn test_client_config_precedence() {
    let config = Config::default();
    let client = config.client_config(Some("https://override.example.com/"));
    assert_eq!(client.analyze_url(), "https://override.example.com/analyze");

    if std::env::var(API_URL_ENV).is_err() {
        let client = config.client_config(None);
        assert_eq!(client.api_base_url, config.api_base_url);
    }
}

/// 空白だけの引数は環境変数に譲る
#[test]
fn test_blank_endpoint_falls_through() {
    let config = Config::default();
    let env = Some("http://env.example.com/api".to_string());

    let client = config.resolve_client_config(Some("  "), env.clone());
    assert_eq!(client.analyze_url(), "http://env.example.com/api/analyze");

    let client = config.resolve_client_config(Some(""), Some(" ".to_string()));
    assert_eq!(client.api_base_url, config.api_base_url);

    let client = config.resolve_client_config(Some("https://arg.example.com"), env);
    assert_eq!(client.analyze_url(), "https://arg.example.com/analyze");
}
