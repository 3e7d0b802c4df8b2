//! End-to-end tests of the service stack: file source → cache → service.

use std::path::PathBuf;
use std::time::Duration;

use camdb_core::{AppConfig, CameraRecord, Environment, SourceConfig};
use camdb_store::{
    camera_service_from_config, CacheSettings, CachedStore, CameraService, CameraSource,
    FileSource,
};

const CSV: &str = "Camera;Latitude;Longitude\n\
                   UTR-CM-552 Neude rijbaan;52.09;5.12\n\
                   ERROR: offline;;\n\
                   UTR-CM-560 Westplein;52.0886;5.1078\n\
                   UTR-CM-501-Neude plein;52.0934;5.1182\n";

fn write_csv(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("cameras-defb.csv");
    std::fs::write(&path, CSV).expect("write csv");
    path
}

fn app_config(source: SourceConfig) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        expose_error_details: false,
        bind_addr: "127.0.0.1:0".parse().expect("socket addr"),
        log_level: "info".to_string(),
        source,
        enable_caching: true,
        cache_expiration: Duration::from_secs(1800),
        cors_origin: "http://localhost:4200".to_string(),
    }
}

#[tokio::test]
async fn file_source_end_to_end_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = camera_service_from_config(&app_config(SourceConfig::File(write_csv(&dir))));

    let all = service.get_all().await.expect("get_all");

    assert_eq!(all.len(), 3);
    assert_eq!(
        all[0],
        CameraRecord {
            number: 552,
            code: "UTR-CM-552".to_string(),
            name: "Neude rijbaan".to_string(),
            latitude: "52.09".to_string(),
            longitude: "5.12".to_string(),
        }
    );
    assert!(all.iter().all(|c| !c.code.starts_with("ERROR")));
}

#[tokio::test]
async fn search_through_cache_uses_cached_list_after_file_removal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir);
    let service = CameraService::new(CachedStore::new(
        CameraSource::File(FileSource::new(&path)),
        CacheSettings::default(),
    ));

    let first = service.search("neude").await.expect("search");
    std::fs::remove_file(&path).expect("remove csv");
    let second = service.search("NEUDE").await.expect("served from cache");

    let codes: Vec<&str> = second.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(first, second);
    assert_eq!(codes, vec!["UTR-CM-552", "UTR-CM-501"]);
}

#[tokio::test]
async fn missing_file_propagates_not_found_through_service() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = camera_service_from_config(&app_config(SourceConfig::File(
        dir.path().join("absent.csv"),
    )));

    let err = service.get_all().await.expect_err("missing file must fail");
    assert!(err.is_not_found(), "expected NotFound, got: {err:?}");

    let err = service.search("neude").await.expect_err("search must fail too");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn bundled_source_is_the_default_stack() {
    let service = camera_service_from_config(&app_config(SourceConfig::Bundled(
        camdb_core::DEFAULT_RESOURCE_NAME.to_string(),
    )));

    let neude = service.search("neude").await.expect("search");
    assert!(!neude.is_empty());
    assert!(neude
        .iter()
        .all(|c| c.name.to_lowercase().contains("neude")));
}
