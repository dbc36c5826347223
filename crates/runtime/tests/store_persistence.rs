use stats_core::{PlayerStats, StatField, from_tsv};
use stats_runtime::{FileStatsRepository, StatStore, StoreConfig};
use std::fs;
use tempfile::TempDir;

const KEY: &str = "volley-player-stats";

fn file_store(dir: &TempDir) -> StatStore {
    StatStore::open(FileStatsRepository::new(dir.path(), KEY))
}

/// A record written by one store is restored field-for-field by a fresh store
/// on the same directory (simulated restart).
#[test]
fn test_restart_restores_identical_record() {
    let temp_dir = TempDir::new().unwrap();

    let expected = {
        let mut store = file_store(&temp_dir);
        for (offset, field) in StatField::ALL.iter().enumerate() {
            store.update_stat(*field, offset as u32 * 2 + 1);
        }
        store.increment_stat(StatField::Kills);
        store.decrement_stat(StatField::DigErrors);
        *store.stats()
    };

    let restarted = file_store(&temp_dir);
    assert_eq!(restarted.stats(), &expected);
    assert_eq!(restarted.get(StatField::Kills), 2);
    assert_eq!(restarted.get(StatField::DigErrors), 28);
}

#[test]
fn test_reset_is_persisted() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut store = file_store(&temp_dir);
        store.update_stat(StatField::Blocks, 9);
        store.reset_stats();
    }

    assert!(file_store(&temp_dir).stats().is_zeroed());
}

#[test]
fn test_corrupt_file_starts_from_zero_and_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(format!("{KEY}.json"));
    fs::write(&path, "{\"state\": {\"stats\": {\"kills\": \"many\"}}, \"version\": 0}").unwrap();

    let mut store = file_store(&temp_dir);
    assert!(store.stats().is_zeroed());

    store.increment_stat(StatField::Kills);
    assert_eq!(file_store(&temp_dir).get(StatField::Kills), 1);
}

#[test]
fn test_wrong_version_starts_from_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(format!("{KEY}.json"));
    fs::write(&path, "{\"state\": {\"stats\": {\"kills\": 4}}, \"version\": 1}").unwrap();

    assert!(file_store(&temp_dir).stats().is_zeroed());
}

#[test]
fn test_partial_record_fills_missing_fields_with_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(format!("{KEY}.json"));
    fs::write(&path, "{\"state\": {\"stats\": {\"kills\": 4}}, \"version\": 0}").unwrap();

    let store = file_store(&temp_dir);
    assert_eq!(store.stats(), &PlayerStats::ZERO.with(StatField::Kills, 4));
}

#[test]
fn test_export_parses_back_to_store_record() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = file_store(&temp_dir);
    store.update_stat(StatField::ServeAttempts, 10);
    store.update_stat(StatField::ServiceErrors, 1);
    store.increment_stat(StatField::Assists);

    let block = store.export_tsv();
    assert_eq!(from_tsv(&block).unwrap(), *store.stats());
}

#[test]
fn test_from_config_without_persistence_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig {
        enable_persistence: false,
        ..StoreConfig::default().with_data_dir(temp_dir.path())
    };

    let mut store = StatStore::from_config(&config);
    store.increment_stat(StatField::Aces);

    assert_eq!(store.get(StatField::Aces), 1);
    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[test]
fn test_from_config_with_persistence_uses_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::default().with_data_dir(temp_dir.path());

    let mut store = StatStore::from_config(&config);
    store.increment_stat(StatField::Aces);

    assert!(temp_dir.path().join(format!("{KEY}.json")).exists());
    assert!(store.location().ends_with(&format!("{KEY}.json")));
}
