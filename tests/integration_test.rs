use alf_wallet::{
    to_app_data, Action, AppData, AppDataStore, AppDataValue, AppStore, FileStorage,
    KeyValueStore, MemoryStorage, Settings, SettingsStore, StateDispatcher, ThemeSettings,
    ThemeSwitchBridge, APPDATA_KEY, SETTINGS_KEY,
};
use anyhow::Result;
use chrono::{TimeZone, Utc};

#[test]
fn test_settings_survive_reopen() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("local-storage.json");

    {
        let mut store = SettingsStore::new(FileStorage::open(&path)?);
        store.save(&Settings::new("node.example", 12973))?;
    }

    let mut store = SettingsStore::new(FileStorage::open(&path)?);
    assert_eq!(store.load()?, Some(Settings::new("node.example", 12973)));
    assert_eq!(store.load_or_default(), Settings::new("node.example", 12973));

    Ok(())
}

#[test]
fn test_empty_storage_yields_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = SettingsStore::new(FileStorage::open(dir.path().join("missing.json"))?);

    let settings = store.load_or_default();
    assert_eq!(settings.host, "localhost");
    assert_eq!(settings.port, 10973);

    Ok(())
}

#[test]
fn test_last_write_wins_on_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("local-storage.json");

    let mut store = SettingsStore::new(FileStorage::open(&path)?);
    store.save(&Settings::new("a", 1))?;
    store.save(&Settings::new("b", 2))?;
    drop(store);

    let store = SettingsStore::new(FileStorage::open(&path)?);
    assert_eq!(store.load()?, Some(Settings::new("b", 2)));

    Ok(())
}

#[test]
fn test_corrupt_settings_recover_to_defaults_and_are_removed_from_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("local-storage.json");

    {
        let mut storage = FileStorage::open(&path)?;
        storage.set_string(SETTINGS_KEY, "{\"host\": 42".to_string());
        storage.flush()?;
    }

    let mut store = SettingsStore::new(FileStorage::open(&path)?);
    assert!(store.load().is_err());
    assert_eq!(store.load_or_default(), Settings::default());
    drop(store);

    let storage = FileStorage::open(&path)?;
    assert_eq!(storage.get_string(SETTINGS_KEY), None);

    Ok(())
}

#[test]
fn test_settings_and_app_data_share_storage() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("local-storage.json");
    let checked_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();

    {
        let mut storage = FileStorage::open(&path)?;
        SettingsStore::new(&mut storage).save(&Settings::new("127.0.0.1", 22973))?;
        AppDataStore::new(&mut storage).save(&AppData {
            last_version_checked_at: checked_at,
        })?;
    }

    let mut storage = FileStorage::open(&path)?;
    let settings = SettingsStore::new(&mut storage).load_or_default();
    let app_data = AppDataStore::new(&mut storage).load_or_default();

    assert_eq!(settings, Settings::new("127.0.0.1", 22973));
    assert_eq!(app_data.last_version_checked_at, checked_at);
    assert!(storage.get_string(APPDATA_KEY).is_some());

    Ok(())
}

#[test]
fn test_codec_contract() -> Result<()> {
    let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(
        to_app_data("lastVersionCheckedAt", "2024-01-01T00:00:00.000Z")?,
        Some(AppDataValue::Timestamp(expected))
    );
    assert_eq!(to_app_data("unknown_key", "x")?, None);
    assert_eq!(to_app_data("", "raw")?, Some(AppDataValue::Raw("raw".to_string())));
    assert!(to_app_data("lastVersionCheckedAt", "2024-13-45").is_err());

    Ok(())
}

#[test]
fn test_theme_switch_reaches_store() {
    let mut store = AppStore::default();

    {
        let mut bridge = ThemeSwitchBridge::new(None, &mut store);
        bridge.switch_theme(ThemeSettings::Dark);
    }
    assert_eq!(store.state().theme, ThemeSettings::Dark);
    assert_eq!(store.dispatch_count(), 1);

    store.dispatch(Action::ThemeChanged(ThemeSettings::Light));
    assert_eq!(store.state().theme, ThemeSettings::Light);
}

#[test]
fn test_memory_storage_matches_file_storage_contract() -> Result<()> {
    let mut memory = SettingsStore::new(MemoryStorage::new());
    memory.save(&Settings::new("x", 3))?;
    assert_eq!(memory.load()?, Some(Settings::new("x", 3)));
    Ok(())
}
