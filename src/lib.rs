pub mod errors;
pub mod traits;
pub mod storage;
pub mod settings;
pub mod app_data;
pub mod theme;
pub mod theme_bridge;
pub mod store;

// Export seams
pub use traits::{KeyValueStore, NativeThemeCapability, StateDispatcher};

// Export errors
pub use errors::{DecodeError, SettingsError, StorageError, StoreError};

// Export storage backends
pub use storage::{FileStorage, MemoryStorage, read_json, write_json};

// Export settings and app data persistence
pub use settings::{Settings, SettingsStore, SETTINGS_KEY};
pub use app_data::{
    to_app_data, AppData, AppDataKey, AppDataStore, AppDataValue,
    APPDATA_KEY, VERSION_CHECK_INTERVAL
};

// Export theme support
pub use theme::{ThemePalette, ThemeSettings, hex_to_color32};
pub use theme_bridge::{Subscription, ThemeNotifier, ThemeSwitchBridge};

// Export state store
pub use store::{Action, AppStore, WalletState};
