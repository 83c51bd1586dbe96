use crate::errors::StorageError;
use crate::store::Action;
use crate::theme::ThemeSettings;

/// String-keyed persistent storage.
///
/// Mirrors the browser-style local storage contract: values are plain strings,
/// a single key is read or written atomically, and there are no transactions.
/// Writes may be buffered until `flush`.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    fn set_string(&mut self, key: &str, value: String);

    /// Removes `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str);

    /// Persists buffered writes to the backing medium
    fn flush(&mut self) -> Result<(), StorageError> {
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        (**self).set_string(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        (**self).flush()
    }
}

/// Theme hook offered by the native host shell.
///
/// Absent when running outside the desktop shell (headless runs, tests).
pub trait NativeThemeCapability {
    /// Fire-and-forget request to switch the native theme
    fn set_native_theme(&self, theme: ThemeSettings);
}

/// Sink for actions against the shared application state.
pub trait StateDispatcher {
    fn dispatch(&mut self, action: Action);
}

impl<D: StateDispatcher + ?Sized> StateDispatcher for &mut D {
    fn dispatch(&mut self, action: Action) {
        (**self).dispatch(action)
    }
}
