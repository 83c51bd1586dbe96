//! Theme propagation between the UI, the native host and the state store.
//!
//! [`ThemeSwitchBridge`] pushes a user selection outward: to the host shell when it
//! offers a theming hook, and always into the state store.
//! [`ThemeNotifier`] carries notifications the other way, from the host to the UI.

use std::sync::{Arc, Mutex, Weak};

use crate::store::Action;
use crate::theme::ThemeSettings;
use crate::traits::{NativeThemeCapability, StateDispatcher};

/// Applies theme selections to the native host and the application state.
pub struct ThemeSwitchBridge<D> {
    native: Option<Box<dyn NativeThemeCapability>>,
    dispatcher: D,
}

impl<D: StateDispatcher> ThemeSwitchBridge<D> {
    pub fn new(native: Option<Box<dyn NativeThemeCapability>>, dispatcher: D) -> Self {
        Self { native, dispatcher }
    }

    pub fn has_native_capability(&self) -> bool {
        self.native.is_some()
    }

    /// Switches to `theme`.
    ///
    /// The native hook is called when present. Exactly one `ThemeChanged` action is
    /// dispatched either way.
    pub fn switch_theme(&mut self, theme: ThemeSettings) {
        match &self.native {
            Some(native) => native.set_native_theme(theme),
            None => log::debug!("No native theme capability, skipping host update for '{}'", theme),
        }
        self.dispatcher.dispatch(Action::ThemeChanged(theme));
    }

    pub fn into_dispatcher(self) -> D {
        self.dispatcher
    }
}

type Listener = Arc<dyn Fn(ThemeSettings) + Send + Sync>;

#[derive(Default)]
struct NotifierInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Host-to-UI theme notification channel.
///
/// Cloning yields another handle to the same channel.
#[derive(Clone, Default)]
pub struct ThemeNotifier {
    inner: Arc<Mutex<NotifierInner>>,
}

impl ThemeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`. It stays registered until the returned
    /// [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ThemeSettings) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Delivers `theme` to every listener registered when the call starts.
    ///
    /// Listeners run without the lock held, so they may subscribe, count or
    /// drop their own subscription.
    pub fn notify(&self, theme: ThemeSettings) {
        let listeners: Vec<Listener> = {
            let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            inner.listeners.iter().map(|(_, listener)| Arc::clone(listener)).collect()
        };
        for listener in listeners {
            listener(theme);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).listeners.len()
    }
}

/// Registration handle returned by [`ThemeNotifier::subscribe`].
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<NotifierInner>>,
}

impl Subscription {
    /// Removes the listener now. Same as dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
