//! OS theme change detection.
//!
//! The watcher polls the host preference egui reports and publishes every change
//! through a [`ThemeNotifier`]. The application listens on that channel for the
//! lifetime of its [`Subscription`].

use std::sync::mpsc::{channel, Receiver};

use alf_wallet::{Subscription, ThemeNotifier, ThemeSettings};

/// Publishes OS light/dark changes.
pub struct SystemThemeWatcher {
    notifier: ThemeNotifier,
    last_seen: Option<egui::Theme>,
}

impl SystemThemeWatcher {
    pub fn new(notifier: ThemeNotifier) -> Self {
        Self {
            notifier,
            last_seen: None,
        }
    }

    /// Checks the host preference and notifies if it changed since the last poll.
    pub fn poll(&mut self, ctx: &egui::Context) {
        self.observe(ctx.system_theme());
    }

    fn observe(&mut self, current: Option<egui::Theme>) {
        let Some(current) = current else {
            return;
        };
        if self.last_seen == Some(current) {
            return;
        }

        self.last_seen = Some(current);
        let theme = match current {
            egui::Theme::Dark => ThemeSettings::Dark,
            egui::Theme::Light => ThemeSettings::Light,
        };
        log::info!("Host theme is now {}", theme);
        self.notifier.notify(theme);
    }
}

/// Receiving end of the host theme channel, held by the application.
pub struct SystemThemeListener {
    receiver: Receiver<ThemeSettings>,
    _subscription: Subscription,
}

impl SystemThemeListener {
    pub fn subscribe(notifier: &ThemeNotifier) -> Self {
        let (sender, receiver) = channel();
        let subscription = notifier.subscribe(move |theme| {
            let _ = sender.send(theme);
        });
        Self {
            receiver,
            _subscription: subscription,
        }
    }

    /// Returns the most recent host theme received since the last call, if any.
    pub fn latest(&self) -> Option<ThemeSettings> {
        self.receiver.try_iter().last()
    }
}
