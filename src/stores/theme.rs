//! Theme store
//!
//! Light/dark preference. No backend involved: the value is read from and
//! mirrored to device-local storage, and every change also flips a dark-mode
//! flag on the display root so the shell can restyle itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::store::Store;

/// Visual theme. `toggle` can only ever reach these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Named string preferences on the local device.
///
/// Only available in a rendering-capable environment, which is why stores
/// receive an `Option` of it. Lookups never fail; an absent key is simply
/// "no preference yet". Write failures are not surfaced at this layer.
pub trait PreferenceStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The display root's binary visual-mode flag.
pub trait DisplayRoot: Send + Sync {
    fn set_dark_mode(&self, dark: bool);
}

#[derive(Clone)]
pub struct ThemeStore {
    theme: Store<Theme>,
}

impl ThemeStore {
    /// Reads the persisted preference (stored `"dark"` selects [`Theme::Dark`],
    /// anything else or no storage means [`Theme::Light`]) and starts
    /// mirroring every change, including the initial value, to storage and
    /// the display root.
    pub fn new(
        storage: Option<Arc<dyn PreferenceStorage>>,
        display: Option<Arc<dyn DisplayRoot>>,
    ) -> Self {
        let initial = match storage
            .as_ref()
            .and_then(|s| s.get(config::THEME_STORAGE_KEY))
        {
            Some(value) if value == config::THEME_DARK_VALUE => Theme::Dark,
            _ => Theme::Light,
        };

        let theme = Store::new(initial);
        theme
            .subscribe(move |t| {
                if let Some(storage) = &storage {
                    storage.set(config::THEME_STORAGE_KEY, t.as_str());
                }
                if let Some(display) = &display {
                    display.set_dark_mode(t.is_dark());
                }
            })
            .detach();

        Self { theme }
    }

    /// The observable theme value.
    pub fn theme(&self) -> &Store<Theme> {
        &self.theme
    }

    /// Flips between light and dark.
    pub fn toggle(&self) {
        self.theme.update(Theme::toggled);
    }
}
