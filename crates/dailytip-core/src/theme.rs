//! Light/dark theme preference, persisted under [`THEME_KEY`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::StoreError;
use crate::store::{KeyValueStore, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

/// Stored theme, or `default` when nothing usable is stored.
pub fn load_theme(store: &impl KeyValueStore, default: Theme) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|e: String| {
            warn!(error = %e, "ignoring stored theme");
            default
        }),
        Ok(None) => default,
        Err(e) => {
            warn!(error = %e, "failed to read theme preference");
            default
        }
    }
}

/// # Errors
/// Returns an error if the store rejects the write.
pub fn save_theme(store: &mut impl KeyValueStore, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn load_falls_back_to_default() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store, Theme::Dark), Theme::Dark);

        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store, Theme::Light), Theme::Light);
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        save_theme(&mut store, Theme::Dark).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&store, Theme::Light), Theme::Dark);
    }
}
