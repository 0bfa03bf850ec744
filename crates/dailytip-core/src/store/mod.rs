mod memory;
mod migrations;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::path::PathBuf;

use crate::error::StoreError;

/// Key of the persisted tip payload (JSON `{"text", "category"}`).
pub const TIP_KEY: &str = "sustainability-daily-tip";
/// Key of the date stamp the persisted tip belongs to.
pub const TIP_DATE_KEY: &str = "sustainability-daily-tip-date";
/// Key of the theme preference (`"dark"` / `"light"`).
pub const THEME_KEY: &str = "sustainability-daily-theme";
/// Key of the remembered notification permission decision.
pub const NOTIFICATION_PERMISSION_KEY: &str = "sustainability-daily-notifications";

/// String key-value store shared by the daily cache, the theme preference
/// and the notification backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Write every entry or none of them.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError>;

    /// Remove every key or none of them. Missing keys are not an error.
    fn remove_many(&mut self, keys: &[&str]) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        (**self).set_many(entries)
    }

    fn remove_many(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        (**self).remove_many(keys)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `DAILYTIP_DATA_DIR` wins when set. Otherwise `~/.config/dailytip/`, or
/// `~/.config/dailytip-dev/` with `DAILYTIP_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("DAILYTIP_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("DAILYTIP_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("dailytip-dev")
            } else {
                base_dir.join("dailytip")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
