use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use crate::common::browser_window;

// every key is namespaced so the portfolio does not collide with other apps
// served from the same origin
fn storage_key(key: &str) -> String {
    format!("portfolio_{}", key)
}

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    if browser_window().is_none() {
        return;
    }

    let key = storage_key(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a key that was never written is the normal first-visit case, not a failure
fn stored<T>(result: Result<T, StorageError>) -> Result<Option<T>, StorageError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    if browser_window().is_none() {
        return Ok(None);
    }

    let key = storage_key(key);

    stored(LocalStorage::get(key.clone())).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// values that know their own storage key and how to fall back when nothing is stored
pub trait Persisted
where
    Self: Serialize,
    Self: for<'a> Deserialize<'a>,
{
    const KEY: &'static str;

    fn store(&self)
    where
        Self: Sized + Clone,
    {
        set_local_storage(Self::KEY, self.clone())
    }

    fn fetch() -> Option<Self>
    where
        Self: Sized,
    {
        get_local_storage(Self::KEY).ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use portfolio_common::Theme;

    use super::*;

    #[test]
    fn keys_are_namespaced() {
        assert_eq!(storage_key("theme"), "portfolio_theme");
    }

    #[test]
    fn missing_key_is_not_an_error() {
        let missing: Result<u8, StorageError> =
            Err(StorageError::KeyNotFound("portfolio_theme".to_owned()));
        assert!(matches!(stored(missing), Ok(None)));

        assert!(matches!(stored::<u8>(Ok(7)), Ok(Some(7))));
    }

    #[test]
    fn malformed_value_is_still_an_error() {
        let bad = serde_json::from_str::<u8>("\"dark\"").unwrap_err();
        let result: Result<u8, StorageError> = Err(StorageError::SerdeError(bad));
        assert!(stored(result).is_err());
    }

    #[test]
    fn fetch_without_a_browser_falls_back() {
        assert_eq!(Theme::fetch(), None);

        // storing is a no-op rather than a panic
        Theme::Dark.store();
    }
}
