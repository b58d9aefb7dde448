//! Hint flags in browser storage.
//!
//! Durable flags live in `localStorage`, session flags in `sessionStorage`.
//! A missing key reads as unset; any other failure (private browsing, quota,
//! storage disabled) surfaces as [`PortfolioError::StorageUnavailable`] and
//! the hint scheduler carries on without persistence.

use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, SessionStorage, Storage};
use portfolio_core::{CoreResult, FlagStore, HintScope, PortfolioError};

/// [`FlagStore`] over the Web Storage API
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFlagStore;

impl BrowserFlagStore {
    pub fn new() -> Self {
        Self
    }
}

/// Whether the storage area for `scope` can be opened.
///
/// gloo throws into JS when the area is blocked, so this is checked before
/// every access.
fn reachable(scope: HintScope) -> bool {
    let window = gloo::utils::window();
    let area = match scope {
        HintScope::Durable => window.local_storage(),
        HintScope::Session => window.session_storage(),
    };
    matches!(area, Ok(Some(_)))
}

impl FlagStore for BrowserFlagStore {
    fn is_set(&self, scope: HintScope, key: &str) -> CoreResult<bool> {
        if !reachable(scope) {
            return Err(blocked(scope, key));
        }
        let read = match scope {
            HintScope::Durable => LocalStorage::get::<bool>(key),
            HintScope::Session => SessionStorage::get::<bool>(key),
        };
        flag_from_read(key, read)
    }

    fn set(&mut self, scope: HintScope, key: &str) -> CoreResult<()> {
        if !reachable(scope) {
            return Err(blocked(scope, key));
        }
        let written = match scope {
            HintScope::Durable => LocalStorage::set(key, true),
            HintScope::Session => SessionStorage::set(key, true),
        };
        written.map_err(|e| unavailable(key, e))
    }
}

fn flag_from_read(key: &str, read: Result<bool, StorageError>) -> CoreResult<bool> {
    match read {
        Ok(flag) => Ok(flag),
        Err(StorageError::KeyNotFound(_)) => Ok(false),
        // a legacy non-JSON value still means the hint was seen
        Err(StorageError::SerdeError(_)) => Ok(true),
        Err(e) => Err(unavailable(key, e)),
    }
}

fn blocked(scope: HintScope, key: &str) -> PortfolioError {
    let area = match scope {
        HintScope::Durable => "localStorage",
        HintScope::Session => "sessionStorage",
    };
    PortfolioError::StorageUnavailable(format!("{}: {} is blocked", key, area))
}

fn unavailable(key: &str, err: StorageError) -> PortfolioError {
    PortfolioError::StorageUnavailable(format!("{}: {}", key, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_unset() {
        let read = Err(StorageError::KeyNotFound("konami-hint-shown".to_string()));
        assert!(!flag_from_read("konami-hint-shown", read).unwrap());
    }

    #[test]
    fn test_legacy_value_reads_set() {
        let legacy = serde_json::from_str::<bool>("shown").unwrap_err();
        let read = Err(StorageError::SerdeError(legacy));
        assert!(flag_from_read("konami-hint-shown", read).unwrap());
    }

    #[test]
    fn test_blocked_storage_is_unavailable() {
        let err = blocked(HintScope::Session, "console-welcome-shown");
        assert!(matches!(err, PortfolioError::StorageUnavailable(_)));
        assert!(err.to_string().contains("sessionStorage"));
    }
}
