//! Persistent holder for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token extractor, route guard, and header all depend on this trait
//! rather than on `localStorage` directly, so their flows can be driven with
//! an in-memory store in tests. Expiry is not tracked here; staleness is
//! discovered by the route guard's identity check.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

/// Zero or one session token, shared by every component of the client.
///
/// All operations are synchronous and each one is a single write, so readers
/// never observe a partially written token.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

/// Origin-scoped `localStorage` store. Survives reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "csr")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?
                .get_item(&self.key)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = Self::storage() else {
                log::warn!("session store: localStorage unavailable, token not persisted");
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("session store: failed to persist token");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::storage() {
                if storage.remove_item(&self.key).is_err() {
                    log::warn!("session store: failed to remove token");
                }
            }
        }
    }
}
