//! Persistence of the selected theme name.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A missing or blocked `localStorage` reads as
//! "nothing saved" and writes are dropped with a debug log.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Key-value store the toggle reads its saved theme from.
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Without the `csr` feature this never holds a value.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::debug!("localStorage unavailable: {e:?}");
            None
        }
    }
}

impl ThemeStore for LocalStorage {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::debug!("localStorage read of {key} failed: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                log::debug!("localStorage write of {key} failed: {e:?}");
            }
        }
    }
}

/// In-process store backing the controller tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.save(key, value);
        store
    }
}

#[cfg(test)]
impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl<S: ThemeStore + ?Sized> ThemeStore for &S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) {
        (**self).save(key, value);
    }
}
