use std::{cell::RefCell, collections::HashMap};

use keyring::Entry;

use crate::Result;

pub const KEYSTORE_SERVICE: &str = "nuvolaris";
pub const AUTH_KEY: &str = "AUTH";

/// Named secrets persisted under a single service namespace.
pub trait SecretStore {
    fn set(&self, key: &str, value: &str) -> keyring::Result<()>;
    fn get(&self, key: &str) -> keyring::Result<String>;
}

/// The operating system's keychain.
#[derive(Debug, Clone)]
pub struct Keystore {
    service: String,
}

impl Keystore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }
}

impl Default for Keystore {
    fn default() -> Self {
        Self::new(KEYSTORE_SERVICE)
    }
}

impl SecretStore for Keystore {
    fn set(&self, key: &str, value: &str) -> keyring::Result<()> {
        Entry::new(&self.service, key)?.set_password(value)
    }

    fn get(&self, key: &str) -> keyring::Result<String> {
        Entry::new(&self.service, key)?.get_password()
    }
}

/// In-process store, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SecretStore for MemoryStore {
    fn set(&self, key: &str, value: &str) -> keyring::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> keyring::Result<String> {
        self.entries
            .borrow()
            .get(key)
            .cloned()
            .ok_or(keyring::Error::NoEntry)
    }
}

/// Writes every secret into `store`, stopping at the first failure.
///
/// Entries written before a failure are left in place.
pub fn store_credentials(store: &dyn SecretStore, secrets: &HashMap<String, String>) -> Result<()> {
    for (key, value) in secrets {
        store.set(key, value).map_err(|e| {
            tracing::error!(key = key.as_str(), "failed to store credential: {}", e);
            e
        })?;
    }

    tracing::info!(count = secrets.len(), "Stored credentials in the secret store");
    Ok(())
}
