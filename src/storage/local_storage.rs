use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, warn};

use super::{KeyValueStore, StorageError};

/// Adaptador tipado sobre un `KeyValueStore`
///
/// Es la única vía de durabilidad del sistema. Las lecturas fallidas degradan
/// al valor por defecto y las escrituras fallidas solo se registran en el log.
#[derive(Clone)]
pub struct LocalStorage {
    store: Arc<dyn KeyValueStore>,
}

impl LocalStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Cargar el valor de `key`, o `default` si no existe o está corrupto
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("📭 Clave {} vacía, usando valor por defecto", key);
                default
            }
            Err(e) => {
                warn!("⚠️ {}; usando valor por defecto", e);
                default
            }
        }
    }

    /// Guardar `value` bajo `key`; los errores no se propagan
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            error!("❌ {}", e);
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Serialization {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(value).map_err(|e| StorageError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(key, &serialized)
    }
}
