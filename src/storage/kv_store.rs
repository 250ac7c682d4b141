//! Almacenes clave-valor
//!
//! `FileStore` guarda un documento JSON por clave dentro de un directorio de
//! datos; `MemoryStore` mantiene los valores en memoria para tests y para
//! ejecuciones efímeras.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, info};

use super::StorageError;

/// Interfaz de almacenamiento clave-valor con valores de texto
pub trait KeyValueStore: Send + Sync {
    /// Valor bruto de la clave, `None` si no existe
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Reemplaza el valor completo de la clave
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Almacén en disco: `<data_dir>/<clave>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Abrir (y crear si hace falta) el directorio de datos
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| StorageError::Write {
            key: data_dir.display().to_string(),
            reason: e.to_string(),
        })?;
        info!("📂 Almacenamiento local en {}", data_dir.display());
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.data_dir.join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => {
                debug!("📥 Leída clave {} ({} bytes)", key, raw.len());
                Ok(Some(raw))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("❌ Clave {} inexistente", key);
                Ok(None)
            }
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        let write_err = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };

        // el rename deja siempre un documento completo en disco
        fs::write(&tmp_path, value).map_err(write_err)?;
        fs::rename(&tmp_path, &path).map_err(write_err)?;

        debug!("💾 Guardada clave {} ({} bytes)", key, value.len());
        Ok(())
    }
}

/// Almacén en memoria
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
