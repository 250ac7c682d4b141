//! Configuración del almacenamiento local

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Claves usadas por el navegador en la versión web original
pub const DEFAULT_VEHICLES_KEY: &str = "sev-vehicles";
pub const DEFAULT_PERMITS_KEY: &str = "sev-requests";

/// Configuración del almacenamiento
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub vehicles_key: String,
    pub permits_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            vehicles_key: DEFAULT_VEHICLES_KEY.to_string(),
            permits_key: DEFAULT_PERMITS_KEY.to_string(),
        }
    }
}
