//! Configuración de variables de entorno
//!
//! Este módulo lee la configuración del entorno (y del `.env` cargado con
//! dotenvy). Todas las variables tienen un valor por defecto razonable para
//! un puesto de operador local.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::storage::StorageConfig;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    pub storage: StorageConfig,
    /// Rechazar una SEV nueva para un vehículo que ya tiene una en vigor
    pub enforce_single_active_sev: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "127.0.0.1".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
            storage: StorageConfig::default(),
            enforce_single_active_sev: true,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid number, got '{}'", raw))?,
            Err(_) => defaults.port,
        };

        let log_level = match env::var("RUST_LOG_LEVEL") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("RUST_LOG_LEVEL must be a tracing level, got '{}'", raw))?,
            Err(_) => defaults.log_level,
        };

        let enforce_single_active_sev = match env::var("SEV_ENFORCE_SINGLE_ACTIVE") {
            Ok(raw) => parse_bool(&raw).with_context(|| {
                format!("SEV_ENFORCE_SINGLE_ACTIVE must be true or false, got '{}'", raw)
            })?,
            Err(_) => defaults.enforce_single_active_sev,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let storage = StorageConfig {
            data_dir: env::var("SEV_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage.data_dir),
            vehicles_key: env::var("SEV_VEHICLES_KEY").unwrap_or(defaults.storage.vehicles_key),
            permits_key: env::var("SEV_PERMITS_KEY").unwrap_or(defaults.storage.permits_key),
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins,
            log_level,
            storage,
            enforce_single_active_sev,
        })
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
