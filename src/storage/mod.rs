//! Almacenamiento
//!
//! Este módulo contiene el almacenamiento clave-valor local y el adaptador
//! tipado que serializa las colecciones en JSON.

pub mod error;
pub mod kv_store;
pub mod local_storage;
pub mod storage_config;

pub use error::StorageError;
pub use kv_store::{FileStore, KeyValueStore, MemoryStore};
pub use local_storage::LocalStorage;
pub use storage_config::StorageConfig;
