//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum. Los dos
//! registros tienen dueños independientes; no hay acceso global a ellos.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{SevRepository, VehicleRepository};
use crate::services::Clock;
use crate::storage::{KeyValueStore, LocalStorage};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    // orden de bloqueo: siempre `vehicles` antes que `sevs`
    pub vehicles: Arc<RwLock<VehicleRepository>>,
    pub sevs: Arc<RwLock<SevRepository>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Cargar ambos registros desde `store`
    pub fn new(config: EnvironmentConfig, store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let storage = LocalStorage::new(store);
        let vehicles = VehicleRepository::load(storage.clone(), config.storage.vehicles_key.clone());
        let sevs = SevRepository::load(storage, config.storage.permits_key.clone());

        Self {
            config,
            vehicles: Arc::new(RwLock::new(vehicles)),
            sevs: Arc::new(RwLock::new(sevs)),
            clock,
        }
    }
}
