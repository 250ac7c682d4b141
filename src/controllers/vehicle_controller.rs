use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::dto::{ApiResponse, CreateVehicleRequest, VehicleResponse};
use crate::repositories::{SevRepository, VehicleRepository};
use crate::services::{encumbered_vehicle_ids, Clock};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct VehicleController {
    vehicles: Arc<RwLock<VehicleRepository>>,
    sevs: Arc<RwLock<SevRepository>>,
    clock: Arc<dyn Clock>,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            vehicles: state.vehicles.clone(),
            sevs: state.sevs.clone(),
            clock: state.clock.clone(),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let mut vehicles = self.vehicles.write().await;
        let plate = request.plate.as_deref().unwrap_or_default();
        let vehicle = vehicles.add(plate, request.trailer_plate.as_deref())?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::new(&vehicle, false),
            format!("Veículo {} adicionado com sucesso!", vehicle.plate),
        ))
    }

    /// Todos los vehículos, en orden de registro
    pub async fn list(&self) -> Vec<VehicleResponse> {
        let vehicles = self.vehicles.read().await;
        let sevs = self.sevs.read().await;
        let encumbered = encumbered_vehicle_ids(sevs.all(), self.clock.now());

        vehicles
            .list()
            .iter()
            .map(|v| VehicleResponse::new(v, encumbered.contains(&v.id)))
            .collect()
    }

    /// Vehículos seleccionables para una SEV nueva
    pub async fn available(&self) -> Vec<VehicleResponse> {
        let vehicles = self.vehicles.read().await;
        let sevs = self.sevs.read().await;
        let encumbered = encumbered_vehicle_ids(sevs.all(), self.clock.now());

        vehicles
            .available(&encumbered)
            .into_iter()
            .map(|v| VehicleResponse::new(v, false))
            .collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let mut vehicles = self.vehicles.write().await;
        let sevs = self.sevs.read().await;
        let encumbered = encumbered_vehicle_ids(sevs.all(), self.clock.now());

        let removed = vehicles.delete(id, &encumbered)?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::new(&removed, false),
            "Veículo removido.".to_string(),
        ))
    }
}
