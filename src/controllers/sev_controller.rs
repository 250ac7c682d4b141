use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::dto::{ApiResponse, CreateSevRequest, SevResponse};
use crate::models::Sev;
use crate::repositories::{SevRepository, VehicleRepository};
use crate::services::{effective_status, encumbered_vehicle_ids, Clock};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub struct SevController {
    vehicles: Arc<RwLock<VehicleRepository>>,
    sevs: Arc<RwLock<SevRepository>>,
    clock: Arc<dyn Clock>,
    enforce_single_active: bool,
}

impl SevController {
    pub fn new(state: &AppState) -> Self {
        Self {
            vehicles: state.vehicles.clone(),
            sevs: state.sevs.clone(),
            clock: state.clock.clone(),
            enforce_single_active: state.config.enforce_single_active_sev,
        }
    }

    pub async fn create(
        &self,
        request: CreateSevRequest,
    ) -> Result<ApiResponse<SevResponse>, AppError> {
        let fields = request.into_new_sev(self.clock.today())?;
        let missing = fields.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingRequiredField(missing));
        }

        let vehicles = self.vehicles.read().await;
        let mut sevs = self.sevs.write().await;
        let now = self.clock.now();

        let mut plate = None;
        if let Some(vehicle_id) = fields.vehicle_id {
            let vehicle = vehicles
                .find(vehicle_id)
                .ok_or_else(|| not_found_error("Vehicle", &vehicle_id.to_string()))?;

            if self.enforce_single_active
                && encumbered_vehicle_ids(sevs.all(), now).contains(&vehicle_id)
            {
                debug!("🚫 Vehículo {} ya tiene una SEV en vigor", vehicle.plate);
                return Err(AppError::VehicleInUse(vehicle.plate.clone()));
            }
            plate = Some(vehicle.plate.clone());
        }

        let sev = sevs.create(fields)?;
        let message = format!("SEV {} criada com sucesso!", sev.sev_number);
        let status = effective_status(&sev, now);

        Ok(ApiResponse::success_with_message(
            SevResponse::new(sev, status, plate),
            message,
        ))
    }

    /// SEVs ordenadas por fecha de operación, con su estado derivado
    pub async fn list(&self) -> Vec<SevResponse> {
        let vehicles = self.vehicles.read().await;
        let sevs = self.sevs.read().await;
        let now = self.clock.now();

        sevs.list()
            .into_iter()
            .map(|sev| Self::to_response(sev, &vehicles, now))
            .collect()
    }

    pub async fn complete(&self, id: Uuid) -> ApiResponse<SevResponse> {
        let vehicles = self.vehicles.read().await;
        let mut sevs = self.sevs.write().await;

        match sevs.complete(id) {
            Some(sev) => ApiResponse::success_with_message(
                Self::to_response(sev, &vehicles, self.clock.now()),
                "SEV marcada como concluída.".to_string(),
            ),
            None => ApiResponse::message_only("SEV não encontrada; nada foi alterado.".to_string()),
        }
    }

    fn to_response(sev: Sev, vehicles: &VehicleRepository, now: chrono::NaiveDateTime) -> SevResponse {
        let status = effective_status(&sev, now);
        let plate = vehicles.find(sev.vehicle_id).map(|v| v.plate.clone());
        SevResponse::new(sev, status, plate)
    }
}
