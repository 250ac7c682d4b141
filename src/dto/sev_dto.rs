use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{NewSev, Sev};
use crate::services::EffectiveStatus;
use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::validation::{parse_date, parse_local_datetime};

// Request para crear una SEV, tal como llega del formulario.
// Un obligatorio ausente o `null` se reporta como campo faltante.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSevRequest {
    pub operation_date: Option<String>,
    pub ship_name: Option<String>,
    pub work_plan_number: Option<String>,
    pub vehicle_id: Option<String>,
    pub use_trailer: Option<bool>,
    pub requester: Option<String>,
    pub sev_number: Option<String>,
    pub expiry_date: Option<String>,
    pub operator: Option<String>,
}

impl CreateSevRequest {
    /// Convertir a `NewSev`; los obligatorios vacíos quedan como ausentes
    /// para que el registro los rechace.
    pub fn into_new_sev(self, today: NaiveDate) -> AppResult<NewSev> {
        let vehicle_id = match self.vehicle_id.as_deref().unwrap_or_default().trim() {
            "" => None,
            raw => Some(
                Uuid::parse_str(raw)
                    .map_err(|_| bad_request_error(&format!("vehicleId inválido: '{}'", raw)))?,
            ),
        };

        let expiry_date: Option<NaiveDateTime> = match self.expiry_date.as_deref().unwrap_or_default().trim() {
            "" => None,
            raw => Some(
                parse_local_datetime(raw)
                    .map_err(|_| bad_request_error(&format!("expiryDate inválida: '{}'", raw)))?,
            ),
        };

        let operation_date = match self.operation_date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => parse_date(raw)
                .map_err(|_| bad_request_error(&format!("operationDate inválida: '{}'", raw)))?,
        };

        Ok(NewSev {
            vehicle_id,
            sev_number: self.sev_number.as_deref().unwrap_or_default().trim().to_string(),
            operation_date,
            expiry_date,
            ship_name: self.ship_name.unwrap_or_default(),
            work_plan_number: self.work_plan_number.unwrap_or_default(),
            requester: self.requester.unwrap_or_default(),
            operator: self.operator.unwrap_or_default(),
            use_trailer: self.use_trailer.unwrap_or_default(),
        })
    }
}

// Response de SEV con su estado derivado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SevResponse {
    #[serde(flatten)]
    pub sev: Sev,
    pub effective_status: EffectiveStatus,
    pub status_label: &'static str,
    pub can_complete: bool,
    pub vehicle_plate: Option<String>,
}

impl SevResponse {
    pub fn new(sev: Sev, effective_status: EffectiveStatus, vehicle_plate: Option<String>) -> Self {
        Self {
            sev,
            effective_status,
            status_label: effective_status.label(),
            can_complete: effective_status.can_complete(),
            vehicle_plate,
        }
    }
}
