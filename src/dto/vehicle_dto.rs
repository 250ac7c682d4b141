use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Vehicle;
use crate::utils::validation::validate_not_empty;

// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[serde(default)]
    #[validate(required, custom = "validate_not_empty")]
    pub plate: Option<String>,
    pub trailer_plate: Option<String>,
}

// Response de vehículo, con su disponibilidad actual
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub plate: String,
    pub trailer_plate: Option<String>,
    pub in_use: bool,
}

impl VehicleResponse {
    pub fn new(vehicle: &Vehicle, in_use: bool) -> Self {
        Self {
            id: vehicle.id,
            plate: vehicle.plate.clone(),
            trailer_plate: vehicle.trailer_plate.clone(),
            in_use,
        }
    }
}
