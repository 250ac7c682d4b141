//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como se persiste en el
//! almacenamiento local (array JSON bajo la clave de vehículos).

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::utils::validation::normalize_optional_plate;

/// Vehículo registrado en la frota del pátio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub plate: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_plate_as_none"
    )]
    pub trailer_plate: Option<String>,
}

// el formulario guardaba `""` para los vehículos sin reboque
fn blank_plate_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_optional_plate(raw.as_deref()))
}

impl Vehicle {
    /// Crear un vehículo nuevo con id generado
    pub fn new(plate: String, trailer_plate: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            plate,
            trailer_plate,
        }
    }
}
