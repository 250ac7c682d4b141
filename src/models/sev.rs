//! Modelo de SEV (Solicitação de Entrada de Veículo)
//!
//! Permiso de acceso al pátio vinculado a un vehículo y válido hasta
//! `expiry_date`. Solo se persisten los estados `Active` y `Completed`;
//! la expiración se deriva siempre en lectura.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado persistido de una SEV
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SevStatus {
    // "EXPIRADA" era un estado persistido en versiones antiguas del store
    #[serde(rename = "ATIVA", alias = "EXPIRADA")]
    Active,
    #[serde(rename = "CONCLUÍDA")]
    Completed,
}

/// SEV persistida
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sev {
    pub id: Uuid,
    /// Vacía o ilegible en registros antiguos del formulario
    #[serde(default, with = "optional_date")]
    pub operation_date: Option<NaiveDate>,
    #[serde(default)]
    pub ship_name: String,
    #[serde(default)]
    pub work_plan_number: String,
    pub vehicle_id: Uuid,
    #[serde(default)]
    pub use_trailer: bool,
    #[serde(default)]
    pub requester: String,
    pub sev_number: String,
    #[serde(with = "local_datetime")]
    pub expiry_date: NaiveDateTime,
    #[serde(default)]
    pub operator: String,
    pub status: SevStatus,
}

/// Campos de una SEV antes de ser registrada
///
/// `vehicle_id` y `expiry_date` son opcionales aquí para que el registro
/// pueda rechazar su ausencia con un error de campo obligatorio.
#[derive(Debug, Clone, Default)]
pub struct NewSev {
    pub vehicle_id: Option<Uuid>,
    pub sev_number: String,
    pub operation_date: NaiveDate,
    pub expiry_date: Option<NaiveDateTime>,
    pub ship_name: String,
    pub work_plan_number: String,
    pub requester: String,
    pub operator: String,
    pub use_trailer: bool,
}

impl NewSev {
    /// Campos obligatorios ausentes, con su nombre en la API
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.vehicle_id.is_none() {
            missing.push("vehicleId".to_string());
        }
        if self.expiry_date.is_none() {
            missing.push("expiryDate".to_string());
        }
        if self.sev_number.trim().is_empty() {
            missing.push("sevNumber".to_string());
        }
        missing
    }
}

mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::utils::validation::parse_date;

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| parse_date(&raw).ok()))
    }
}

mod local_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::utils::validation::parse_local_datetime;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_local_datetime(&raw)
            .map_err(|_| de::Error::custom(format!("invalid expiry date '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSER_RECORD: &str = r#"{
        "id": "0f8e7a52-6c1b-4d2e-9a3f-1b2c3d4e5f60",
        "operationDate": "2025-03-10",
        "shipName": "MSC AURORA",
        "workPlanNumber": "PT-778",
        "vehicleId": "5b0c4c6e-2f1d-4a8e-9d51-6f2b8e0d7a11",
        "useTrailer": true,
        "requester": "Operações",
        "sevNumber": "SEV-001",
        "expiryDate": "2025-03-11T18:00",
        "operator": "Turno B",
        "status": "ATIVA"
    }"#;

    #[test]
    fn reads_datetime_local_expiry_without_seconds() {
        let sev: Sev = serde_json::from_str(BROWSER_RECORD).unwrap();

        assert_eq!(sev.status, SevStatus::Active);
        assert_eq!(
            sev.expiry_date,
            NaiveDate::from_ymd_opt(2025, 3, 11).unwrap().and_hms_opt(18, 0, 0).unwrap()
        );
        assert!(sev.use_trailer);
    }

    #[test]
    fn writes_expiry_with_seconds_and_stored_status_labels() {
        let mut sev: Sev = serde_json::from_str(BROWSER_RECORD).unwrap();
        sev.status = SevStatus::Completed;
        let json = serde_json::to_value(&sev).unwrap();

        assert_eq!(json["expiryDate"], "2025-03-11T18:00:00");
        assert_eq!(json["status"], "CONCLUÍDA");
        assert_eq!(json["sevNumber"], "SEV-001");
    }

    #[test]
    fn legacy_expired_status_is_read_as_active() {
        let raw = BROWSER_RECORD.replace("\"ATIVA\"", "\"EXPIRADA\"");
        let sev: Sev = serde_json::from_str(&raw).unwrap();

        assert_eq!(sev.status, SevStatus::Active);
    }

    #[test]
    fn blank_operation_date_does_not_reject_the_record() {
        let raw = BROWSER_RECORD.replace("\"2025-03-10\"", "\"\"");
        let sev: Sev = serde_json::from_str(&raw).unwrap();
        assert_eq!(sev.operation_date, None);
        assert_eq!(serde_json::to_value(&sev).unwrap()["operationDate"], "");

        let raw = BROWSER_RECORD.replace("\"2025-03-10\"", "\"10/03/2025\"");
        let sev: Sev = serde_json::from_str(&raw).unwrap();
        assert_eq!(sev.operation_date, None);

        let sev: Sev = serde_json::from_str(BROWSER_RECORD).unwrap();
        assert_eq!(sev.operation_date, NaiveDate::from_ymd_opt(2025, 3, 10));
    }
}
