//! Utilidades de validación
//!
//! Funciones helper para normalizar placas y convertir las fechas que llegan
//! desde los formularios (`date` y `datetime-local`).

use chrono::{NaiveDate, NaiveDateTime};
use validator::{ValidationError, ValidationErrors};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Normalizar una placa: sin espacios en los extremos y en mayúsculas
pub fn normalize_plate(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Normalizar una placa opcional; una placa vacía equivale a no tenerla
pub fn normalize_optional_plate(value: Option<&str>) -> Option<String> {
    value.map(normalize_plate).filter(|plate| !plate.is_empty())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir string a fecha
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar y convertir string a fecha y hora local (con o sin segundos)
pub fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"YYYY-MM-DDTHH:MM[:SS]".to_string());
            error
        })
}

/// Nombres de los campos con error, ordenados
pub fn failed_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plates_are_trimmed_and_uppercased() {
        assert_eq!(normalize_plate("  abc-1234 "), "ABC-1234");
        assert_eq!(normalize_optional_plate(Some("  ")), None);
        assert_eq!(normalize_optional_plate(Some("rbq1a23")), Some("RBQ1A23".to_string()));
        assert_eq!(normalize_optional_plate(None), None);
    }

    #[test]
    fn blank_values_are_rejected() {
        assert!(validate_not_empty("SEV-001").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn datetime_local_values_parse_with_or_without_seconds() {
        let short = parse_local_datetime("2025-03-10T14:30").unwrap();
        let long = parse_local_datetime("2025-03-10T14:30:00").unwrap();
        assert_eq!(short, long);
        assert!(parse_local_datetime("10/03/2025 14:30").is_err());
    }

    #[test]
    fn dates_use_iso_format() {
        assert_eq!(
            parse_date("2025-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
        assert!(parse_date("2025-13-01").is_err());
    }
}
