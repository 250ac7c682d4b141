//! Sistema de manejo de errores
//!
//! Este módulo define los errores de validación y de guarda del sistema
//! y su conversión a respuestas HTTP. Ningún error es fatal: todos dejan
//! el estado previo intacto y llevan un mensaje legible para el operador.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::utils::validation::failed_fields;

/// Errores principales de la aplicación
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("A placa {0} já existe.")]
    DuplicatePlate(String),

    #[error("Não é possível excluir o veículo {0}: possui SEV ativa.")]
    VehicleInUse(String),

    #[error("Preencha todos os campos obrigatórios: {}.", .0.join(", "))]
    MissingRequiredField(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::MissingRequiredField(failed_fields(&errors))
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            AppError::DuplicatePlate(_) => (StatusCode::CONFLICT, "Conflict", "DUPLICATE_PLATE"),
            AppError::VehicleInUse(_) => (StatusCode::CONFLICT, "Conflict", "VEHICLE_IN_USE"),
            AppError::MissingRequiredField(_) => {
                (StatusCode::BAD_REQUEST, "Validation Error", "MISSING_REQUIRED_FIELD")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found", "NOT_FOUND"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad Request", "BAD_REQUEST"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, code) = self.status_and_code();

        warn!("⚠️ Solicitud rechazada ({}): {}", code, self);

        let details = match &self {
            AppError::MissingRequiredField(fields) => Some(serde_json::json!({ "fields": fields })),
            _ => None,
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
            details,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_rejections_map_to_conflict() {
        let response = AppError::VehicleInUse("ABC-1234".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::DuplicatePlate("ABC-1234".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_fields_are_listed_in_the_message() {
        let err = AppError::MissingRequiredField(vec!["expiryDate".into(), "sevNumber".into()]);
        assert_eq!(
            err.to_string(),
            "Preencha todos os campos obrigatórios: expiryDate, sevNumber."
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
