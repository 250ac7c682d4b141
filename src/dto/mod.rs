//! DTOs de la API
//!
//! Requests y responses JSON que consume la capa de presentación.

pub mod api_response;
pub mod sev_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
pub use sev_dto::{CreateSevRequest, SevResponse};
pub use vehicle_dto::{CreateVehicleRequest, VehicleResponse};
