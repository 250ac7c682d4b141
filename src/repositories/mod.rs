//! Repositorios
//!
//! Registros en memoria de vehículos y SEVs, respaldados por el
//! almacenamiento local. Cada mutación reescribe la colección completa.

pub mod sev_repository;
pub mod vehicle_repository;

pub use sev_repository::SevRepository;
pub use vehicle_repository::VehicleRepository;
