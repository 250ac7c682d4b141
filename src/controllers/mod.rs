//! Controladores
//!
//! Componen los dos registros y el reloj. Aquí viven las reglas que cruzan
//! registros: la guarda de borrado y la disponibilidad del vehículo al
//! crear una SEV.

pub mod sev_controller;
pub mod vehicle_controller;

pub use sev_controller::SevController;
pub use vehicle_controller::VehicleController;
