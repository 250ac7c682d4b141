//! Services module
//!
//! Lógica de negocio pura: derivación de estado de las SEVs y la fuente de
//! tiempo que la alimenta.

pub mod clock;
pub mod status_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use status_service::{effective_status, encumbered_vehicle_ids, is_in_force, EffectiveStatus};
