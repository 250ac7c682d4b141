//! Modelos del sistema
//!
//! Este módulo contiene los registros que se persisten en el almacenamiento
//! local: vehículos y SEVs.

pub mod sev;
pub mod vehicle;

pub use sev::{NewSev, Sev, SevStatus};
pub use vehicle::Vehicle;
