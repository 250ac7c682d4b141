//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la configuración del
//! almacenamiento local.

pub mod environment;

pub use environment::*;
