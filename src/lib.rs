//! Controle de veículos e SEV
//!
//! Registro de vehículos y de permisos de acceso al pátio (SEV) con estado
//! derivado de la hora actual, persistido en un almacenamiento clave-valor
//! local y expuesto como API JSON.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
