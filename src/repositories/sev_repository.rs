use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{NewSev, Sev, SevStatus};
use crate::storage::LocalStorage;
use crate::utils::errors::{AppError, AppResult};

/// Registro de SEVs
///
/// No aplica la regla de una SEV en vigor por vehículo: esa comprobación
/// vive en `SevController`, que conoce también el registro de vehículos.
pub struct SevRepository {
    storage: LocalStorage,
    key: String,
    sevs: Vec<Sev>,
}

impl SevRepository {
    /// Cargar el registro desde el almacenamiento local
    pub fn load(storage: LocalStorage, key: impl Into<String>) -> Self {
        let key = key.into();
        let sevs: Vec<Sev> = storage.load(&key, Vec::new());
        info!("📋 {} SEVs cargadas desde '{}'", sevs.len(), key);

        Self { storage, key, sevs }
    }

    /// SEVs en orden de inserción
    pub fn all(&self) -> &[Sev] {
        &self.sevs
    }

    /// SEVs ordenadas por fecha de operación, la más reciente primero;
    /// las que no tienen fecha van al final
    pub fn list(&self) -> Vec<Sev> {
        let mut sorted = self.sevs.clone();
        sorted.sort_by(|a, b| b.operation_date.cmp(&a.operation_date));
        sorted
    }

    pub fn find(&self, id: Uuid) -> Option<&Sev> {
        self.sevs.iter().find(|s| s.id == id)
    }

    /// Registrar una SEV nueva en estado `Active`
    pub fn create(&mut self, fields: NewSev) -> AppResult<Sev> {
        let missing = fields.missing_fields();
        let (Some(vehicle_id), Some(expiry_date), true) =
            (fields.vehicle_id, fields.expiry_date, missing.is_empty())
        else {
            return Err(AppError::MissingRequiredField(missing));
        };

        let sev = Sev {
            id: Uuid::new_v4(),
            operation_date: Some(fields.operation_date),
            ship_name: fields.ship_name,
            work_plan_number: fields.work_plan_number,
            vehicle_id,
            use_trailer: fields.use_trailer,
            requester: fields.requester,
            sev_number: fields.sev_number,
            expiry_date,
            operator: fields.operator,
            status: SevStatus::Active,
        };

        self.sevs.push(sev.clone());
        self.persist();

        info!("✅ SEV {} criada para el vehículo {}", sev.sev_number, sev.vehicle_id);
        Ok(sev)
    }

    /// Marcar una SEV como concluida; sin efecto si el id no existe
    pub fn complete(&mut self, id: Uuid) -> Option<Sev> {
        let Some(sev) = self.sevs.iter_mut().find(|s| s.id == id) else {
            debug!("❓ SEV {} inexistente, nada que concluir", id);
            return None;
        };

        if sev.status == SevStatus::Completed {
            return Some(sev.clone());
        }

        sev.status = SevStatus::Completed;
        let completed = sev.clone();
        self.persist();

        info!("🏁 SEV {} concluida", completed.sev_number);
        Some(completed)
    }

    fn persist(&self) {
        self.storage.save(&self.key, &self.sevs);
    }
}
