use std::collections::HashSet;

use tracing::{debug, info};
use uuid::Uuid;

use crate::models::Vehicle;
use crate::storage::LocalStorage;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::{normalize_optional_plate, normalize_plate};

/// Registro de vehículos, en orden de inserción
pub struct VehicleRepository {
    storage: LocalStorage,
    key: String,
    vehicles: Vec<Vehicle>,
}

impl VehicleRepository {
    /// Cargar el registro desde el almacenamiento local
    pub fn load(storage: LocalStorage, key: impl Into<String>) -> Self {
        let key = key.into();
        let vehicles: Vec<Vehicle> = storage.load(&key, Vec::new());
        info!("🚛 {} vehículos cargados desde '{}'", vehicles.len(), key);

        Self {
            storage,
            key,
            vehicles,
        }
    }

    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn find(&self, id: Uuid) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn plate_exists(&self, plate: &str) -> bool {
        self.vehicles.iter().any(|v| v.plate == plate)
    }

    /// Vehículos que no están ocupados por una SEV en vigor
    pub fn available(&self, encumbered: &HashSet<Uuid>) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| !encumbered.contains(&v.id))
            .collect()
    }

    /// Registrar un vehículo; las placas se normalizan aquí
    pub fn add(&mut self, plate: &str, trailer_plate: Option<&str>) -> AppResult<Vehicle> {
        let plate = normalize_plate(plate);
        if plate.is_empty() {
            return Err(AppError::MissingRequiredField(vec!["plate".to_string()]));
        }

        if self.plate_exists(&plate) {
            debug!("🔁 Placa duplicada: {}", plate);
            return Err(AppError::DuplicatePlate(plate));
        }

        let vehicle = Vehicle::new(plate, normalize_optional_plate(trailer_plate));
        self.vehicles.push(vehicle.clone());
        self.persist();

        info!("✅ Vehículo {} registrado ({})", vehicle.plate, vehicle.id);
        Ok(vehicle)
    }

    /// Eliminar un vehículo que no esté en `encumbered`
    pub fn delete(&mut self, id: Uuid, encumbered: &HashSet<Uuid>) -> AppResult<Vehicle> {
        let position = self
            .vehicles
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        if encumbered.contains(&id) {
            return Err(AppError::VehicleInUse(self.vehicles[position].plate.clone()));
        }

        let removed = self.vehicles.remove(position);
        self.persist();

        info!("🗑️ Vehículo {} eliminado", removed.plate);
        Ok(removed)
    }

    fn persist(&self) {
        self.storage.save(&self.key, &self.vehicles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn repository() -> (VehicleRepository, LocalStorage) {
        let storage = LocalStorage::new(Arc::new(MemoryStore::new()));
        (VehicleRepository::load(storage.clone(), "sev-vehicles"), storage)
    }

    #[test]
    fn plates_stay_unique_after_normalization() {
        let (mut repo, _) = repository();

        repo.add("abc-1234", None).unwrap();
        let err = repo.add("  ABC-1234 ", Some("rbq-1")).unwrap_err();

        assert_eq!(err, AppError::DuplicatePlate("ABC-1234".to_string()));
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn blank_plate_is_a_missing_field() {
        let (mut repo, _) = repository();

        let err = repo.add("   ", None).unwrap_err();
        assert_eq!(err, AppError::MissingRequiredField(vec!["plate".to_string()]));
        assert!(repo.list().is_empty());
    }

    #[test]
    fn insertion_order_is_preserved_and_persisted() {
        let (mut repo, storage) = repository();

        repo.add("ZZZ-0001", None).unwrap();
        repo.add("AAA-0002", Some("  ")).unwrap();

        let plates: Vec<&str> = repo.list().iter().map(|v| v.plate.as_str()).collect();
        assert_eq!(plates, vec!["ZZZ-0001", "AAA-0002"]);
        assert_eq!(repo.list()[1].trailer_plate, None);

        let reloaded = VehicleRepository::load(storage, "sev-vehicles");
        assert_eq!(reloaded.list(), repo.list());
    }

    #[test]
    fn encumbered_vehicles_cannot_be_deleted() {
        let (mut repo, _) = repository();
        let vehicle = repo.add("ABC-1234", None).unwrap();

        let err = repo.delete(vehicle.id, &HashSet::from([vehicle.id])).unwrap_err();
        assert_eq!(err, AppError::VehicleInUse("ABC-1234".to_string()));
        assert_eq!(repo.list().len(), 1);

        repo.delete(vehicle.id, &HashSet::new()).unwrap();
        assert!(repo.list().is_empty());
    }

    #[test]
    fn deleting_an_unknown_vehicle_is_not_found() {
        let (mut repo, _) = repository();
        assert!(matches!(
            repo.delete(Uuid::new_v4(), &HashSet::new()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn available_skips_encumbered_vehicles() {
        let (mut repo, _) = repository();
        let busy = repo.add("BUSY-001", None).unwrap();
        let free = repo.add("FREE-001", None).unwrap();

        let available = repo.available(&HashSet::from([busy.id]));
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, free.id);
    }
}
