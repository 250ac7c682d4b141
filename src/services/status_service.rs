//! Derivación de estado de las SEVs
//!
//! El estado "expirada" nunca se persiste: se recalcula en cada lectura a
//! partir del estado guardado y de la hora actual recibida por parámetro.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Sev, SevStatus};

/// Días antes de la validade en que una SEV pasa a "expirando"
pub const EXPIRING_SOON_DAYS: i64 = 2;

/// Estado mostrado de una SEV
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EffectiveStatus {
    Active,
    ExpiringSoon,
    Expired,
    Completed,
}

impl EffectiveStatus {
    /// Etiqueta mostrada al operador
    pub fn label(&self) -> &'static str {
        match self {
            EffectiveStatus::Active => "ATIVA",
            EffectiveStatus::ExpiringSoon => "EXPIRANDO",
            EffectiveStatus::Expired => "EXPIRADA",
            EffectiveStatus::Completed => "CONCLUÍDA",
        }
    }

    /// Solo una SEV aún vigente puede concluirse manualmente
    pub fn can_complete(&self) -> bool {
        matches!(self, EffectiveStatus::Active | EffectiveStatus::ExpiringSoon)
    }
}

/// Estado efectivo de `sev` en el instante `now`
pub fn effective_status(sev: &Sev, now: NaiveDateTime) -> EffectiveStatus {
    if sev.status == SevStatus::Completed {
        return EffectiveStatus::Completed;
    }
    if now >= sev.expiry_date {
        return EffectiveStatus::Expired;
    }
    if sev.expiry_date <= now + Duration::days(EXPIRING_SOON_DAYS) {
        return EffectiveStatus::ExpiringSoon;
    }
    EffectiveStatus::Active
}

/// Una SEV está en vigor si sigue activa y su validade es futura
pub fn is_in_force(sev: &Sev, now: NaiveDateTime) -> bool {
    sev.status == SevStatus::Active && sev.expiry_date > now
}

/// Vehículos ocupados por alguna SEV en vigor
pub fn encumbered_vehicle_ids<'a, I>(sevs: I, now: NaiveDateTime) -> HashSet<Uuid>
where
    I: IntoIterator<Item = &'a Sev>,
{
    sevs.into_iter()
        .filter(|sev| is_in_force(sev, now))
        .map(|sev| sev.vehicle_id)
        .collect()
}
