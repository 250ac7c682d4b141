use thiserror::Error;

/// Errores internos del almacenamiento local; nunca llegan al operador
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("error leyendo la clave {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("error escribiendo la clave {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("error de serialización en la clave {key}: {reason}")]
    Serialization { key: String, reason: String },
}
