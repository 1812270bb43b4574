//! Errores del motor de limpieza.

use std::path::PathBuf;
use thiserror::Error;

/// Fallo de un limpiador al producir la copia sin metadata.
///
/// El original queda intacto en todos los casos; la ruta de salida no
/// conserva archivos parciales.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Decodificación, re-codificación o escritura de una imagen.
    #[error("imagen: {0}")]
    ImageFailure(String),

    /// Lectura, limpieza o guardado de un documento PDF.
    #[error("PDF: {0}")]
    PdfFailure(String),
}

/// Fallo al reescribir las fechas de la copia limpia.
///
/// Nunca escala a fallo del archivo: la copia ya existe y es usable aunque
/// conserve sus fechas reales.
#[derive(Debug, Error)]
#[error("no se pudieron reescribir las fechas de `{}`: {detail}", .path.display())]
pub struct TimeError {
    pub path: PathBuf,
    pub detail: String,
}
