//! Modelos compartidos para reportar el resultado de cada archivo procesado.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resultado inmutable de procesar un archivo de entrada.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ScrubOutcome {
    /// Se generó la copia limpia en la ruta indicada.
    Cleaned(PathBuf),
    /// El archivo se omitió: carpeta, extensión no soportada o cancelación.
    Skipped(String),
    /// La limpieza falló; el original queda intacto.
    Failed(String),
}

impl ScrubOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        ScrubOutcome::Skipped(reason.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        ScrubOutcome::Failed(reason.into())
    }
}

/// Resultado de un archivo junto con la ruta que lo originó.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub outcome: ScrubOutcome,
    /// Aviso no fatal del reescritor de fechas, si lo hubo.
    pub timestamp_warning: Option<String>,
}

impl FileReport {
    pub fn new(input: impl AsRef<Path>, outcome: ScrubOutcome) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            outcome,
            timestamp_warning: None,
        }
    }
}

/// Conteo agregado que el shell muestra al final de cada lote.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub cleaned: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn tally(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.outcome {
                ScrubOutcome::Cleaned(_) => summary.cleaned += 1,
                ScrubOutcome::Skipped(_) => summary.skipped += 1,
                ScrubOutcome::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.cleaned + self.skipped + self.failed
    }
}
