//! Motor de MetaLimpia: genera copias de imágenes y PDFs sin metadata
//! identificativa y fuerza las fechas del archivo resultante a un valor fijo.
//!
//! El motor no tiene interfaz propia: recibe rutas, devuelve un
//! [`FileReport`] por archivo y deja que cualquier shell (consola, gráfica)
//! decida cómo mostrarlo.

pub mod classify;
pub mod error;
pub mod outcome;
pub mod output_path;
pub mod pipeline;
pub mod scrubber;
pub mod timestamps;

pub use classify::FileClassification;
pub use error::{ScrubError, TimeError};
pub use outcome::{BatchSummary, FileReport, ScrubOutcome};
pub use output_path::derive_output_path;
pub use pipeline::{process_batch, process_file};
pub use scrubber::{scrub_image, scrub_pdf};
pub use timestamps::{TargetTimestamp, rewrite_timestamps};
