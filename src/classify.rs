//! Clasificación de entradas según su tipo en el sistema de archivos y su
//! extensión en minúsculas.

use std::path::Path;

/// Extensiones de imagen reconocidas (comparadas en minúsculas).
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "tiff", "webp", "gif"];

/// Extensión reconocida como documento PDF.
pub const PDF_EXTENSION: &str = "pdf";

/// Qué limpiador corresponde a una ruta, o por qué no corresponde ninguno.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileClassification {
    Image,
    PdfDocument,
    /// Extensión fuera del conjunto reconocido; conserva la extensión
    /// en minúsculas con su punto para el mensaje de omisión.
    Unsupported(String),
    NotAFile,
    IsDirectory,
}

/// Clasifica una ruta consultando el tipo de entrada y luego su extensión.
pub fn classify(path: &Path) -> FileClassification {
    if path.is_dir() {
        return FileClassification::IsDirectory;
    }
    if !path.is_file() {
        return FileClassification::NotAFile;
    }
    classify_extension(path)
}

/// Parte pura de la clasificación: decide solo a partir de la extensión.
pub fn classify_extension(path: &Path) -> FileClassification {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        FileClassification::Image
    } else if extension == PDF_EXTENSION {
        FileClassification::PdfDocument
    } else if extension.is_empty() {
        FileClassification::Unsupported(String::new())
    } else {
        FileClassification::Unsupported(format!(".{extension}"))
    }
}
