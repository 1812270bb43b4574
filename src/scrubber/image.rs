//! Limpieza de imágenes: re-codifica solo los píxeles hacia un archivo nuevo.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::ImageReader;

use crate::error::ScrubError;

/// Genera en `output` una copia de la imagen sin bloques auxiliares de
/// metadata, conservando modo de color y dimensiones.
///
/// El mecanismo de eliminación es el viaje "decodificar píxeles → buffer
/// nuevo → re-codificar": ningún campo EXIF, perfil ni comentario se enumera
/// o borra, simplemente nunca llega al destino porque solo viajan píxeles.
/// El codec de salida lo decide la extensión de `output`. Se escribe primero
/// a una ruta temporal del mismo directorio y se renombra al final, de modo
/// que un fallo no deja salidas parciales.
pub fn scrub_image(input: &Path, output: &Path) -> Result<(), ScrubError> {
    let img = ImageReader::open(input)
        .map_err(|e| ScrubError::ImageFailure(format!("no se pudo abrir la imagen: {e}")))?
        .decode()
        .map_err(|e| ScrubError::ImageFailure(format!("no se pudo decodificar la imagen: {e}")))?;

    let temp_path = temp_output_path(output);

    if let Err(error) = img.save(&temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(ScrubError::ImageFailure(format!(
            "no se pudo guardar la imagen limpia: {error}"
        )));
    }

    match verify_exif_clean(&temp_path) {
        Ok(true) => {}
        Ok(false) => {
            let _ = fs::remove_file(&temp_path);
            return Err(ScrubError::ImageFailure(
                "la copia re-codificada aún contiene campos EXIF".to_string(),
            ));
        }
        Err(detail) => {
            let _ = fs::remove_file(&temp_path);
            return Err(ScrubError::ImageFailure(detail));
        }
    }

    fs::rename(&temp_path, output).map_err(|error| {
        let _ = fs::remove_file(&temp_path);
        ScrubError::ImageFailure(format!(
            "no se pudo mover la copia limpia a su destino: {error}"
        ))
    })?;

    Ok(())
}

/// Comprueba que una imagen carece de campos EXIF residuales.
pub fn verify_exif_clean(path: &Path) -> Result<bool, String> {
    let file =
        File::open(path).map_err(|e| format!("no se pudo abrir la copia para verificar: {e}"))?;
    let mut reader = BufReader::new(file);

    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Ok(exif.fields().next().is_none()),
        Err(exif::Error::NotFound(_)) | Err(exif::Error::BlankValue(_)) => Ok(true),
        Err(exif::Error::InvalidFormat(_)) => Ok(true),
        Err(exif::Error::Io(err)) => Err(format!(
            "no se pudo leer EXIF durante la verificación: {err}"
        )),
        Err(other) => Err(format!("error verificando EXIF: {other}")),
    }
}

/// Ruta temporal en el mismo directorio que `output`, conservando la
/// extensión para que el codec se elija igual que en el destino final.
fn temp_output_path(output: &Path) -> PathBuf {
    let parent = output.parent().unwrap_or_else(|| Path::new("."));
    let stem = output.file_stem().unwrap_or_default().to_string_lossy();
    let extension = output.extension().unwrap_or_default().to_string_lossy();

    // Marca de tiempo para evitar colisiones entre ejecuciones consecutivas.
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    parent.join(format!(".{}_tmp_{}.{}", stem, timestamp, extension))
}
