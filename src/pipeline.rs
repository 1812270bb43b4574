//! Orquestador por archivo: clasifica la entrada, despacha al limpiador que
//! corresponda, aplica la política de rutas y fuerza las fechas de la copia.

use std::path::{Path, PathBuf};

use crate::classify::{self, FileClassification};
use crate::outcome::{FileReport, ScrubOutcome};
use crate::output_path::derive_output_path;
use crate::scrubber;
use crate::timestamps::{self, TargetTimestamp};

/// Procesa un archivo y devuelve su resultado, sin afectar al resto del lote.
///
/// `confirm_overwrite` se consulta únicamente cuando la ruta de salida ya
/// existe; devolver `false` omite el archivo sin tocar la copia existente.
pub fn process_file(path: &Path, confirm_overwrite: impl FnOnce(&Path) -> bool) -> FileReport {
    match classify::classify(path) {
        FileClassification::IsDirectory => FileReport::new(path, ScrubOutcome::skipped("Folder")),
        FileClassification::NotAFile => {
            FileReport::new(path, ScrubOutcome::failed("File not found"))
        }
        FileClassification::Unsupported(extension) => FileReport::new(
            path,
            ScrubOutcome::skipped(format!("Unsupported: {extension}")),
        ),
        classification @ (FileClassification::Image | FileClassification::PdfDocument) => {
            scrub_supported(path, classification, confirm_overwrite)
        }
    }
}

/// Procesa un lote en el orden recibido, secuencialmente. El fallo de un
/// archivo nunca interrumpe a los demás.
pub fn process_batch(
    paths: &[PathBuf],
    mut confirm_overwrite: impl FnMut(&Path) -> bool,
) -> Vec<FileReport> {
    paths
        .iter()
        .map(|path| process_file(path, &mut confirm_overwrite))
        .collect()
}

fn scrub_supported(
    path: &Path,
    classification: FileClassification,
    confirm_overwrite: impl FnOnce(&Path) -> bool,
) -> FileReport {
    let output = derive_output_path(path);

    if output.exists() && !confirm_overwrite(&output) {
        return FileReport::new(path, ScrubOutcome::skipped("User cancelled"));
    }

    let result = match classification {
        FileClassification::PdfDocument => scrubber::scrub_pdf(path, &output),
        _ => scrubber::scrub_image(path, &output),
    };

    match result {
        Ok(()) => {
            let mut report = FileReport::new(path, ScrubOutcome::Cleaned(output.clone()));
            // Mejor esfuerzo: la copia ya existe y es usable aunque sus
            // fechas no se puedan reescribir.
            if let Err(error) =
                timestamps::rewrite_timestamps(&output, &TargetTimestamp::purge_date())
            {
                report.timestamp_warning = Some(error.to_string());
            }
            report
        }
        Err(error) => FileReport::new(path, ScrubOutcome::failed(error.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamps::TargetTimestamp;
    use filetime::FileTime;
    use image::RgbImage;
    use std::cell::Cell;
    use std::fs;
    use tempfile::tempdir;

    fn acepta_todo(_: &Path) -> bool {
        true
    }

    fn sample_image() -> RgbImage {
        RgbImage::from_fn(8, 8, |x, y| image::Rgb([x as u8 * 30, y as u8 * 30, 120]))
    }

    #[test]
    fn carpeta_se_omite() {
        let dir = tempdir().expect("directorio temporal");

        let report = process_file(dir.path(), acepta_todo);
        assert_eq!(report.outcome, ScrubOutcome::Skipped("Folder".to_string()));
    }

    #[test]
    fn ruta_inexistente_falla() {
        let dir = tempdir().expect("directorio temporal");
        let missing = dir.path().join("fantasma.jpg");

        let report = process_file(&missing, acepta_todo);
        assert_eq!(
            report.outcome,
            ScrubOutcome::Failed("File not found".to_string())
        );
    }

    #[test]
    fn extension_no_soportada_se_omite_sin_crear_salida() {
        let dir = tempdir().expect("directorio temporal");
        let notes = dir.path().join("notas.txt");
        fs::write(&notes, b"hola").expect("escribir muestra");

        let report = process_file(&notes, acepta_todo);
        assert_eq!(
            report.outcome,
            ScrubOutcome::Skipped("Unsupported: .txt".to_string())
        );
        assert!(!dir.path().join("notas_cleaned.txt").exists());
    }

    #[test]
    fn rechazar_la_sobrescritura_omite_y_no_toca_la_copia_existente() {
        let dir = tempdir().expect("directorio temporal");
        let source = dir.path().join("foto.png");
        let existing = dir.path().join("foto_cleaned.png");

        sample_image().save(&source).expect("guardar muestra");
        fs::write(&existing, b"contenido previo").expect("escribir copia previa");

        let asked = Cell::new(false);
        let report = process_file(&source, |candidate: &Path| {
            asked.set(true);
            assert_eq!(candidate, existing.as_path());
            false
        });

        assert!(asked.get(), "debería haberse consultado al caller");
        assert_eq!(
            report.outcome,
            ScrubOutcome::Skipped("User cancelled".to_string())
        );
        assert_eq!(
            fs::read(&existing).expect("leer copia previa"),
            b"contenido previo"
        );
    }

    #[test]
    fn imagen_limpia_extremo_a_extremo() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let source = dir.path().join("foto.png");
        sample_image().save(&source)?;

        let report = process_file(&source, acepta_todo);

        let expected = dir.path().join("foto_cleaned.png");
        assert_eq!(report.outcome, ScrubOutcome::Cleaned(expected.clone()));
        assert!(report.timestamp_warning.is_none());

        // Píxeles intactos.
        let original = image::open(&source)?;
        let cleaned = image::open(&expected)?;
        assert_eq!(original.to_rgba8().into_raw(), cleaned.to_rgba8().into_raw());

        // Fechas forzadas a la fecha objetivo.
        let metadata = fs::metadata(&expected)?;
        assert_eq!(
            FileTime::from_last_modification_time(&metadata).unix_seconds(),
            TargetTimestamp::purge_date().as_filetime().unix_seconds()
        );

        Ok(())
    }

    #[test]
    fn un_fallo_no_detiene_al_resto_del_lote() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let good = dir.path().join("buena.png");
        let missing = dir.path().join("no_existe.jpg");
        let broken = dir.path().join("rota.png");

        sample_image().save(&good)?;
        fs::write(&broken, b"no es un PNG")?;

        let batch = vec![missing.clone(), broken.clone(), good.clone()];
        let reports = process_batch(&batch, |_| true);

        assert_eq!(reports.len(), 3);
        assert_eq!(
            reports[0].outcome,
            ScrubOutcome::Failed("File not found".to_string())
        );
        assert!(matches!(reports[1].outcome, ScrubOutcome::Failed(_)));
        assert!(matches!(reports[2].outcome, ScrubOutcome::Cleaned(_)));

        Ok(())
    }
}
