//! Reescritura de las fechas del archivo limpio hacia una fecha fija.

use chrono::offset::LocalResult;
use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use filetime::FileTime;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::TimeError;

/// Intentos ante un archivo bloqueado transitoriamente (antivirus, handle
/// aún sin liberar tras el guardado).
const RETRY_ATTEMPTS: u32 = 3;

/// Espera fija entre intentos.
const RETRY_BACKOFF: Duration = Duration::from_millis(300);

/// Fecha fija forzada sobre cada archivo limpio: 1990-01-01T00:00:00,
/// interpretada en hora local. Constante de proceso.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TargetTimestamp {
    unix_seconds: i64,
}

impl TargetTimestamp {
    pub fn purge_date() -> Self {
        let naive = NaiveDate::from_ymd_opt(1990, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or(NaiveDateTime::MIN);

        // Si la zona local no tiene ese instante (salto horario), se toma la
        // interpretación UTC en lugar de fallar.
        let unix_seconds = match Local.from_local_datetime(&naive) {
            LocalResult::Single(datetime) => datetime.timestamp(),
            LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
            LocalResult::None => naive.and_utc().timestamp(),
        };

        Self { unix_seconds }
    }

    pub fn as_filetime(&self) -> FileTime {
        FileTime::from_unix_time(self.unix_seconds, 0)
    }
}

impl Default for TargetTimestamp {
    fn default() -> Self {
        Self::purge_date()
    }
}

/// Fuerza las fechas de modificación y acceso del archivo ya existente.
///
/// Nunca crea el archivo. Reintenta hasta [`RETRY_ATTEMPTS`] veces con una
/// espera fija, porque el archivo recién escrito puede seguir bloqueado por
/// otro proceso. La fecha de creación no es ajustable desde este backend y
/// se deja intacta; agotar los reintentos no es fatal para el pipeline.
pub fn rewrite_timestamps(path: &Path, target: &TargetTimestamp) -> Result<(), TimeError> {
    let stamp = target.as_filetime();
    let mut last_error = None;

    for attempt in 0..RETRY_ATTEMPTS {
        match filetime::set_file_times(path, stamp, stamp) {
            Ok(()) => return Ok(()),
            Err(error) => {
                last_error = Some(error);
                if attempt + 1 < RETRY_ATTEMPTS {
                    thread::sleep(RETRY_BACKOFF);
                }
            }
        }
    }

    Err(TimeError {
        path: path.to_path_buf(),
        detail: last_error
            .map(|error| error.to_string())
            .unwrap_or_else(|| "error desconocido".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn la_fecha_objetivo_es_1990_en_hora_local() {
        let target = TargetTimestamp::purge_date();
        let local = Local
            .timestamp_opt(target.as_filetime().unix_seconds(), 0)
            .single()
            .expect("instante válido");

        assert_eq!(local.year(), 1990);
        assert_eq!(local.month(), 1);
        assert_eq!(local.day(), 1);
        assert_eq!(local.hour(), 0);
        assert_eq!(local.minute(), 0);
        assert_eq!(local.second(), 0);
    }

    #[test]
    fn reescribe_mtime_y_atime() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("limpio.png");
        fs::write(&path, b"contenido")?;

        let target = TargetTimestamp::purge_date();
        rewrite_timestamps(&path, &target)?;

        let metadata = fs::metadata(&path)?;
        assert_eq!(
            FileTime::from_last_modification_time(&metadata).unix_seconds(),
            target.as_filetime().unix_seconds()
        );
        assert_eq!(
            FileTime::from_last_access_time(&metadata).unix_seconds(),
            target.as_filetime().unix_seconds()
        );

        Ok(())
    }

    #[test]
    fn archivo_inexistente_devuelve_error_sin_crearlo() {
        let dir = tempdir().expect("directorio temporal");
        let path = dir.path().join("no_existe.png");

        let error = rewrite_timestamps(&path, &TargetTimestamp::purge_date())
            .expect_err("no debería tener éxito sin archivo");

        assert_eq!(error.path, path);
        assert!(!path.exists());
    }
}
