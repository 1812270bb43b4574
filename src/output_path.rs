//! Política pura de rutas: deriva el nombre de la copia limpia.

use std::path::{Path, PathBuf};

/// Sufijo insertado antes de la extensión final.
pub const CLEAN_SUFFIX: &str = "_cleaned";

/// Deriva `<directorio>/<stem>_cleaned.<ext>` a partir de la entrada.
///
/// Solo la extensión final cuenta como extensión: un stem con puntos
/// (`a.b.pdf`) conserva todo menos `.pdf` en el stem. La extensión mantiene
/// las mayúsculas o minúsculas de la entrada y el directorio no cambia.
/// No hace I/O y no puede fallar.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let mut file_name = input.file_stem().unwrap_or_default().to_os_string();
    file_name.push(CLEAN_SUFFIX);
    if let Some(extension) = input.extension() {
        file_name.push(".");
        file_name.push(extension);
    }
    input.with_file_name(file_name)
}
