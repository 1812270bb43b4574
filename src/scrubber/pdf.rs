//! Limpieza de PDFs: elimina el stream XMP del catálogo y todas las claves
//! del diccionario Info, en dos pasadas.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use lopdf::{Document, Object};

use crate::error::ScrubError;

/// Pausa entre el guardado de la primera pasada y su reapertura: en algunos
/// sistemas el handle recién cerrado no es reabrible de inmediato.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Genera en `output` una copia del PDF sin metadata.
///
/// Son dos pasadas obligatorias porque el propio guardado puede re-estampar
/// una entrada de productor: la segunda abre lo recién escrito, repite ambas
/// eliminaciones y vuelve a guardar sobre la misma ruta. Si la segunda
/// pasada falla, la copia se descarta y el archivo se reporta fallido.
pub fn scrub_pdf(input: &Path, output: &Path) -> Result<(), ScrubError> {
    let mut doc = load_document(input)?;
    strip_metadata(&mut doc);
    save_document(&mut doc, output)?;

    thread::sleep(SETTLE_DELAY);

    let mut reopened = match load_document(output) {
        Ok(doc) => doc,
        Err(error) => {
            let _ = fs::remove_file(output);
            return Err(error);
        }
    };
    strip_metadata(&mut reopened);
    if let Err(error) = save_document(&mut reopened, output) {
        let _ = fs::remove_file(output);
        return Err(error);
    }

    Ok(())
}

fn load_document(path: &Path) -> Result<Document, ScrubError> {
    let doc = Document::load(path)
        .map_err(|e| ScrubError::PdfFailure(format!("no se pudo leer el documento: {e}")))?;
    if doc.is_encrypted() {
        return Err(ScrubError::PdfFailure(
            "el documento está cifrado".to_string(),
        ));
    }
    Ok(doc)
}

fn save_document(doc: &mut Document, path: &Path) -> Result<(), ScrubError> {
    // El handle devuelto se suelta aquí mismo; el reescritor de fechas
    // necesita poder reabrir el archivo justo después.
    doc.save(path)
        .map(drop)
        .map_err(|e| ScrubError::PdfFailure(format!("no se pudo guardar el documento: {e}")))
}

/// Las dos eliminaciones de una pasada: claves del diccionario Info y la
/// referencia `/Metadata` del catálogo raíz.
fn strip_metadata(doc: &mut Document) {
    clear_info_dictionary(doc);
    remove_root_metadata(doc);
}

/// Borra cada clave del diccionario Info (las claves se eliminan, no se
/// vacían sus valores). El diccionario queda presente pero sin entradas.
fn clear_info_dictionary(doc: &mut Document) {
    let info_id = match doc.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    };

    let dict = match info_id {
        Some(id) => match doc.get_object_mut(id) {
            Ok(Object::Dictionary(dict)) => dict,
            _ => return,
        },
        // Algunos escritores incrustan Info directamente en el trailer.
        None => match doc.trailer.get_mut(b"Info") {
            Ok(Object::Dictionary(dict)) => dict,
            _ => return,
        },
    };

    let keys: Vec<Vec<u8>> = dict.iter().map(|(key, _)| key.clone()).collect();
    for key in keys {
        dict.remove(&key);
    }
}

/// Quita la referencia `/Metadata` del catálogo y el stream XMP al que
/// apuntaba: sin esto el guardado reescribiría el objeto huérfano intacto.
fn remove_root_metadata(doc: &mut Document) {
    let root_id = match doc.trailer.get(b"Root") {
        Ok(Object::Reference(id)) => *id,
        _ => return,
    };

    let removed = match doc.get_object_mut(root_id) {
        Ok(Object::Dictionary(catalog)) => catalog.remove(b"Metadata"),
        _ => None,
    };

    if let Some(Object::Reference(stream_id)) = removed {
        doc.objects.remove(&stream_id);
    }
}
