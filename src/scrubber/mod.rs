//! Limpiadores por formato: cada uno produce una copia sin metadata en una
//! ruta nueva, sin tocar jamás el archivo original.

mod image;
mod pdf;

pub use image::{scrub_image, verify_exif_clean};
pub use pdf::scrub_pdf;
