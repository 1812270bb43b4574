//! Encabezado y ayudas del front-end de consola.

use console::style;

const HEADER_WIDTH: usize = 74;

pub fn render_header() {
    let border = "─".repeat(HEADER_WIDTH - 2);
    println!("\n{}", style(format!("┌{}┐", border)).cyan());
    println!(
        "{}",
        style(format!(
            "│ {:^inner_width$} │",
            "▸ MetaLimpia · Copias sin metadata ◂",
            inner_width = HEADER_WIDTH - 4
        ))
        .cyan()
        .bold()
    );
    println!("{}\n", style(format!("└{}┘", border)).cyan());
}

pub fn render_intro() {
    println!(
        "{}",
        style("Escribe la ruta de un archivo para generar su copia sin metadata.").dim()
    );
    println!(
        "{}",
        style(
            "Formatos: PDF / JPG / PNG / BMP / TIFF / WEBP / GIF. La copia se guarda junto al original."
        )
        .dim()
    );
    println!(
        "{}\n",
        style("Escribe 'ayuda' para ver los comandos, 'salir' o 'exit' para terminar.").dim()
    );
}

pub fn render_help() {
    let help_lines = [
        "┌─ Comandos:",
        "│   <ruta>            limpia ese archivo (relativa o absoluta)",
        "│   exportar <ruta>   guarda en JSON los resultados acumulados",
        "│   ayuda             muestra esta ayuda",
        "│   salir | exit      termina",
        "└─",
    ];

    for line in help_lines.iter() {
        println!("{}", style(line).cyan().dim());
    }

    println!();
}
