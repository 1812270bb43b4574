//! Front-end de consola de MetaLimpia: recibe rutas, invoca al motor y
//! muestra un renglón por archivo más el resumen del lote.

use console::style;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use metalimpia::{BatchSummary, FileReport, ScrubOutcome, process_batch};

mod ui;

fn main() {
    // Las rutas pueden llegar como argumentos (p. ej. arrastradas sobre el
    // binario): en ese caso se procesa un único lote y se termina.
    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if !args.is_empty() {
        let reports = process_batch(&args, confirm_overwrite_prompt);
        render_reports(&reports);
        render_summary(&BatchSummary::tally(&reports));
        return;
    }

    ui::render_header();
    ui::render_intro();

    let mut session_reports: Vec<FileReport> = Vec::new();
    let mut input = String::new();
    loop {
        match read_user_input(&mut input) {
            Ok(None) => {
                println!("\n{}", style("Fin de la entrada. ¡Hasta luego!").dim());
                break;
            }
            Ok(Some(line)) => {
                if line.is_empty() {
                    continue;
                }

                if matches_command(&line, &["exit", "salir"]) {
                    println!("{}", style("Hasta luego!").dim());
                    break;
                }

                if matches_command(&line, &["ayuda", "help"]) {
                    ui::render_help();
                    continue;
                }

                if let Some(rest) = line.strip_prefix("exportar ") {
                    match export_reports(&session_reports, Path::new(rest.trim())) {
                        Ok(()) => println!(
                            "{}\n",
                            style(format!("Resultados exportados a `{}`.", rest.trim())).green()
                        ),
                        Err(message) => eprintln!("{message}"),
                    }
                    continue;
                }

                let batch = vec![PathBuf::from(&line)];
                let reports = process_batch(&batch, confirm_overwrite_prompt);
                render_reports(&reports);
                render_summary(&BatchSummary::tally(&reports));
                session_reports.extend(reports);
            }
            Err(error) => {
                eprintln!("Error al leer la entrada: {error}");
            }
        }
    }
}

fn matches_command(input: &str, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .any(|alias| input.eq_ignore_ascii_case(alias))
}

fn read_user_input(buffer: &mut String) -> io::Result<Option<String>> {
    print!("{} ", style("Archivo").bold().cyan());
    print!("{} ", style("›").cyan());
    io::stdout().flush()?;

    buffer.clear();
    let bytes_read = io::stdin().read_line(buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim().to_string()))
}

/// Punto de decisión para colisiones de salida: el motor nunca sobrescribe
/// sin consultar. Cualquier respuesta distinta de sí cuenta como no.
fn confirm_overwrite_prompt(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    print!(
        "{} ",
        style(format!("`{name}` ya existe. ¿Sobrescribir? [s/n] ▸")).yellow()
    );
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y")
}

fn render_reports(reports: &[FileReport]) {
    println!();
    for report in reports {
        let name = display_name(&report.input);
        match &report.outcome {
            ScrubOutcome::Cleaned(output) => {
                println!("{}", style(format!("✔ {}", display_name(output))).green());
                if let Some(warning) = &report.timestamp_warning {
                    println!("  {}", style(format!("⚠ {warning}")).yellow().dim());
                }
            }
            ScrubOutcome::Skipped(reason) => {
                println!("{}", style(format!("⊘ {name} — {reason}")).yellow());
            }
            ScrubOutcome::Failed(reason) => {
                println!("{}", style(format!("✖ {name} — {reason}")).red());
            }
        }
    }
}

fn render_summary(summary: &BatchSummary) {
    let mut line = format!("Listo: {} limpiados", summary.cleaned);
    if summary.skipped > 0 {
        line.push_str(&format!(", {} omitidos", summary.skipped));
    }
    if summary.failed > 0 {
        line.push_str(&format!(", {} fallidos", summary.failed));
    }
    println!("\n{}\n", style(line).dim());
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Vuelca los resultados acumulados de la sesión como JSON legible.
fn export_reports(reports: &[FileReport], destination: &Path) -> Result<(), String> {
    if reports.is_empty() {
        return Err("Aún no hay resultados que exportar.".to_string());
    }

    let json = serde_json::to_string_pretty(reports)
        .map_err(|e| format!("No se pudo serializar el reporte: {e}"))?;
    fs::write(destination, json)
        .map_err(|e| format!("No se pudo escribir `{}`: {e}", destination.display()))?;

    Ok(())
}
