//! Entrada interactiva y helpers de salida para la terminal

use std::io::{self, BufRead, Write};

use colored::*;

use crate::utils::errors::AdminError;

/// Pedir un valor por stdin
pub fn read_line(label: &str) -> io::Result<String> {
    print!("{}", format!("{}: ", label).bright_yellow());
    io::stdout().flush()?;

    let mut value = String::new();
    io::stdin().lock().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

/// Usar el valor dado o pedirlo
pub fn value_or_prompt(value: Option<String>, label: &str) -> io::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => read_line(label),
    }
}

/// Pedir un valor secreto sin eco en la terminal
pub fn read_password(label: &str) -> io::Result<String> {
    rpassword::prompt_password(format!("{}: ", label).bright_yellow().to_string())
}

/// Usar el secreto dado o pedirlo sin eco
pub fn secret_or_prompt(value: Option<String>, label: &str) -> io::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => read_password(label),
    }
}

/// Confirmación s/N; `assume_yes` la salta
pub fn confirm(question: &str, assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let answer = read_line(&format!("{} (s/N)", question))?;
    Ok(matches!(answer.to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes"))
}

pub fn title(text: &str) {
    println!();
    println!("{}", text.bright_blue().bold());
    println!("{}", "=".repeat(text.chars().count()).bright_blue());
}

pub fn success(text: &str) {
    println!("{}", format!("✅ {}", text).bright_green());
}

pub fn notice(text: &str) {
    println!("{}", text.bright_yellow());
}

pub fn failure(error: &AdminError) {
    eprintln!("{}", format!("❌ {}", error.user_message()).bright_red());
}

pub fn cancelled() {
    println!("{}", "Operación cancelada".bright_yellow());
}

/// Texto cortado o rellenado a `width` caracteres
pub fn cell(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}
