//! Formato de montos y fechas para mostrar en pantalla (convención es-VE)

use chrono::{DateTime, Datelike, Timelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Formatear un monto en bolívares: `Bs. 1.234,56`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}Bs. {},{}", if negative { "-" } else { "" }, grouped, fraction)
}

/// Fecha larga: `19 de octubre de 2026`
pub fn format_date(date: &DateTime<Utc>) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Fecha larga con hora: `19 de octubre de 2026, 14:05`
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    format!(
        "{}, {:02}:{:02}",
        format_date(date),
        date.hour(),
        date.minute()
    )
}

/// Fecha opcional, con guion cuando el backend no la envía
pub fn format_optional_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}
