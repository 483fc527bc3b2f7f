//! Display rules shared by every output format.
//!
//! Values stay `f64` through the calculation and are only rounded here, half
//! away from zero. Cents round the exact binary value; grouped numbers round
//! the shortest decimal that reads back as the same `f64`.

use rust_decimal::{Decimal, RoundingStrategy};

fn round_dp(value: f64, dp: u32) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

/// Round to whole cents. NaN and infinities pass through unchanged.
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    round_dp(value, 2)
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(value)
}

/// en-US number: thousands separators, up to three fraction digits.
pub fn format_number(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }
    let rounded = value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64_retain(value))
        .map(|d| d.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero));
    match rounded {
        Some(d) => group(&d.normalize().to_string()),
        None => value.to_string(),
    }
}

/// A bare number with no grouping, as a form label would show it.
pub fn format_plain(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

/// Dollar amount with thousands separators and exactly two decimals.
pub fn format_dollars(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return format!("${}", s);
    }
    let Some(d) = round_dp(value, 2) else {
        return format!("${:.2}", value);
    };
    if d.is_sign_negative() && !d.is_zero() {
        format!("-${}", group(&format!("{:.2}", d.abs())))
    } else {
        format!("${}", group(&format!("{:.2}", d.abs())))
    }
}

/// Percentage of a fraction (0.25 -> `25.000%`).
pub fn format_percent(share: f64) -> String {
    let percent = 100.0 * share;
    if let Some(s) = non_finite(percent) {
        return format!("{}%", s);
    }
    match round_dp(percent, 3) {
        Some(d) => format!("{:.3}%", d),
        None => format!("{:.3}%", percent),
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("∞")
    } else if value == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}

/// Insert thousands separators into the integer part of a plain decimal string.
fn group(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    if int_part.chars().all(|c| c == '0') && frac_part.is_none_or(|f| f.chars().all(|c| c == '0')) {
        // -0 renders as 0
        return unsigned.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
