//! Currency and date formatting for presentation.
//!
//! Formatting is fixed-locale and deterministic: the same amount or date
//! always yields the same label. `parse_amount` is the inverse of
//! `format_amount` within a cent.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

/// Display symbol for an ISO 4217 currency code.
pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

/// Formats a bare number with the locale's separators at the given
/// precision.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Formats an amount as a currency string with symbol, grouping separators,
/// and two decimal places, e.g. `$1,234.56`. Negative amounts carry a
/// leading sign: `-$20.00`.
pub fn format_amount(amount: f64, code: &str, locale: &LocaleConfig) -> String {
    let body = format_number(locale, amount.abs(), 2);
    let symbol = symbol_for(code);
    if amount < 0.0 {
        format!("-{symbol}{body}")
    } else {
        format!("{symbol}{body}")
    }
}

/// Parses a formatted currency string back to its numeric value, stripping
/// the symbol and grouping separators. Returns `None` when no numeric body
/// remains.
pub fn parse_amount(input: &str, locale: &LocaleConfig) -> Option<f64> {
    let mut cleaned = String::new();
    for ch in input.chars() {
        if ch.is_ascii_digit() || ch == '-' {
            cleaned.push(ch);
        } else if ch == locale.decimal_separator {
            cleaned.push('.');
        }
    }
    cleaned.parse().ok()
}

/// Long display label, e.g. `Jan 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        month_label(date.month()),
        date.day(),
        date.year()
    )
}

/// Short display label, e.g. `Jan 5`.
pub fn format_date_short(date: NaiveDate) -> String {
    format!("{} {}", month_label(date.month()), date.day())
}

pub fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
