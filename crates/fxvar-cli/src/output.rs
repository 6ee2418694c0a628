//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::error::{CliError, CliResult};

/// Prints rows as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }
    print_styled(Table::new(data));
}

/// Prints a table assembled from a header and string rows.
pub fn print_grid<H, R>(header: H, rows: impl IntoIterator<Item = R>)
where
    H: IntoIterator,
    H::Item: Into<String>,
    R: IntoIterator<Item = String>,
{
    let mut builder = Builder::default();
    builder.push_record(header.into_iter().map(Into::into));
    for row in rows {
        builder.push_record(row);
    }
    print_styled(builder.build());
}

fn print_styled(mut table: Table) {
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()));
    println!("{table}");
}

/// Prints data as JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> CliResult<()> {
    let json =
        serde_json::to_string_pretty(data).map_err(|e| CliError::Serialization(e.to_string()))?;
    println!("{json}");
    Ok(())
}

/// Prints rows as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)
            .map_err(|e| CliError::Serialization(e.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a dollar amount as `$ 1,234.56`.
///
/// Rounds half away from zero on the exact binary value, so `0.125` (exactly
/// representable) becomes `0.13` while `2.675` (stored slightly below) stays `2.67`.
pub fn format_money(value: f64) -> String {
    let Some(amount) = Decimal::from_f64_retain(value) else {
        return "$ n/a".to_string();
    };
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("$ {sign}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a fraction as a percentage, e.g. `0.006` at 4 places is `0.6000 %`.
pub fn format_percent(fraction: f64, precision: usize) -> String {
    format!("{:.precision$} %", fraction * 100.0)
}

/// Formats a loss already expressed in percent, without decimals.
pub fn format_loss_pct(percent: f64) -> String {
    format!("{percent:.0} %")
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a dollar amount.
    pub fn money(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_money(value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$ 0.00");
        assert_eq!(format_money(987.0), "$ 987.00");
        assert_eq!(format_money(1234.5), "$ 1,234.50");
        assert_eq!(format_money(100_000.0), "$ 100,000.00");
        assert_eq!(format_money(1_234_567.891), "$ 1,234,567.89");
        assert_eq!(format_money(-1004.0916), "$ -1,004.09");
        assert_eq!(format_money(-684.678_756_790_365_2), "$ -684.68");
    }

    #[test]
    fn test_format_money_rounding() {
        assert_eq!(format_money(0.125), "$ 0.13");
        assert_eq!(format_money(-0.125), "$ -0.13");
        assert_eq!(format_money(-0.001), "$ 0.00");
    }

    #[test]
    fn test_format_money_non_finite() {
        assert_eq!(format_money(f64::NAN), "$ n/a");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.006, 4), "0.6000 %");
        assert_eq!(format_percent(0.5, 2), "50.00 %");
        assert_eq!(format_percent(-0.3, 2), "-30.00 %");
    }

    #[test]
    fn test_format_loss_pct() {
        assert_eq!(format_loss_pct(-7.1), "-7 %");
        assert_eq!(format_loss_pct(-15.876), "-16 %");
    }
}
