use crate::error::{FiscalRecordError, Result};
use chrono::NaiveDate;

/// Day-first input formats accepted for the issue date. Everything re-renders
/// through [`format_issue_date`] as `dd/mm/yyyy`.
const DATE_INPUT_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Normalizes an operation code into the dotted `D.DDD` canonical form.
///
/// Accepts both `1102` and `1.102`. Anything whose digit-only form is not
/// exactly 4 digits long is returned trimmed and otherwise unchanged, so
/// callers must re-validate. Empty input yields empty output.
pub fn normalize_operation_code(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 4 {
        format!("{}.{}", &digits[..1], &digits[1..])
    } else {
        raw.trim().to_string()
    }
}

/// Parses a date string under the day-first convention.
pub fn parse_issue_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| FiscalRecordError::DateFormat(raw.to_string()))
}

pub fn format_issue_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses a locale-formatted amount: `.` groups thousands, `,` marks the
/// decimal separator. A dot with no comma counts as the decimal separator
/// only when it is the sole dot and carries one or two trailing digits, so
/// already-canonical values like `1234.50` re-parse to the same number.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FiscalRecordError::AmountFormat(raw.to_string()));
    }

    let cleaned = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else if is_dot_decimal(trimmed) {
        trimmed.to_string()
    } else {
        trimmed.replace('.', "")
    };

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FiscalRecordError::AmountFormat(raw.to_string()))
}

fn is_dot_decimal(s: &str) -> bool {
    if s.matches('.').count() != 1 {
        return false;
    }
    match s.split_once('.') {
        Some((_, frac)) => {
            (1..=2).contains(&frac.len()) && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Renders an amount with exactly two fraction digits and a plain `.`
/// decimal separator, independent of the input locale.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_operation_code_four_digits() {
        assert_eq!(normalize_operation_code("1102"), "1.102");
        assert_eq!(normalize_operation_code("1.102"), "1.102");
        assert_eq!(normalize_operation_code("5 1 0 2"), "5.102");
        assert_eq!(normalize_operation_code("6,108"), "6.108");
    }

    #[test]
    fn test_normalize_operation_code_passthrough() {
        assert_eq!(normalize_operation_code(""), "");
        assert_eq!(normalize_operation_code("  110  "), "110");
        assert_eq!(normalize_operation_code("11025"), "11025");
        assert_eq!(normalize_operation_code("abc"), "abc");
    }

    #[test]
    fn test_parse_issue_date_day_first() {
        let date = parse_issue_date("10/10/2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 10, 10).unwrap());

        let date = parse_issue_date("05-01-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        assert_eq!(format_issue_date(date), "05/01/2024");
    }

    #[test]
    fn test_parse_issue_date_rejects_invalid() {
        assert!(parse_issue_date("31/02/2024").is_err());
        assert!(parse_issue_date("2024-01-05").is_err());
        assert!(parse_issue_date("amanhã").is_err());
        assert!(parse_issue_date("").is_err());
    }

    #[test]
    fn test_parse_amount_locale_forms() {
        assert_eq!(parse_amount("8.500,00").unwrap(), 8500.0);
        assert_eq!(parse_amount("1.234,50").unwrap(), 1234.5);
        assert_eq!(parse_amount("8500").unwrap(), 8500.0);
        assert_eq!(parse_amount("8.500").unwrap(), 8500.0);
        assert_eq!(parse_amount("1.234.567,89").unwrap(), 1234567.89);
        assert_eq!(parse_amount("0,99").unwrap(), 0.99);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12,34,56").is_err());
        assert!(parse_amount("R$ dez").is_err());
    }

    #[test]
    fn test_format_amount_round_trip_is_idempotent() {
        let first = format_amount(parse_amount("1.234,50").unwrap());
        assert_eq!(first, "1234.50");

        let second = format_amount(parse_amount(&first).unwrap());
        assert_eq!(second, "1234.50");

        let formatted = format_amount(parse_amount("8.500,00").unwrap());
        assert_eq!(formatted, "8500.00");
    }
}
