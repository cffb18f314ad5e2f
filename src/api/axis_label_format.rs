use std::fmt::Write as _;

use chrono::{FixedOffset, Offset, Utc};

use crate::core::{DateTimeIntervalType, axis_value_to_datetime, remove_noise};

use super::AxisLabelLocale;

/// Magnitudes at or above this switch to exponential notation.
const EXPONENTIAL_UPPER: f64 = 1e15;
/// Non-zero magnitudes below this switch to exponential notation.
const EXPONENTIAL_LOWER: f64 = 1e-5;
const MAX_FRACTION_DENOMINATOR: u32 = 64;

/// Formats a numeric tick value with precision derived from the major step.
pub(crate) fn format_numeric_label(value: f64, step: f64, locale: AxisLabelLocale) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let value = remove_noise(value);
    if value == 0.0 {
        return "0".to_owned();
    }
    if uses_exponential(value) {
        return format_exponential(value, locale);
    }
    let text = format_axis_decimal(value, precision_from_step(step), locale);
    strip_negative_zero(text, locale)
}

/// Shortest round-tripping rendition, used where no step is meaningful.
pub(crate) fn format_plain_number(value: f64, locale: AxisLabelLocale) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let value = remove_noise(value);
    if value == 0.0 {
        return "0".to_owned();
    }
    if uses_exponential(value) {
        return format_exponential(value, locale);
    }
    localize(format!("{value}"), locale)
}

/// `10^{3}`, `2·10^{3}`, or `0`.
pub(crate) fn format_superscript_exponential(
    value: f64,
    base: f64,
    locale: AxisLabelLocale,
) -> String {
    if !value.is_finite() || value == 0.0 || !base.is_finite() || base <= 1.0 {
        return "0".to_owned();
    }
    let log = if base == 10.0 {
        value.abs().log10()
    } else {
        value.abs().ln() / base.ln()
    };
    let exponent = remove_noise(log).floor();
    let mantissa = remove_noise(value / base.powf(exponent));
    let base_text = format_plain_number(base, locale);
    let exponent = exponent as i64;

    if mantissa == 1.0 {
        format!("{base_text}^{{{exponent}}}")
    } else if mantissa == -1.0 {
        format!("-{base_text}^{{{exponent}}}")
    } else {
        let mantissa_text = format_plain_number(mantissa, locale);
        format!("{mantissa_text}·{base_text}^{{{exponent}}}")
    }
}

/// Expresses `value` as a fraction of `unit` (`π/2`, `3π/4`, `-π`).
pub(crate) fn format_fraction(
    value: f64,
    unit: f64,
    symbol: &str,
    locale: AxisLabelLocale,
) -> String {
    if !value.is_finite() || !unit.is_finite() || unit == 0.0 {
        return format_plain_number(value, locale);
    }
    let ratio = value / unit;
    if ratio.abs() < 1e-9 {
        return "0".to_owned();
    }

    for denominator in 1..=MAX_FRACTION_DENOMINATOR {
        let scaled = ratio * f64::from(denominator);
        let numerator = scaled.round();
        if (scaled - numerator).abs() > 1e-6 * f64::from(denominator) {
            continue;
        }
        let numerator_text = match numerator as i64 {
            1 => symbol.to_owned(),
            -1 => format!("-{symbol}"),
            other => format!("{other}{symbol}"),
        };
        return if denominator == 1 {
            numerator_text
        } else {
            format!("{numerator_text}/{denominator}")
        };
    }

    format!("{}{symbol}", format_plain_number(ratio, locale))
}

/// `[-]H:MM:SS`, with milliseconds when the step is below one second.
pub(crate) fn format_time_span(seconds: f64, step: f64) -> String {
    if !seconds.is_finite() {
        return "nan".to_owned();
    }
    let total_millis = (seconds.abs() * 1_000.0).round().min(i64::MAX as f64) as i64;
    let sign = if seconds < 0.0 && total_millis > 0 { "-" } else { "" };
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis / 60_000) % 60;
    let secs = (total_millis / 1_000) % 60;
    let millis = total_millis % 1_000;

    let mut text = format!("{sign}{hours}:{minutes:02}:{secs:02}");
    if step > 0.0 && step < 1.0 {
        let _ = write!(text, ".{millis:03}");
    }
    text
}

/// Default chrono pattern for labels at the given unit.
pub(crate) fn date_pattern(unit: DateTimeIntervalType, locale: AxisLabelLocale) -> &'static str {
    match (locale, unit) {
        (_, DateTimeIntervalType::Years) => "%Y",
        (AxisLabelLocale::EnUs, DateTimeIntervalType::Months) => "%Y-%m",
        (AxisLabelLocale::EsEs, DateTimeIntervalType::Months) => "%m/%Y",
        (
            AxisLabelLocale::EnUs,
            DateTimeIntervalType::Weeks | DateTimeIntervalType::Days | DateTimeIntervalType::Auto,
        ) => "%Y-%m-%d",
        (
            AxisLabelLocale::EsEs,
            DateTimeIntervalType::Weeks | DateTimeIntervalType::Days | DateTimeIntervalType::Auto,
        ) => "%d/%m/%Y",
        (_, DateTimeIntervalType::Hours | DateTimeIntervalType::Minutes) => "%H:%M",
        (_, DateTimeIntervalType::Seconds) => "%H:%M:%S",
        (_, DateTimeIntervalType::Milliseconds) => "%H:%M:%S%.3f",
    }
}

/// Formats a days-since-epoch value in the given fixed offset.
///
/// Invalid patterns fall back to ISO dates instead of panicking.
pub(crate) fn format_date_value(value: f64, pattern: &str, utc_offset_minutes: i32) -> String {
    let Some(utc) = axis_value_to_datetime(value) else {
        return "nan".to_owned();
    };
    let offset = FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60)).unwrap_or(Utc.fix());
    let local = utc.with_timezone(&offset);

    let mut text = String::new();
    if write!(text, "{}", local.format(pattern)).is_err() {
        return local.format("%Y-%m-%d").to_string();
    }
    text
}

fn uses_exponential(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude >= EXPONENTIAL_UPPER || magnitude < EXPONENTIAL_LOWER
}

fn format_exponential(value: f64, locale: AxisLabelLocale) -> String {
    localize(format!("{value:e}"), locale)
}

fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    let text = format!("{:.12}", remove_noise(step.abs()));
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().clamp(0, 12)
}

fn strip_negative_zero(text: String, locale: AxisLabelLocale) -> String {
    let separator = locale.decimal_separator();
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|ch| ch == '0' || ch == separator) => rest.to_owned(),
        _ => text,
    }
}

fn localize(text: String, locale: AxisLabelLocale) -> String {
    match locale {
        AxisLabelLocale::EnUs => text,
        AxisLabelLocale::EsEs => text.replace('.', ","),
    }
}

fn format_axis_decimal(value: f64, precision: usize, locale: AxisLabelLocale) -> String {
    localize(format!("{value:.precision$}"), locale)
}
