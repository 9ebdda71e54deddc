/// Currency symbol used in every report
pub const CURRENCY: &str = "€";

fn group_thousands(whole: i64) -> String {
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value rounded to whole units, e.g. `€ 12,345`
pub fn format_currency(value: f64) -> String {
    let whole = value.abs().round() as i64;
    let sign = if value < 0.0 && whole != 0 { "-" } else { "" };
    format!("{sign}{CURRENCY} {}", group_thousands(whole))
}

/// Scales used by [`format_compact_currency`], largest first
const COMPACT_UNITS: [(f64, &str); 3] = [(1e9, "bn"), (1e6, "M"), (1e3, "k")];

/// Short label for histogram axes, e.g. `€2.1M`, `€450k`, `€3.2bn`.
///
/// One decimal below ten units of the scale, none above.
pub fn format_compact_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    match COMPACT_UNITS.iter().find(|(scale, _)| magnitude >= *scale) {
        Some((scale, suffix)) => {
            let scaled = magnitude / scale;
            let decimals = if scaled < 10.0 { 1 } else { 0 };
            format!("{sign}{CURRENCY}{scaled:.decimals$}{suffix}")
        }
        None => format!("{sign}{CURRENCY}{magnitude:.0}"),
    }
}

/// Format a fraction as a percentage (0.07 -> "7.00%")
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
