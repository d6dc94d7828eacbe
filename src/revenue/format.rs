//! Display formatting for revenue figures
//!
//! These are render-time helpers. The model itself never rounds.

/// Page-style currency: `$1.4M` from one million up, otherwise whole dollars
/// with thousands separators (`$987,000`).
pub fn format_currency(amount: f64) -> String {
    if amount >= 1e6 {
        format!("${:.1}M", amount / 1e6)
    } else {
        format!("${}", group_thousands(amount.round()))
    }
}

/// Magnitude ladder `$X`, `$X.XK`, `$X.XM`, `$X.XB`
pub fn format_currency_compact(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}", sign, format_compact_unsigned(amount.abs(), true))
}

/// Counter-style number: `2.5B`, `1.2M`, `3.4K`, else `42` or `4.5`
pub fn format_compact(value: f64) -> String {
    if value < 0.0 {
        return format!("-{}", format_compact_unsigned(-value, false));
    }
    format_compact_unsigned(value, false)
}

fn format_compact_unsigned(value: f64, whole_units: bool) -> String {
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else if whole_units || value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Insert `,` every three digits of an already-rounded value
fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative && grouped != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
