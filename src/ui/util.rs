use rust_decimal::Decimal;

/// Format shillings with thousand separators. Whole amounts print without
/// decimals; anything else gets two.
/// e.g. `120000` → `"KSh 120,000"`, `-18518.55` → `"-KSh 18,518.55"`
pub(crate) fn format_ksh(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = if abs.fract().is_zero() {
        format!("{:.0}", abs.trunc())
    } else {
        format!("{abs:.2}")
    };
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next();

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    match dec_part {
        Some(dec) => format!("{sign}KSh {with_commas}.{dec}"),
        None => format!("{sign}KSh {with_commas}"),
    }
}

/// Short form for chart labels: `65000` → `"65k"`, `18518.55` → `"18.5k"`.
pub(crate) fn format_compact(val: Decimal) -> String {
    let abs = val.abs();
    let sign = if val < Decimal::ZERO { "-" } else { "" };
    if abs >= Decimal::ONE_THOUSAND {
        let thousands = (abs / Decimal::ONE_THOUSAND).round_dp(1).normalize();
        format!("{sign}{thousands}k")
    } else {
        format!("{sign}{:.0}", abs.round())
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Center `s` in a field of `width` characters, truncating if needed.
pub(crate) fn center(s: &str, width: usize) -> String {
    let s = truncate(s, width);
    let len = s.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}

/// A text slider such as `[████░░░░]` showing where `value` sits in `min..=max`.
pub(crate) fn slider_bar(value: i64, min: i64, max: i64, width: usize) -> String {
    let span = (max - min).max(1);
    let offset = (value - min).clamp(0, span);
    let filled = (offset as usize * width) / span as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Split `width` cells between `values` in proportion, using the largest
/// remainder method so the widths always add up to `width` (unless every
/// value is zero). Zero values never receive a cell.
pub(crate) fn proportional_widths(values: &[u64], width: u16) -> Vec<u16> {
    let total: u128 = values.iter().map(|v| u128::from(*v)).sum();
    if total == 0 || width == 0 {
        return vec![0; values.len()];
    }

    let mut widths = Vec::with_capacity(values.len());
    let mut remainders = Vec::with_capacity(values.len());
    for (i, v) in values.iter().enumerate() {
        let scaled = u128::from(*v) * u128::from(width);
        widths.push((scaled / total) as u16);
        remainders.push((scaled % total, i));
    }

    let assigned: u16 = widths.iter().sum();
    let mut leftover = width.saturating_sub(assigned);
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for (_, i) in remainders {
        if leftover == 0 {
            break;
        }
        widths[i] += 1;
        leftover -= 1;
    }
    widths
}

/// First visible line so that `cursor_line` stays on screen.
pub(crate) fn scroll_offset(cursor_line: usize, height: usize) -> usize {
    if height == 0 || cursor_line < height {
        0
    } else {
        cursor_line + 1 - height
    }
}
