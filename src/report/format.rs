use chrono::{DateTime, Utc};

/// Fraction digits kept when scaling a raw token amount.
const MAX_FRACTION_DIGITS: usize = 4;

/// Shorten an address to `visible` characters on each side, e.g. `AbCd...WxYz`.
/// Addresses that are already short enough are returned unchanged.
pub fn shorten_address(address: &str, visible: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if visible == 0 || chars.len() <= visible * 2 {
        return address.to_string();
    }
    let head: String = chars[..visible].iter().collect();
    let tail: String = chars[chars.len() - visible..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Format number with commas (e.g., 12345 → "12,345")
pub fn format_count(n: u64) -> String {
    group_thousands(&n.to_string())
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result
}

/// Scale a raw integer amount by `10^-decimals` and group the integer part.
///
/// Works on the decimal string so supplies beyond `u64` stay exact. Fraction
/// digits are truncated to four and trailing zeros dropped. Input that is not
/// a plain digit string is returned as-is.
pub fn format_token_amount(raw: &str, decimals: u8) -> String {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let digits = raw.trim_start_matches('0');
    let decimals = decimals as usize;
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits.to_string()
    };

    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac: String = frac_part.chars().take(MAX_FRACTION_DIGITS).collect();
    let frac = frac.trim_end_matches('0');

    let int_part = group_thousands(int_part);
    if frac.is_empty() {
        int_part
    } else {
        format!("{}.{}", int_part, frac)
    }
}

/// Short date for a unix timestamp in seconds, e.g. "Nov 14, 2023".
pub fn format_timestamp(unix_seconds: i64) -> String {
    match DateTime::<Utc>::from_timestamp(unix_seconds, 0) {
        Some(dt) => dt.format("%b %d, %Y").to_string(),
        None => "Unknown".to_string(),
    }
}

/// Long form shown under the short date, e.g. "November 14, 2023 at 10:13 PM".
pub fn format_long_date(dt: &DateTime<Utc>) -> String {
    dt.format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Advisory attached to a holder count. Ranges are half-open and contiguous.
pub fn holder_advisory(holders: u64) -> &'static str {
    match holders {
        0..=9 => "Very few holders - potential concentration risk",
        10..=99 => "Limited holder distribution",
        100..=999 => "Moderate holder distribution",
        _ => "Wide holder distribution",
    }
}

/// First character of the symbol, or `?` when the symbol is empty.
pub fn symbol_initial(symbol: &str) -> char {
    symbol.chars().next().unwrap_or('?')
}
