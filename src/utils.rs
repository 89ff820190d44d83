const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with binary (1024) steps, e.g. `512B`, `1.0KB`, `3.4GB`.
#[must_use]
pub fn humanize_size(bytes: f64) -> String {
    if bytes.is_nan() || bytes <= 0.0 {
        return "0B".to_string();
    }
    let mut size = bytes;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{}B", size.trunc())
    } else {
        format!("{size:.1}{}", SIZE_UNITS[unit])
    }
}

/// Rounds to `digits` decimal places.
#[must_use]
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}
