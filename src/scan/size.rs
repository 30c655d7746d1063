//! Human-readable size strings in the style of `du -h`

const UNITS: &[&str] = &["K", "M", "G", "T", "P"];

/// Format a byte count with 1024-based units, rounding up.
///
/// Values below ten carry one decimal (`4.0K`, `1.5M`); larger values are
/// whole numbers (`140K`). Counts under one kibibyte are shown in bytes.
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{}B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while unit + 1 < UNITS.len() && value.ceil() >= 1024.0 {
        value /= 1024.0;
        unit += 1;
    }

    let tenths = (value * 10.0).ceil() / 10.0;
    if tenths < 10.0 {
        format!("{:.1}{}", tenths, UNITS[unit])
    } else {
        format!("{}{}", value.ceil() as u64, UNITS[unit])
    }
}
