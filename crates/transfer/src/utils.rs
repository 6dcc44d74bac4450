//! Formatting helpers for user-facing messages.

/// Format a byte count in human-readable form.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let value = bytes as f64;
    let unit_index = (value.ln() / 1024_f64.ln()).floor() as usize;
    let unit_index = unit_index.min(UNITS.len() - 1);

    let size = value / 1024_f64.powi(unit_index as i32);
    format!("{:.2} {}", size, UNITS[unit_index])
}
