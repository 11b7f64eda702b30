//! Human-readable file sizes for upload listings

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count as `N bytes`, `X.X KB` or `X.X MB`
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} bytes", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}
