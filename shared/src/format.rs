const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human-readable byte size, base 1024, at most two decimals with
/// trailing zeros trimmed. Renders both the dropzone "Max size" hint
/// and the too-large validation message, which must agree.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (((bytes as f64).ln() / 1024f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut rendered = format!("{:.2}", value);
    if rendered.contains('.') {
        rendered = rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", rendered, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::format_file_size;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn sub_kilobyte_stays_in_bytes() {
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn whole_units_drop_decimals() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
    }

    #[test]
    fn fractional_units_keep_up_to_two_decimals() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_000_000), "1.91 MB");
    }

    #[test]
    fn large_sizes_clamp_to_terabytes() {
        assert_eq!(format_file_size(1024u64.pow(4)), "1 TB");
        assert_eq!(format_file_size(1024u64.pow(4) * 2048), "2048 TB");
    }
}
