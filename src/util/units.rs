//! Measurement unit table
//!
//! Maps the single-character unit selector to its byte multiplier and
//! display label. Lowercase selectors are decimal (powers of 1000), their
//! uppercase counterparts binary (powers of 1024).

/// The fixed megabyte used for throughput reporting, regardless of the
/// unit selected for the run.
pub const REPORT_MB: u64 = 1_000_000;

/// Byte multiplier for a unit character.
///
/// Unrecognized characters fall back to GiB.
///
/// # Examples
/// ```
/// use seqio::util::units::unit_multiplier;
///
/// assert_eq!(unit_multiplier('k'), 1_000);
/// assert_eq!(unit_multiplier('M'), 1_048_576);
/// ```
pub fn unit_multiplier(unit: char) -> u64 {
    match unit {
        'b' | 'B' => 1,
        'k' => 1_000,
        'K' => 1_024,
        'm' => 1_000_000,
        'M' => 1_024 * 1_024,
        'g' => 1_000_000_000,
        'G' => 1_024 * 1_024 * 1_024,
        't' => 1_000_000_000_000,
        'T' => 1_024 * 1_024 * 1_024 * 1_024,
        _ => 1_024 * 1_024 * 1_024,
    }
}

/// Display label for a unit character.
pub fn unit_label(unit: char) -> &'static str {
    match unit {
        'b' | 'B' => "B",
        'k' => "kB",
        'K' => "KiB",
        'm' => "MB",
        'M' => "MiB",
        'g' => "GB",
        'G' => "GiB",
        't' => "TB",
        'T' => "TiB",
        _ => "GiB",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        assert_eq!(unit_multiplier('b'), 1);
        assert_eq!(unit_multiplier('B'), 1);
        assert_eq!(unit_multiplier('k'), 1_000);
        assert_eq!(unit_multiplier('K'), 1_024);
        assert_eq!(unit_multiplier('m'), 1_000_000);
        assert_eq!(unit_multiplier('M'), 1_048_576);
        assert_eq!(unit_multiplier('g'), 1_000_000_000);
        assert_eq!(unit_multiplier('G'), 1_073_741_824);
        assert_eq!(unit_multiplier('t'), 1_000_000_000_000);
        assert_eq!(unit_multiplier('T'), 1_099_511_627_776);
    }

    #[test]
    fn test_unknown_unit_defaults_to_gib() {
        assert_eq!(unit_multiplier('x'), 1_073_741_824);
        assert_eq!(unit_multiplier('?'), 1_073_741_824);
        assert_eq!(unit_label('x'), "GiB");
    }

    #[test]
    fn test_labels() {
        assert_eq!(unit_label('b'), "B");
        assert_eq!(unit_label('B'), "B");
        assert_eq!(unit_label('k'), "kB");
        assert_eq!(unit_label('K'), "KiB");
        assert_eq!(unit_label('m'), "MB");
        assert_eq!(unit_label('M'), "MiB");
        assert_eq!(unit_label('g'), "GB");
        assert_eq!(unit_label('G'), "GiB");
        assert_eq!(unit_label('t'), "TB");
        assert_eq!(unit_label('T'), "TiB");
    }
}
