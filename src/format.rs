use std::path::Path;

use byte_unit::{Byte, Unit};

use crate::aggregator::aggregate;
use crate::error::AggregationError;
use crate::model::AggregationRequest;

/// Base-1024 scale above bytes, paired with the symbol printed for it.
const SCALE: [(Unit, &str); 6] = [
    (Unit::KiB, "KB"),
    (Unit::MiB, "MB"),
    (Unit::GiB, "GB"),
    (Unit::TiB, "TB"),
    (Unit::PiB, "PB"),
    (Unit::EiB, "EB"),
];

/// Index of the unit `size` is printed in: 0 for B, 1 for KB, up to 6 for EB.
///
/// This is the largest `u` with `size >= 1024^u`, found from the bit length so
/// exact powers of 1024 always land on the larger unit.
pub fn unit_index(size: u64) -> usize {
    let bits = u64::BITS - size.leading_zeros();
    let index = (bits.saturating_sub(1) / 10) as usize;
    index.min(SCALE.len())
}

/// Format bytes as `<n>B`, or scaled to the largest fitting unit when `human`
/// is set.
///
/// Scaled values keep one decimal digit, and a trailing `.0` is dropped:
/// 1536 prints as `1.5KB`, 2048 as `2KB`.
pub fn format_bytes(size: u64, human: bool) -> String {
    let index = unit_index(size);
    if !human || index == 0 {
        return format!("{size}B");
    }

    let (unit, symbol) = SCALE[index - 1];
    let value = Byte::from_u64(size).get_adjusted_unit(unit).get_value();
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}{symbol}")
    } else {
        format!("{rounded:.1}{symbol}")
    }
}

/// The output line: formatted size, a tab, then the path as given.
pub fn compose(size: u64, human: bool, path: &Path) -> String {
    format!("{}\t{}", format_bytes(size, human), path.display())
}

/// Aggregate `request` and format the total without the path.
pub fn path_size(request: &AggregationRequest, human: bool) -> Result<String, AggregationError> {
    let total = aggregate(request)?;
    Ok(format_bytes(total, human))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_index_switches_exactly_at_powers_of_1024() {
        assert_eq!(unit_index(0), 0);
        assert_eq!(unit_index(1), 0);
        assert_eq!(unit_index(1023), 0);
        assert_eq!(unit_index(1024), 1);
        assert_eq!(unit_index(1024 * 1024 - 1), 1);
        assert_eq!(unit_index(1024 * 1024), 2);
        assert_eq!(unit_index(1 << 30), 3);
        assert_eq!(unit_index(1 << 40), 4);
        assert_eq!(unit_index(1 << 50), 5);
        assert_eq!(unit_index(1 << 60), 6);
        assert_eq!(unit_index(u64::MAX), 6);
    }

    #[test]
    fn unit_index_never_decreases() {
        let mut previous = 0;
        let mut size = 0u64;
        while let Some(next) = size.checked_mul(3).and_then(|s| s.checked_add(7)) {
            let index = unit_index(next);
            assert!(index >= previous, "unit index dropped at {next}");
            previous = index;
            size = next;
        }
    }
}
