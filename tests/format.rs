use std::path::Path;

use assert_fs::prelude::*;
use path_size::{AggregationRequest, compose, format_bytes, path_size, unit_index};

#[test]
fn raw_bytes_always_use_b_suffix() {
    for size in [0u64, 1, 123, 1023, 1024, 1536, 1_073_741_824, u64::MAX] {
        assert_eq!(format_bytes(size, false), format!("{size}B"));
    }
}

#[test]
fn human_sizes_below_one_kilobyte_stay_in_bytes() {
    assert_eq!(format_bytes(0, true), "0B");
    assert_eq!(format_bytes(1, true), "1B");
    assert_eq!(format_bytes(999, true), "999B");
    assert_eq!(format_bytes(1000, true), "1000B");
    assert_eq!(format_bytes(1023, true), "1023B");
}

#[test]
fn human_sizes_drop_trailing_zero_decimal() {
    let cases = [
        (1024, "1KB"),
        (1536, "1.5KB"),
        (1500, "1.5KB"),
        (2048, "2KB"),
        (999_999, "976.6KB"),
        (1024 * 1024 - 1, "1024KB"),
        (1_048_576, "1MB"),
        (1_234_567, "1.2MB"),
        (1_500_000, "1.4MB"),
        (1024 * 1024 * 1024 - 1, "1024MB"),
        (1_073_741_824, "1GB"),
        (1 << 40, "1TB"),
        (3 << 49, "1.5PB"),
        (1 << 60, "1EB"),
        (u64::MAX, "16EB"),
    ];

    for (size, expected) in cases {
        assert_eq!(format_bytes(size, true), expected, "for size {size}");
    }
}

#[test]
fn exact_powers_select_the_larger_unit() {
    let symbols = ["KB", "MB", "GB", "TB", "PB", "EB"];
    for (power, symbol) in (1..=6u32).zip(symbols) {
        let size = 1u64 << (10 * power);
        assert_eq!(unit_index(size), power as usize);
        assert_eq!(unit_index(size - 1), power as usize - 1);
        assert_eq!(format_bytes(size, true), format!("1{symbol}"));
    }
}

#[test]
fn compose_joins_size_and_path_with_tab() {
    assert_eq!(compose(1536, true, Path::new("data/file.bin")), "1.5KB\tdata/file.bin");
    assert_eq!(compose(1536, false, Path::new("data")), "1536B\tdata");
}

#[test]
fn path_size_formats_aggregated_total() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("test.txt").write_binary(&[b'A'; 1536]).unwrap();

    let request = AggregationRequest::new(temp.path());
    assert_eq!(path_size(&request, false).unwrap(), "1536B");
    assert_eq!(path_size(&request, true).unwrap(), "1.5KB");

    let missing = AggregationRequest::new(temp.child("nope").path());
    assert!(path_size(&missing, true).is_err());
}
