#![no_main]

use algorithms::search::binary_search;
use algorithms::stats::quartiles;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Interpret the bytes as f64 samples; NaN and infinities included
    let sample: Vec<f64> = data
        .chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect();

    // Must return a value or an error, never panic
    let _ = quartiles(&sample);

    // Sorted byte sequences must always terminate, found or not
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    if let Some(&item) = data.first() {
        let result = binary_search(&sorted, &item.wrapping_add(1));
        if let Ok(result) = result {
            assert!(result.comparisons <= result.max_steps + 1);
        }
    }
});
