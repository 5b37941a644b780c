#![no_main]

use libfuzzer_sys::fuzz_target;

use totient_core::calculator::Calculator;
use totient_core::parallel::ParallelCalculator;
use totient_core::range::Range;
use totient_core::sequential::SequentialCalculator;

fuzz_target!(|data: &[u8]| {
    if data.len() < 7 {
        return;
    }
    // lower from 4 bytes, span capped at 2000 for speed, workers in 1..=64
    let lower = i64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 1_000_000);
    let span = i64::from(u16::from_le_bytes([data[4], data[5]]) % 2_000);
    let workers = usize::from(data[6] % 64) + 1;
    let range = Range::new(lower, lower + span);

    let seq = SequentialCalculator::new().compute(&range);
    let par = ParallelCalculator::with_workers(workers).compute(&range);

    match (seq, par) {
        (Ok(s), Ok(p)) => assert_eq!(s, p, "sequential != parallel on {range:?} with {workers} workers"),
        (Err(_), Err(_)) => {} // lower == 0 is rejected by both
        (s, p) => panic!("strategies disagree on {range:?}: {s:?} vs {p:?}"),
    }
});
