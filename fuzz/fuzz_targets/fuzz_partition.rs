#![no_main]

use libfuzzer_sys::fuzz_target;

use totient_core::range::Range;

fuzz_target!(|data: &[u8]| {
    if data.len() < 18 {
        return;
    }
    let lower = i64::from_le_bytes(data[0..8].try_into().unwrap());
    let upper = i64::from_le_bytes(data[8..16].try_into().unwrap());
    let workers = usize::from(u16::from_le_bytes([data[16], data[17]]));
    let range = Range::new(lower, upper);

    let chunks = range.partition(workers);
    if range.is_empty() {
        assert!(chunks.is_empty());
        return;
    }

    assert!(chunks.len() <= workers.max(1));
    assert_eq!(chunks.first().unwrap().start, range.lower);
    assert_eq!(chunks.last().unwrap().end, range.upper);
    for pair in chunks.windows(2) {
        assert_eq!(pair[0].end.checked_add(1), Some(pair[1].start));
    }
    let max = chunks.iter().map(|c| c.len()).max().unwrap();
    let min = chunks.iter().map(|c| c.len()).min().unwrap();
    assert!(min >= 1 && max - min <= 1);
});
