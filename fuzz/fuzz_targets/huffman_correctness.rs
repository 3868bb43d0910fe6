#![no_main]

use huffpack::{compress, decompress};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = compress(data).unwrap();
    let decoded = decompress(&compressed.packed, compressed.pad, &compressed.code_table).unwrap();

    assert_eq!(data, decoded.as_slice());
});
