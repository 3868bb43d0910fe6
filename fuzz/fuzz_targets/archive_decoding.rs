#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = huffpack::from_archive_bytes::<u8>(data);
    let _ = huffpack::from_archive_bytes::<char>(data);
});
