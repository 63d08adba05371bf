#![no_main]
use charpack88::base88::{ChunkKind, Decoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    // Chunks tile the input exactly up to the first error.
    let mut next = 0;
    for chunk in Decoder::default().chunks(input) {
        let Ok(chunk) = chunk else {
            break;
        };
        assert_eq!(chunk.offset, next);
        assert!(matches!(chunk.len, 1 | 2 | 4));
        if chunk.kind == ChunkKind::Range {
            assert!(chunk.len <= 2);
        }
        next += chunk.len;
    }
});
