#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic, only return errors.
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let strings = charpack88::decode(input);
    let code_points = charpack88::decode_code_points(input);
    let utf16 = charpack88::decode_utf16(input);

    // All renderings agree on success and on where decoding stopped.
    if let (Ok(cps), Ok(units)) = (&code_points, &utf16) {
        assert_eq!(cps.len(), units.len());
        for (cp, u) in cps.iter().zip(units) {
            assert_eq!(*cp, u.code_point());
        }
    }
    if let Ok(strings) = &strings {
        assert_eq!(Some(strings.len()), code_points.as_ref().ok().map(Vec::len));
    }
    if let (Err(a), Err(b)) = (&code_points, &utf16) {
        assert_eq!(a, b);
    }
});
