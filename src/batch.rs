// Decoding many encoded strings at once.
//
// Locale tables carry dozens of independent encoded lists. Each one is
// decoded on its own; results keep input order and one failure does not
// affect the others. With the `parallel` feature the work is spread over
// the rayon thread pool, all threads sharing the one static alphabet.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::base88::{DecodeError, Decoder};

/// Decode every input with the default alphabet.
pub fn decode_all<S: AsRef<str> + Sync>(inputs: &[S]) -> Vec<Result<Vec<String>, DecodeError>> {
    decode_all_with(Decoder::default(), inputs)
}

/// Decode every input with `decoder`.
pub fn decode_all_with<S: AsRef<str> + Sync>(
    decoder: Decoder<'_>,
    inputs: &[S],
) -> Vec<Result<Vec<String>, DecodeError>> {
    log::debug!("batch decode of {} inputs", inputs.len());

    #[cfg(feature = "parallel")]
    let results = inputs
        .par_iter()
        .map(|s| decoder.decode(s.as_ref()))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = inputs.iter().map(|s| decoder.decode(s.as_ref())).collect();

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_isolates_failures() {
        let results = decode_all(&["8", "8 ", "", ".M"]);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_deref(), Ok(&["\u{2}".to_string()][..]));
        assert!(matches!(
            results[1],
            Err(DecodeError::InvalidCharacter { offset: 1, .. })
        ));
        assert_eq!(results[2], Ok(Vec::new()));
        assert_eq!(results[3].as_ref().map(Vec::len), Ok(4));
    }

    #[test]
    fn matches_single_decode() {
        let inputs: Vec<String> = (0..64).map(|i| "8".repeat(i)).collect();
        let results = decode_all(&inputs);
        for (input, result) in inputs.iter().zip(results) {
            assert_eq!(result, crate::decode(input));
        }
    }
}
