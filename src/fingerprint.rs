//! Fingerprint Module
//!
//! Derives a short, well-distributed key from arbitrary text, for callers
//! whose natural cache key is itself large free text (a document body, a
//! serialized filter). Non-cryptographic: collisions are tolerable, and the
//! output must never be used for integrity or security purposes.

/// FNV-1a offset basis (32-bit).
const OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a prime (32-bit).
const PRIME: u32 = 16_777_619;

// == Fingerprint ==
/// Returns an eight-character lowercase-hex fingerprint of `input`.
///
/// 32-bit FNV-1a over the input bytes: XOR each byte into the accumulator,
/// then multiply by the FNV prime with wrapping arithmetic. Deterministic
/// within a process and across runs, O(n) in input length, O(1) space.
pub fn fingerprint(input: &str) -> String {
    let mut acc = OFFSET_BASIS;
    for byte in input.bytes() {
        acc ^= u32::from(byte);
        acc = acc.wrapping_mul(PRIME);
    }
    format!("{acc:08x}")
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fingerprint_deterministic() {
        let a = fingerprint("the quick brown fox");
        let b = fingerprint("the quick brown fox");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_shape() {
        let fp = fingerprint("some document body");
        assert_eq!(fp.len(), 8);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_empty_input_is_offset_basis() {
        assert_eq!(fingerprint(""), format!("{OFFSET_BASIS:08x}"));
    }

    #[test]
    fn test_fingerprint_distinct_for_typical_inputs() {
        let inputs = [
            "invoice",
            "invoicE",
            "contract draft v1",
            "contract draft v2",
            "a",
            "b",
            "ab",
            "ba",
            "",
            "lorem ipsum dolor sit amet",
        ];
        let outputs: HashSet<String> = inputs.iter().map(|s| fingerprint(s)).collect();
        assert_eq!(outputs.len(), inputs.len());
    }

    #[test]
    fn test_fingerprint_known_vector() {
        // FNV-1a of "a" is 0xe40c292c
        assert_eq!(fingerprint("a"), "e40c292c");
    }

    #[test]
    fn test_fingerprint_handles_multibyte_input() {
        let a = fingerprint("résumé");
        let b = fingerprint("resume");
        assert_eq!(a, fingerprint("résumé"));
        assert_ne!(a, b);
    }
}
