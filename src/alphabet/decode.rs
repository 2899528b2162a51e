use super::Alphabet;
use crate::word::Word;

impl Alphabet {
    /// Evaluates a word as a base-`radix` integer, most-significant digit
    /// first, using exact integer arithmetic. The empty word evaluates to 0;
    /// words denoting values beyond 64 bits wrap.
    ///
    /// The word must originate from this alphabet or one equal to it.
    pub fn decode_u64(&self, word: &Word<'_>) -> u64 {
        let radix = self.radix() as u64;
        let mut value: u64 = 0;
        for character in word.text().chars() {
            value = value.wrapping_mul(radix).wrapping_add(self.digits[&character] as u64);
        }
        value
    }

    /// [`Self::decode_u64`] truncated to 32 bits.
    pub fn decode_u32(&self, word: &Word<'_>) -> u32 {
        self.decode_u64(word) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::Alphabet;

    #[test]
    fn decode() {
        let binary = Alphabet::from_symbols("01").unwrap();
        assert_eq!(binary.decode_u64(&binary.word("101").unwrap()), 5);
        assert_eq!(binary.decode_u64(&binary.word("0").unwrap()), 0);
        assert_eq!(binary.decode_u64(&binary.word("00101").unwrap()), 5);
        let hex = Alphabet::from_symbols("0123456789abcdef").unwrap();
        assert_eq!(hex.decode_u64(&hex.word("ff").unwrap()), 255);
        assert_eq!(hex.decode_u64(&hex.word("deadbeef").unwrap()), 0xdeadbeef);
    }

    #[test]
    fn decode_empty_word() {
        let alphabet = Alphabet::from_symbols("01").unwrap();
        assert_eq!(alphabet.decode_u64(&alphabet.word("").unwrap()), 0);
    }

    #[test]
    fn decode_is_exact_for_large_values() {
        // beyond the f64 mantissa, where floating-point evaluation drifts
        let values = [(1u64 << 53) + 1, u64::MAX - 1, u64::MAX];
        for radix in [2u32, 10, 16, 58, 62] {
            let alphabet = Alphabet::from_radix(radix);
            for &value in &values {
                assert_eq!(alphabet.decode_u64(&alphabet.encode_u64(value)), value);
            }
        }
    }

    #[test]
    fn round_trip() {
        for radix in [2u32, 3, 10, 16, 36] {
            let alphabet = Alphabet::from_radix(radix);
            for value in [0u64, 1, 2, 7, 255, 256, 10_000, 123_456_789] {
                assert_eq!(alphabet.decode_u64(&alphabet.encode_u64(value)), value);
            }
        }
    }

    #[test]
    fn decode_u32_truncates() {
        let hex = Alphabet::from_symbols("0123456789abcdef").unwrap();
        assert_eq!(hex.decode_u32(&hex.word("ffffffff").unwrap()), u32::MAX);
        assert_eq!(hex.decode_u32(&hex.word("100000000").unwrap()), 0);
        assert_eq!(hex.decode_u32(&hex.word("1deadbeef").unwrap()), 0xdeadbeef);
    }

    #[test]
    fn decode_wraps_past_64_bits() {
        let hex = Alphabet::from_symbols("0123456789abcdef").unwrap();
        assert_eq!(hex.decode_u64(&hex.word("10000000000000000").unwrap()), 0);
        assert_eq!(hex.decode_u64(&hex.word("10000000000000001").unwrap()), 1);
    }
}
