//! Base-62 integer encoding.
//!
//! The alphabet is `0-9A-Za-z` in that order: digits first, then uppercase,
//! then lowercase. Digit order is part of the contract - short codes must be
//! stable across releases, so the alphabet is never reordered.

/// The 62-character alphabet used for short codes.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Encodes a signed integer in base 62.
///
/// This is the general-purpose entry point. Negative values are outside the
/// valid input domain and encode as the empty string rather than panicking;
/// zero encodes as `"0"`.
///
/// # Examples
///
/// ```
/// use shortener_core::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "z");
/// assert_eq!(encode(62), "10");
/// assert_eq!(encode(-123), "");
/// ```
pub fn encode(value: i64) -> String {
    if value < 0 {
        return String::new();
    }

    encode_u64(value as u64)
}

/// Encodes an unsigned integer in base 62, most-significant digit first.
///
/// Used by the code generator, which interprets digest bytes as an unsigned
/// big-endian integer and therefore never produces a negative value.
pub fn encode_u64(value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    let mut rest = value;

    while rest > 0 {
        digits.push(ALPHABET[(rest % BASE) as usize]);
        rest /= BASE;
    }

    digits.reverse();

    // Alphabet bytes are ASCII, so this cannot fail.
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_62_unique_chars() {
        let unique: std::collections::HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_zero_encodes_to_zero_char() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode_u64(0), "0");
    }

    #[test]
    fn test_negative_encodes_to_empty() {
        assert_eq!(encode(-1), "");
        assert_eq!(encode(-123), "");
        assert_eq!(encode(i64::MIN), "");
    }

    #[test]
    fn test_single_digit_boundaries() {
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "A");
        assert_eq!(encode(35), "Z");
        assert_eq!(encode(36), "a");
        assert_eq!(encode(61), "z");
    }

    #[test]
    fn test_carry_into_second_digit() {
        assert_eq!(encode(62), "10");
        assert_eq!(encode(63), "11");
        assert_eq!(encode(62 * 62), "100");
    }

    #[test]
    fn test_large_unsigned_value() {
        // 62^10 fits in u64; its encoding is "1" followed by ten zeros.
        let v = 62u64.pow(10);
        assert_eq!(encode_u64(v), "10000000000");
    }

    #[test]
    fn test_u64_max_does_not_panic() {
        let encoded = encode_u64(u64::MAX);
        assert!(!encoded.is_empty());
        assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)));
    }
}
