//! Deterministic short code generation.
//!
//! Codes are derived from the input string itself rather than from a counter
//! or a random source, so no sequence allocation is needed and the same URL
//! always maps to the same code across processes and restarts. Callers can
//! exploit that to short-circuit duplicate detection, but the generator does
//! not assume any such lookup exists.

use md5::{Digest, Md5};

use crate::utils::base62;

/// Length of a generated short code, in characters.
pub const CODE_LENGTH: usize = 8;

/// Generates a fixed-length short code for the given input string.
///
/// The input is hashed with MD5 (a fast, well-distributed digest; tamper
/// resistance is irrelevant here), the first 8 digest bytes are read as a
/// big-endian unsigned integer, encoded in base 62, and the result is
/// truncated to [`CODE_LENGTH`] characters.
///
/// Total over all inputs: the empty string is valid and hashes like any
/// other. A base-62 representation shorter than [`CODE_LENGTH`] (possible
/// only for astronomically unlikely near-zero digest prefixes) is returned
/// as-is rather than padded.
///
/// # Examples
///
/// ```
/// use shortener_core::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("https://example.com/some/long/url"), "4ZyG5E7z");
/// ```
pub fn generate_code(input: &str) -> String {
    let digest = Md5::digest(input.as_bytes());

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let value = u64::from_be_bytes(prefix);

    let mut code = base62::encode_u64(value);
    code.truncate(CODE_LENGTH);
    code
}
