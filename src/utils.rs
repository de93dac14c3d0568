//! Utility helpers shared across the tooltip controller.

use rand::Rng;

use crate::config::IdScheme;
use crate::constants::RANDOM_ID_LEN;

const BASE32_DIGITS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Build a trigger id according to `scheme`.
///
/// `sequence` is the 1-based position used by [`IdScheme::Sequential`]; the
/// random scheme ignores it.  Uniqueness of random ids is best effort – no
/// collision check against the document is made.
pub fn generate_trigger_id<R: Rng + ?Sized>(
    scheme: IdScheme,
    prefix: &str,
    sequence: u32,
    rng: &mut R,
) -> String {
    match scheme {
        IdScheme::Sequential => format!("{}{}", prefix, sequence),
        IdScheme::Random => {
            let mut id = String::with_capacity(prefix.len() + RANDOM_ID_LEN);
            id.push_str(prefix);
            for _ in 0..RANDOM_ID_LEN {
                id.push(BASE32_DIGITS[rng.gen_range(0..BASE32_DIGITS.len())] as char);
            }
            id
        }
    }
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
