//! Denylist filter applied to every literal and identifier before it is
//! written into clause text.
//!
//! The filter strips control characters and SQL comment delimiters and
//! doubles single quotes. It is a best-effort measure: it does not make
//! inlined literals safe for every dialect or encoding, and it is no
//! substitute for bound parameters.

/// Comment delimiters removed, in this order, until none remain.
const DELIMITERS: [&str; 3] = ["--", "/*", "*/"];

/// Sanitize a literal or identifier.
///
/// ```
/// use sieve::sanitize::sanitize;
///
/// assert_eq!(sanitize("a--b--c"), "abc");
/// assert_eq!(sanitize("it's"), "it''s");
/// ```
pub fn sanitize(input: &str) -> String {
    let mut out: String = input.chars().filter(|c| (*c as u32) >= 32).collect();

    for delimiter in DELIMITERS {
        strip_all(&mut out, delimiter);
    }

    out.replace('\'', "''")
}

/// Remove the first occurrence of `needle` until a fixed point is reached.
/// Removal can join text into a new occurrence, which the next pass catches.
fn strip_all(s: &mut String, needle: &str) {
    while let Some(pos) = s.find(needle) {
        s.replace_range(pos..pos + needle.len(), "");
    }
}
