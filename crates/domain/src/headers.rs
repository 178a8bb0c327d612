//! Inbound header collection for the echo payload.

use std::collections::BTreeMap;

/// Header name → value, sorted by name.
pub type HeaderMapping = BTreeMap<String, String>;

/// Collect raw `(name, value)` pairs into a [`HeaderMapping`].
///
/// Names are canonicalised with [`canonical_name`]. A header that appears
/// more than once keeps every value, joined with `", "` in arrival order.
/// Values that are not valid UTF-8 are decoded lossily.
pub fn collect<'a, I>(headers: I) -> HeaderMapping
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut mapping = HeaderMapping::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value);
        mapping
            .entry(canonical_name(name))
            .and_modify(|existing: &mut String| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    mapping
}

/// Title-case a header name: a letter is upper-cased when it starts the name
/// or follows a non-letter, and lower-cased otherwise.
///
/// `content-type` becomes `Content-Type`, `x-b3-traceid` becomes
/// `X-B3-Traceid`.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}
