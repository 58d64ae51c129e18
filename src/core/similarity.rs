/// Compare two strings using Dice's coefficient over character bigrams
///
/// Whitespace is removed before comparing. The comparison is case-sensitive;
/// callers lowercase both sides first.
///
/// Formula:
/// similarity = 2 * |bigrams(a) ∩ bigrams(b)| / (|bigrams(a)| + |bigrams(b)|)
///
/// where the intersection counts repeated bigrams as a multiset.
///
/// # Returns
/// A score in `[0, 1]`: 1.0 for identical strings, 0.0 when no bigram is shared.
#[inline]
pub fn compare_two_strings(first: &str, second: &str) -> f64 {
    strsim::sorensen_dice(first, second)
}

/// Normalize text for matching
#[inline]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}
