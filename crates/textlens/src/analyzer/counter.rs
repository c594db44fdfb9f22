//! Counting primitives.
//!
//! Both functions are total over `&str` and run in a single pass.

/// Counts the words in `text`.
///
/// A word is a maximal run of characters that are not Unicode `White_Space`.
/// Leading, trailing and repeated whitespace never produce empty words, so
/// `"  a   b  "` has two words and a whitespace-only string has none.
pub fn count_words(text: &str) -> usize {
  text.split_whitespace().count()
}

/// Counts the characters in `text` as Unicode code points.
///
/// `"世界"` is 2 characters (6 bytes), `"🌍"` is 1.
/// Combining sequences count each code point, e.g. `"e\u{301}"` is 2.
pub fn count_characters(text: &str) -> usize {
  text.chars().count()
}
