//! Text normalization for match comparisons.

/// Normalize text into its canonical comparison form.
///
/// The input is lowercased, every character that is neither a word character
/// (ASCII letter, ASCII digit, `_`) nor whitespace is removed, and the result
/// is trimmed. Normalizing an already normalized string returns it unchanged.
///
/// # Example
/// ```
/// use tour_search::normalize;
///
/// assert_eq!(normalize("  Ubud, Bali! "), "ubud bali");
/// ```
pub fn normalize(input: &str) -> String {
    let stripped: String = input
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    stripped.trim().to_string()
}

/// Normalize optional text; `None` normalizes to an empty string.
pub fn normalize_opt(input: Option<&str>) -> String {
    input.map(normalize).unwrap_or_default()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
