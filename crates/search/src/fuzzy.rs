//! Edit distance.

/// Calculate Levenshtein edit distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions or
/// substitutions (each costing 1) needed to turn `a` into `b`. Operates on
/// `char`s, not bytes.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Only the previous row of the table is needed
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0; m + 1];

    for j in 1..=n {
        curr[0] = j;
        for i in 1..=m {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[i] = (curr[i - 1] + 1)
                .min(prev[i] + 1)
                .min(prev[i - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Smallest edit distance between `query` and any whitespace-separated word of `text`.
///
/// Returns `None` when `text` has no words.
pub fn min_word_distance(query: &str, text: &str) -> Option<usize> {
    text.split_whitespace()
        .map(|word| levenshtein_distance(query, word))
        .min()
}
