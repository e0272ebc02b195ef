//! Order-preserving deduplication.
//!
//! Feeds list the same dish several times (once per serving line, or again
//! after a header repeats). Output keeps the first occurrence and drops later
//! exact matches; no case folding or trimming happens here.

use std::collections::HashSet;

pub fn dedupe<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    items.iter().map(|s| s.as_ref()).filter(|item| seen.insert(*item)).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_in_order() {
        assert_eq!(dedupe(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
    }

    #[test]
    fn is_idempotent() {
        let cases: Vec<Vec<&str>> =
            vec![vec![], vec!["x"], vec!["x", "x", "x"], vec!["Eggs", "eggs", "Eggs", "Toast", "eggs"]];
        for case in cases {
            let once = dedupe(&case);
            assert_eq!(dedupe(&once), once, "input: {case:?}");
        }
    }

    #[test]
    fn output_is_subsequence_of_first_occurrences() {
        let input = ["Ribeye", "Salmon", "Ribeye", "Tofu", "Salmon", "Ribeye"];
        let out = dedupe(&input);

        let mut cursor = 0;
        for item in &out {
            let pos = input[cursor..].iter().position(|x| *x == item.as_str()).map(|p| p + cursor);
            let first = input.iter().position(|x| *x == item.as_str());
            assert_eq!(pos, first, "{item} should appear at its first occurrence");
            cursor = pos.unwrap() + 1;
        }
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn comparison_is_exact() {
        assert_eq!(dedupe(&["Tea", "tea", "Tea "]), vec!["Tea", "tea", "Tea "]);
    }
}
