#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a `KeywordRule` from a meal and a literal pattern.
macro_rules! keyword {
    ($meal:expr, $pat:literal) => {
        $crate::rules::KeywordRule { meal: $meal, pattern: $crate::regex!($pat) }
    };
}
