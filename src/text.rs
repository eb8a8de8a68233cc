//! Whitespace cleaning and name normalization

/// Trim and collapse internal whitespace runs to a single space.
///
/// ```rust
/// use course_roster::text::clean;
///
/// assert_eq!(clean("  john \t  smith "), "john smith");
/// ```
#[must_use]
pub fn clean(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Capitalize the first letter of each word and lower-case the rest.
///
/// Words are whitespace separated; the result is joined with single spaces.
///
/// ```rust
/// use course_roster::text::capitalize_words;
///
/// assert_eq!(capitalize_words("intro  TO cs"), "Intro To Cs");
/// ```
#[must_use]
pub fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
