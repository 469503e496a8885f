//! String utility functions for common text manipulation operations.
//!
//! Provides the naming helpers used to derive component and class names from
//! user supplied titles.

/// Capitalize the first letter of a word
///
/// Converts the first character to uppercase and leaves the rest unchanged.
/// Returns an empty string if the input is empty.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a title into words
///
/// Words are separated by any non-alphanumeric character, by a lower-case to
/// upper-case transition (`myBot` -> `my`, `Bot`) and before the last capital
/// of an acronym that is followed by a lower-case letter (`XMLParser` -> `XML`,
/// `Parser`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    for chunk in input.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            let boundary = i > 0 && c.is_uppercase() && {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower)
            };
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

/// Convert a title to camelCase
///
/// # Examples
/// ```ignore
/// assert_eq!(camel_case("My Search Extension"), "mySearchExtension");
/// assert_eq!(camel_case("weather-bot"), "weatherBot");
/// ```
pub fn camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 { lower } else { capitalize_word(&lower) }
        })
        .collect()
}
