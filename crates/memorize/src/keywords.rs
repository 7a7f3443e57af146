//! Keyword extraction for question templates.

/// Common words never used as keywords, compared case-insensitively.
pub const STOPWORDS: [&str; 12] = [
    "the", "and", "that", "this", "with", "from", "their", "have", "for", "not", "are", "but",
];

/// Characters stripped from both ends of a word before it is considered.
pub const TRIMMED_PUNCTUATION: &[char] = &[
    '.', ',', '?', '!', '(', ')', '[', ']', '{', '}', '"', ':', ';',
];

/// Keywords must be longer than this many characters.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Normalize a single word into a keyword, if it qualifies.
///
/// The word is stripped of surrounding [`TRIMMED_PUNCTUATION`], then kept
/// only if it is longer than [`MIN_KEYWORD_LEN`] characters, is not a
/// stopword and is purely alphabetic. The result is lowercase.
///
/// ```
/// use memorize::keywords::keyword;
///
/// assert_eq!(keyword("(Photosynthesis)"), Some("photosynthesis".to_string()));
/// assert_eq!(keyword("their"), None);
/// assert_eq!(keyword("CO2-rich"), None);
/// ```
pub fn keyword(word: &str) -> Option<String> {
    let stripped = word.trim_matches(TRIMMED_PUNCTUATION);
    if stripped.chars().count() <= MIN_KEYWORD_LEN {
        return None;
    }

    let lowered = stripped.to_lowercase();
    if STOPWORDS.contains(&lowered.as_str()) {
        return None;
    }

    if !stripped.chars().all(char::is_alphabetic) {
        return None;
    }

    Some(lowered)
}

/// Extract keywords from whitespace-separated words, keeping their order.
///
/// Duplicates are kept, so a word repeated in a sentence is more likely to be
/// picked.
pub fn extract_keywords<'a, I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().filter_map(keyword).collect()
}
