//! Sentence segmentation and frequency-based extractive summarization.
//!
//! Text is split into sentences, every sentence is scored by the summed
//! corpus frequency of its words, and the highest scoring share is returned
//! in its original order.
//!
//! # Example
//!
//! ```
//! use memorize::summarize::{split_sentences, summarize};
//!
//! let text = "Cells divide. Cells grow! Do cells die? Yes.";
//! assert_eq!(
//!     split_sentences(text),
//!     vec!["Cells divide.", "Cells grow!", "Do cells die?", "Yes."]
//! );
//!
//! // Fewer than four sentences are always kept in full.
//! let summary = summarize("One fact. Another fact.");
//! assert_eq!(summary, vec!["One fact.", "Another fact."]);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Share of the sentences kept by [`summarize`].
pub const SUMMARY_RATIO: f64 = 0.3;

/// Minimum number of sentences kept by [`summarize`] when available.
pub const MIN_SUMMARY_SENTENCES: usize = 3;

// A sentence ends at `.`, `!` or `?` followed by whitespace. The delimiter is
// one byte, so the split point is `start + 1` of every match.
//
// regex-lite's `\s` is ASCII only; the class lists every Unicode White_Space
// code point so boundaries agree with `split_whitespace`.
const WHITESPACE_CLASS: &str =
    "[\t\n\x0B\x0C\r \u{85}\u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}]";

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[.!?]{}+", WHITESPACE_CLASS)).unwrap());

/// Split text into sentences.
///
/// The terminating punctuation stays with its sentence and the whitespace
/// run after it is dropped. Empty text yields a single empty sentence, and
/// trailing whitespace after a final delimiter yields a trailing empty one.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }

    sentences.push(&text[start..]);
    sentences
}

fn tokens(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence.split_whitespace().map(str::to_lowercase)
}

/// Occurrence counts of lowercase whitespace tokens across a text.
///
/// Punctuation is not stripped, so `cells` and `cells.` are distinct words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
}

impl WordFrequencies {
    /// Count every token of every sentence.
    pub fn from_sentences<S: AsRef<str>>(sentences: &[S]) -> Self {
        let mut counts = HashMap::new();
        for sentence in sentences {
            for token in tokens(sentence.as_ref()) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Frequency of a lowercase token, zero when unseen.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no tokens were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Per-sentence relevance scores, indexed by sentence position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceScores {
    scores: Vec<usize>,
}

impl SentenceScores {
    /// Score each sentence as the sum of its tokens' frequencies.
    ///
    /// Repeated tokens contribute once per occurrence. A sentence without
    /// tokens scores zero.
    pub fn compute<S: AsRef<str>>(sentences: &[S], frequencies: &WordFrequencies) -> Self {
        let scores = sentences
            .iter()
            .map(|sentence| {
                tokens(sentence.as_ref())
                    .map(|token| frequencies.get(&token))
                    .sum()
            })
            .collect();
        Self { scores }
    }

    /// Score of the sentence at `index`.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.scores.get(index).copied()
    }

    /// Number of scored sentences.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no sentences were scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Indices of the `n` best sentences, in ascending order.
    ///
    /// Sentences with equal scores are ranked by position, earlier first.
    pub fn top(&self, n: usize) -> Vec<usize> {
        let mut ranked: Vec<usize> = (0..self.scores.len()).collect();
        ranked.sort_by(|&a, &b| self.scores[b].cmp(&self.scores[a]));
        ranked.truncate(n);
        ranked.sort_unstable();
        ranked
    }
}

/// Number of sentences [`summarize`] keeps out of `sentence_count`.
///
/// This is `floor(sentence_count * 0.3)`, raised to at least three. It may
/// exceed `sentence_count`, in which case every sentence is kept.
pub fn summary_size(sentence_count: usize) -> usize {
    ((sentence_count as f64 * SUMMARY_RATIO) as usize).max(MIN_SUMMARY_SENTENCES)
}

/// Select the most representative sentences of `text`, in original order.
pub fn summarize(text: &str) -> Vec<String> {
    let sentences = split_sentences(text);
    let frequencies = WordFrequencies::from_sentences(&sentences);
    let scores = SentenceScores::compute(&sentences, &frequencies);

    scores
        .top(summary_size(sentences.len()))
        .into_iter()
        .map(|index| sentences[index].to_string())
        .collect()
}
