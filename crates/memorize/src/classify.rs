//! Question categories and the ordered rules that assign them.
//!
//! Rules in [`CLASSIFICATION_RULES`] are evaluated top to bottom and the
//! first match wins; a sentence matching none of them falls back to
//! [`DEFAULT_CATEGORY`]. The order is part of the contract: a sentence such
//! as "The method is simple" is a definition, not a process.

use serde::{Deserialize, Serialize};

/// Kind of question asked about a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// "What is X?"
    Definition,
    /// "How does X work?"
    Process,
    /// "Compare X and Y."
    Comparison,
    /// "What causes X?"
    CauseEffect,
    /// "How is X applied?"
    Application,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Definition,
        Category::Process,
        Category::Comparison,
        Category::CauseEffect,
        Category::Application,
    ];
}

/// Category used when no rule matches.
pub const DEFAULT_CATEGORY: Category = Category::Definition;

/// Lowercased view of a sentence that rules are tested against.
#[derive(Debug, Clone)]
pub struct Probe {
    lowered: String,
    word_count: usize,
}

impl Probe {
    /// Prepare a sentence for classification.
    pub fn new(sentence: &str) -> Self {
        Self {
            lowered: sentence.to_lowercase(),
            word_count: sentence.split_whitespace().count(),
        }
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    fn contains_any(&self, cues: &[&str]) -> bool {
        cues.iter().any(|cue| self.lowered.contains(cue))
    }
}

#[derive(Debug, Clone, Copy)]
enum Test {
    ContainsAny(&'static [&'static str]),
    MoreWordsThan(usize),
}

/// A predicate over a sentence paired with the category it selects.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    category: Category,
    test: Test,
}

impl Rule {
    /// The category this rule assigns.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether the sentence behind `probe` satisfies this rule.
    pub fn matches(&self, probe: &Probe) -> bool {
        match self.test {
            Test::ContainsAny(cues) => probe.contains_any(cues),
            Test::MoreWordsThan(limit) => probe.word_count > limit,
        }
    }
}

/// Sentences longer than this many words ask for an application.
pub const APPLICATION_MIN_WORDS: usize = 15;

/// Classification rules in priority order.
pub const CLASSIFICATION_RULES: [Rule; 5] = [
    Rule {
        category: Category::Definition,
        test: Test::ContainsAny(&[" is ", " are ", " refers to "]),
    },
    Rule {
        category: Category::Process,
        test: Test::ContainsAny(&["process", "procedure", "steps", "method"]),
    },
    Rule {
        category: Category::Comparison,
        test: Test::ContainsAny(&[" than ", " versus ", " compared to ", " while "]),
    },
    Rule {
        category: Category::CauseEffect,
        test: Test::ContainsAny(&[" because ", " causes ", " results in ", " leads to "]),
    },
    Rule {
        category: Category::Application,
        test: Test::MoreWordsThan(APPLICATION_MIN_WORDS),
    },
];

/// Classify a prepared sentence.
pub fn classify_probe(probe: &Probe) -> Category {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(probe))
        .map(Rule::category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Classify a sentence.
///
/// ```
/// use memorize::classify::{classify, Category};
///
/// assert_eq!(classify("Osmosis is passive transport."), Category::Definition);
/// assert_eq!(classify("Rain falls because clouds cool."), Category::CauseEffect);
/// ```
pub fn classify(sentence: &str) -> Category {
    classify_probe(&Probe::new(sentence))
}
