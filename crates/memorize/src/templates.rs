//! Question template pools.
//!
//! Each [`Category`] owns five templates. Every template declares how many
//! keywords it consumes, so a template is only ever filled with slots it can
//! use: a one-slot template given two keywords uses the first, and a
//! two-slot template is never offered a single keyword.

use crate::classify::Category;

/// Placeholder replaced by a keyword.
pub const PLACEHOLDER: &str = "{}";

/// Number of keywords a template consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arity {
    /// One keyword.
    One,
    /// Two keywords.
    Two,
}

impl Arity {
    /// Number of placeholders.
    pub const fn slots(self) -> usize {
        match self {
            Arity::One => 1,
            Arity::Two => 2,
        }
    }
}

/// Keywords available to fill a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slots<'a> {
    /// A single keyword.
    One(&'a str),
    /// Two keywords, in sentence order.
    Two(&'a str, &'a str),
}

impl<'a> Slots<'a> {
    /// Largest template arity these slots can satisfy.
    pub fn arity(&self) -> Arity {
        match self {
            Slots::One(_) => Arity::One,
            Slots::Two(..) => Arity::Two,
        }
    }

    fn get(&self, index: usize) -> Option<&'a str> {
        match (*self, index) {
            (Slots::One(first), 0) | (Slots::Two(first, _), 0) => Some(first),
            (Slots::Two(_, second), 1) => Some(second),
            _ => None,
        }
    }
}

/// A question pattern with positional `{}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    text: &'static str,
    arity: Arity,
}

impl Template {
    const fn one(text: &'static str) -> Self {
        Self {
            text,
            arity: Arity::One,
        }
    }

    const fn two(text: &'static str) -> Self {
        Self {
            text,
            arity: Arity::Two,
        }
    }

    /// The raw pattern.
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Declared number of placeholders.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Whether `slots` provide enough keywords for this template.
    pub fn accepts(&self, slots: &Slots<'_>) -> bool {
        self.arity <= slots.arity()
    }

    /// Substitute keywords for placeholders, in order.
    ///
    /// Returns `None` when the slots cannot satisfy the template.
    ///
    /// ```
    /// use memorize::classify::Category;
    /// use memorize::templates::Slots;
    ///
    /// let template = Category::Comparison.templates()[1];
    /// assert_eq!(
    ///     template.fill(&Slots::Two("mitosis", "meiosis")).as_deref(),
    ///     Some("What is the difference between mitosis and meiosis?")
    /// );
    /// assert_eq!(template.fill(&Slots::One("mitosis")), None);
    /// ```
    pub fn fill(&self, slots: &Slots<'_>) -> Option<String> {
        if !self.accepts(slots) {
            return None;
        }

        let mut question = String::with_capacity(self.text.len() + 16);
        let mut rest = self.text;
        let mut index = 0;
        while let Some(at) = rest.find(PLACEHOLDER) {
            question.push_str(&rest[..at]);
            question.push_str(slots.get(index)?);
            index += 1;
            rest = &rest[at + PLACEHOLDER.len()..];
        }
        question.push_str(rest);

        Some(question)
    }
}

static DEFINITION: [Template; 5] = [
    Template::one("Define the term {}."),
    Template::one("What is {}?"),
    Template::one("Explain the concept of {}."),
    Template::one("What does {} mean in this context?"),
    Template::one("Describe what {} refers to."),
];

static PROCESS: [Template; 5] = [
    Template::one("Explain the process of {}."),
    Template::one("How does {} work?"),
    Template::one("What are the steps involved in {}?"),
    Template::one("Describe how {} happens."),
    Template::one("Outline the procedure for {}."),
];

static COMPARISON: [Template; 5] = [
    Template::two("Compare and contrast {} and {}."),
    Template::two("What is the difference between {} and {}?"),
    Template::two("How are {} and {} related?"),
    Template::two("Distinguish between {} and {}."),
    Template::two("What similarities exist between {} and {}?"),
];

static CAUSE_EFFECT: [Template; 5] = [
    Template::one("What causes {}?"),
    Template::one("What are the effects of {}?"),
    Template::two("What is the relationship between {} and {}?"),
    Template::two("How does {} impact {}?"),
    Template::one("What happens when {}?"),
];

static APPLICATION: [Template; 5] = [
    Template::one("How is {} applied in real-world situations?"),
    Template::one("Give an example of {} in practice."),
    Template::one("How would you use {} to solve a problem?"),
    Template::one("What is a practical application of {}?"),
    Template::one("In what situation would {} be useful?"),
];

impl Category {
    /// The template pool for this category.
    pub fn templates(self) -> &'static [Template] {
        match self {
            Category::Definition => &DEFINITION,
            Category::Process => &PROCESS,
            Category::Comparison => &COMPARISON,
            Category::CauseEffect => &CAUSE_EFFECT,
            Category::Application => &APPLICATION,
        }
    }

    /// Templates of this category that `slots` can fill, in pool order.
    pub fn eligible_templates(self, slots: &Slots<'_>) -> Vec<&'static Template> {
        self.templates()
            .iter()
            .filter(|template| template.accepts(slots))
            .collect()
    }
}
