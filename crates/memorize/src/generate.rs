//! Template-driven question synthesis.
//!
//! Each summarized sentence becomes at most one [`Flashcard`]: the sentence
//! is the answer, and the question comes from the template pool of the
//! sentence's [`Category`] filled with one or two of its keywords.

use crate::chooser::Chooser;
use crate::classify::{Category, classify};
use crate::keywords::extract_keywords;
use crate::templates::Slots;
use crate::types::Flashcard;

/// Maximum number of cards produced by [`generate`].
pub const MAX_CARDS: usize = 12;

/// Sentences with fewer words are skipped.
pub const MIN_WORDS: usize = 5;

/// Generate flashcards from sentences, in sentence order.
///
/// Sentences shorter than [`MIN_WORDS`] words or without keywords are
/// skipped. Generation stops after [`MAX_CARDS`] cards.
///
/// ```
/// use memorize::chooser::ScriptedChooser;
/// use memorize::generate;
///
/// let sentences = ["Osmosis is the movement of water across membranes."];
/// let cards = generate(&sentences, &mut ScriptedChooser::always(0));
///
/// assert_eq!(cards.len(), 1);
/// assert_eq!(cards[0].question, "Define the term osmosis.");
/// assert_eq!(cards[0].answer, sentences[0]);
/// ```
pub fn generate<S, C>(sentences: &[S], chooser: &mut C) -> Vec<Flashcard>
where
    S: AsRef<str>,
    C: Chooser + ?Sized,
{
    let mut cards = Vec::new();
    for sentence in sentences {
        if let Some(card) = card_for_sentence(sentence.as_ref(), chooser) {
            cards.push(card);
            if cards.len() >= MAX_CARDS {
                break;
            }
        }
    }
    cards
}

/// Build the flashcard for a single sentence, if it qualifies.
///
/// The chooser is consulted first for the keyword (only when there is more
/// than one candidate) and then for the template.
pub fn card_for_sentence<C>(sentence: &str, chooser: &mut C) -> Option<Flashcard>
where
    C: Chooser + ?Sized,
{
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < MIN_WORDS {
        return None;
    }

    let keywords = extract_keywords(words.iter().copied());
    let keyword = match keywords.as_slice() {
        [] => return None,
        [only] => only.as_str(),
        many => many[chooser.choose(many.len())].as_str(),
    };

    let (category, slots) = question_slots(classify(sentence), keyword, &keywords);
    let templates = category.eligible_templates(&slots);
    if templates.is_empty() {
        return None;
    }
    let template = templates[chooser.choose(templates.len())];
    let question = template.fill(&slots)?;

    Some(Flashcard::new(question, sentence))
}

/// Decide which keywords fill the question, and from which pool.
///
/// Comparisons and cause-effect questions take the first two keywords when
/// the sentence has them. A comparison with a single keyword becomes a
/// definition; a cause-effect question with a single keyword stays in its
/// pool and is limited to the one-slot templates.
fn question_slots<'a>(
    category: Category,
    keyword: &'a str,
    keywords: &'a [String],
) -> (Category, Slots<'a>) {
    match (category, keywords) {
        (Category::Comparison | Category::CauseEffect, [first, second, ..]) => {
            (category, Slots::Two(first.as_str(), second.as_str()))
        }
        (Category::Comparison, _) => (Category::Definition, Slots::One(keyword)),
        (category, _) => (category, Slots::One(keyword)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chooser::ScriptedChooser;

    #[test]
    fn test_short_sentences_are_skipped() {
        let mut chooser = ScriptedChooser::default();
        assert_eq!(card_for_sentence("It requires chlorophyll.", &mut chooser), None);
        assert!(chooser.requests().is_empty());
    }

    #[test]
    fn test_sentences_without_keywords_are_skipped() {
        let mut chooser = ScriptedChooser::default();
        assert_eq!(card_for_sentence("It is what it is.", &mut chooser), None);
        assert!(chooser.requests().is_empty());
    }

    #[test]
    fn test_single_keyword_skips_keyword_choice() {
        // Only "water" survives extraction.
        let mut chooser = ScriptedChooser::new([4]);
        let card = card_for_sentence("The cat is in the water.", &mut chooser).unwrap();

        assert_eq!(card.question, "Describe what water refers to.");
        assert_eq!(chooser.requests(), &[5]);
    }

    #[test]
    fn test_keyword_then_template_choice() {
        let sentence = "Photosynthesis is the process plants use to convert light into energy.";
        // keywords: photosynthesis, process, plants, convert, light, energy
        let mut chooser = ScriptedChooser::new([5, 1]);
        let card = card_for_sentence(sentence, &mut chooser).unwrap();

        assert_eq!(card.question, "What is energy?");
        assert_eq!(card.answer, sentence);
        assert_eq!(chooser.requests(), &[6, 5]);
    }

    #[test]
    fn test_comparison_uses_first_two_keywords() {
        let sentence = "Lions sprint faster than cheetahs over short distances.";
        let mut chooser = ScriptedChooser::new([3, 0]);
        let card = card_for_sentence(sentence, &mut chooser).unwrap();

        assert_eq!(card.question, "Compare and contrast lions and sprint.");
    }

    #[test]
    fn test_comparison_with_one_keyword_becomes_definition() {
        let sentence = "Cats run fast while dogs rest.";
        assert_eq!(classify(sentence), Category::Comparison);
        assert_eq!(extract_keywords(sentence.split_whitespace()), vec!["while"]);

        let mut chooser = ScriptedChooser::new([1]);
        let card = card_for_sentence(sentence, &mut chooser).unwrap();
        assert_eq!(card.question, "What is while?");
        assert_eq!(chooser.requests(), &[5]);
    }

    #[test]
    fn test_cause_effect_with_two_keywords() {
        let sentence = "Heavy rainfall causes erosion on steep hills.";
        let mut chooser = ScriptedChooser::new([0, 3]);
        let card = card_for_sentence(sentence, &mut chooser).unwrap();

        assert_eq!(card.question, "How does heavy impact rainfall?");
        assert_eq!(chooser.requests(), &[6, 5]);
    }

    #[test]
    fn test_cause_effect_with_one_keyword_uses_one_slot_templates() {
        let sentence = "It fell because of the rain.";
        assert_eq!(classify(sentence), Category::CauseEffect);

        for pick in 0..3 {
            let mut chooser = ScriptedChooser::new([pick]);
            let card = card_for_sentence(sentence, &mut chooser).unwrap();
            assert!(!card.question.contains("{}"), "{}", card.question);
            assert_eq!(chooser.requests(), &[3]);
        }

        let mut chooser = ScriptedChooser::new([2]);
        let card = card_for_sentence(sentence, &mut chooser).unwrap();
        assert_eq!(card.question, "What happens when because?");
    }

    #[test]
    fn test_long_sentence_asks_for_application() {
        let sentence = "Engineers apply calculus to model bridges so that every beam \
                        can carry heavy trucks across wide rivers safely";
        let mut chooser = ScriptedChooser::new([0, 3]);
        let card = card_for_sentence(sentence, &mut chooser).unwrap();

        assert_eq!(card.question, "What is a practical application of engineers?");
    }

    #[test]
    fn test_generate_stops_at_max_cards() {
        let sentences: Vec<String> = (0..20)
            .map(|i| format!("Sentence number {} mentions glaciers and volcanoes.", i))
            .collect();
        let cards = generate(&sentences, &mut ScriptedChooser::default());

        assert_eq!(cards.len(), MAX_CARDS);
        assert_eq!(cards[0].answer, sentences[0]);
        assert_eq!(cards[11].answer, sentences[11]);
    }

    #[test]
    fn test_generate_empty_input() {
        let sentences: [&str; 0] = [];
        assert!(generate(&sentences, &mut ScriptedChooser::default()).is_empty());
        assert!(generate(&[""], &mut ScriptedChooser::default()).is_empty());
    }
}
