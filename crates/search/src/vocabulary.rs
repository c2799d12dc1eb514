//! Closed vocabularies used by query parsing, spelling correction and synonym
//! expansion.
//!
//! Order matters: extracted categories and dietary filters are reported in the
//! order they are declared here, and intent groups are listed in precedence
//! order.

use crate::query::{LocationIntent, TimeIntent};
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Category identifiers with the keywords that select them.
pub(crate) const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("produce", &[
        "produce", "vegetable", "vegetables", "fruit", "fruits", "apple", "apples", "banana",
        "bananas", "tomato", "tomatoes", "potato", "potatoes", "carrot", "carrots", "lettuce",
        "salad", "greens", "berries", "onion", "onions",
    ]),
    ("bakery", &[
        "bakery", "bread", "bagel", "bagels", "pastry", "pastries", "cake", "cakes", "croissant",
        "croissants", "muffin", "muffins", "baked",
    ]),
    ("dairy", &["dairy", "milk", "cheese", "yogurt", "yoghurt", "butter", "eggs", "cream"]),
    ("prepared", &[
        "prepared", "meal", "meals", "soup", "leftover", "leftovers", "cooked", "sandwich",
        "sandwiches", "pizza", "curry", "casserole",
    ]),
    ("pantry", &[
        "pantry", "rice", "pasta", "canned", "cereal", "beans", "flour", "lentils", "oats",
        "noodles", "sauce",
    ]),
    ("beverages", &["beverages", "drinks", "juice", "coffee", "tea", "soda", "water"]),
    ("frozen", &["frozen", "ice-cream", "icecream"]),
    ("snacks", &["snacks", "snack", "chips", "cookies", "chocolate", "candy", "crackers", "nuts"]),
];

/// Dietary filters with their single-token spellings.
pub(crate) const DIETARY_KEYWORDS: &[(&str, &[&str])] = &[
    ("vegan", &["vegan"]),
    ("vegetarian", &["vegetarian"]),
    ("gluten-free", &["gluten-free", "glutenfree"]),
    ("dairy-free", &["dairy-free", "dairyfree", "lactose-free"]),
    ("nut-free", &["nut-free", "nutfree"]),
    ("halal", &["halal"]),
    ("kosher", &["kosher"]),
    ("organic", &["organic"]),
];

/// Two-token dietary phrases; both tokens are consumed by the match.
pub(crate) const DIETARY_PHRASES: &[(&str, &str, &str)] = &[
    ("gluten", "free", "gluten-free"),
    ("dairy", "free", "dairy-free"),
    ("lactose", "free", "dairy-free"),
    ("nut", "free", "nut-free"),
];

/// Location intent phrases, highest precedence first.
pub(crate) const LOCATION_INTENTS: &[(LocationIntent, &[&str])] = &[
    (LocationIntent::WalkingDistance, &["walking distance", "within walking", "walkable", "walk"]),
    (LocationIntent::Nearby, &["near me", "nearby", "close by", "close to me", "around me", "around here", "near"]),
    (LocationIntent::Delivery, &["delivery", "deliver", "delivered", "drop off", "dropoff"]),
    (LocationIntent::SpecificArea, &["downtown", "uptown", "neighborhood", "neighbourhood", "district", "in the area"]),
];

/// Time intent phrases, highest precedence first.
pub(crate) const TIME_INTENTS: &[(TimeIntent, &[&str])] = &[
    (TimeIntent::Now, &["right now", "available now", "now", "asap", "immediately"]),
    (TimeIntent::Today, &["today", "tonight", "tonite", "this evening", "this afternoon"]),
    (TimeIntent::Tomorrow, &["tomorrow"]),
    (TimeIntent::Weekend, &["this weekend", "weekend", "saturday", "sunday"]),
];

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "for", "in", "on", "at", "to", "of", "with", "from", "by",
    "some", "any", "i", "im", "me", "my", "we", "us", "our", "want", "need", "looking", "find",
    "get", "is", "are", "there", "please", "this", "that",
];

/// Descriptive words that are valid spellings without selecting a category.
const COMMON_FOOD_WORDS: &[&str] = &[
    "food", "fresh", "homemade", "local", "free", "whole", "ripe", "raw", "box", "bag", "surplus",
    "groceries", "grocery", "meat", "chicken", "fish", "beef", "tofu", "spinach", "cucumber",
    "pepper", "peppers", "corn", "orange", "oranges", "lemon", "lemons", "herbs", "garlic",
    "mushrooms", "dessert", "breakfast", "lunch", "dinner", "baby", "kids", "spicy", "sweet",
    "veggie", "veggies", "plant-based", "takeout", "sweets",
];

/// Static synonym dictionary; expansion adds the listed terms.
pub(crate) const SYNONYMS: &[(&str, &[&str])] = &[
    ("veggie", &["vegetarian"]),
    ("veggies", &["vegetables"]),
    ("plant-based", &["vegan"]),
    ("gf", &["gluten-free"]),
    ("lactose-free", &["dairy-free"]),
    ("produce", &["vegetables", "fruit"]),
    ("leftovers", &["leftover", "meal"]),
    ("takeout", &["meal"]),
    ("sweets", &["snacks", "candy"]),
    ("groceries", &["pantry", "food"]),
    ("soda", &["drinks"]),
    ("yoghurt", &["yogurt"]),
];

/// Words that carry only stop-word or intent meaning.
pub(crate) static NON_CONTENT_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let intent_words = LOCATION_INTENTS
        .iter()
        .flat_map(|(_, phrases)| phrases.iter())
        .chain(TIME_INTENTS.iter().flat_map(|(_, phrases)| phrases.iter()))
        .flat_map(|phrase| phrase.split(' '));

    STOP_WORDS.iter().copied().chain(intent_words).collect()
});

/// Intent phrases of a single word long enough to be a correction target.
/// Shorter ones ("now", "near") sit too close to unrelated words.
const MIN_INTENT_CORRECTION_LEN: usize = 5;

/// Every correctly spelled word, sorted so that ties resolve lexicographically.
pub(crate) static SPELLING_VOCABULARY: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    let intent_words = LOCATION_INTENTS
        .iter()
        .flat_map(|(_, phrases)| phrases.iter())
        .chain(TIME_INTENTS.iter().flat_map(|(_, phrases)| phrases.iter()))
        .filter(|phrase| !phrase.contains(' ') && phrase.len() >= MIN_INTENT_CORRECTION_LEN);

    CATEGORY_KEYWORDS
        .iter()
        .flat_map(|(category, keywords)| std::iter::once(category).chain(keywords.iter()))
        .chain(
            DIETARY_KEYWORDS
                .iter()
                .flat_map(|(filter, keywords)| std::iter::once(filter).chain(keywords.iter())),
        )
        .chain(DIETARY_PHRASES.iter().flat_map(|(first, second, _)| [first, second]))
        .chain(COMMON_FOOD_WORDS.iter())
        .chain(SYNONYMS.iter().flat_map(|(word, expansions)| std::iter::once(word).chain(expansions.iter())))
        .chain(intent_words)
        .copied()
        .filter(|word| word.len() > 2)
        .collect()
});

pub(crate) static SYNONYM_MAP: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| SYNONYMS.iter().copied().collect());

/// Returns true for stop words and intent-only words.
#[inline]
pub(crate) fn is_non_content(word: &str) -> bool {
    NON_CONTENT_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_words_are_non_content() {
        for word in ["near", "me", "today", "tomorrow", "weekend", "delivery", "the"] {
            assert!(is_non_content(word), "{word}");
        }
        assert!(!is_non_content("bread"));
    }

    #[test]
    fn test_vocabulary_contains_keywords_and_filters() {
        for word in ["tomato", "produce", "gluten-free", "vegan", "fresh"] {
            assert!(SPELLING_VOCABULARY.contains(word), "{word}");
        }
    }

    #[test]
    fn test_vocabulary_contains_single_word_intents() {
        for word in ["tomorrow", "tonight", "nearby", "delivery", "weekend"] {
            assert!(SPELLING_VOCABULARY.contains(word), "{word}");
        }
        for word in ["now", "near", "walk", "right"] {
            assert!(!SPELLING_VOCABULARY.contains(word), "{word}");
        }
    }

    #[test]
    fn test_category_keywords_are_unique() {
        let mut seen = HashSet::new();
        for (_, keywords) in CATEGORY_KEYWORDS {
            for keyword in *keywords {
                assert!(seen.insert(*keyword), "duplicate keyword {keyword}");
            }
        }
    }

    #[test]
    fn test_synonym_lookup() {
        assert_eq!(SYNONYM_MAP.get("veggie").copied(), Some(&["vegetarian"][..]));
    }
}
