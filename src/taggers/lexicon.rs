use rustc_hash::FxHashMap;

use crate::errors::TaggerError;
use crate::taggers::{PosTag, TaggedToken, Tagger};

// @module: Built-in English lexicon tagger

// Closed-class words carry their category outright; open-class words fall
// through to suffix heuristics, then to NOUN.
const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "some", "any", "no",
    "every", "each", "all", "both", "either", "neither", "another",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "my", "your", "his", "its", "our", "their", "mine", "yours",
    "hers", "ours", "theirs", "myself", "yourself", "himself", "herself",
    "itself", "ourselves", "themselves", "who", "whom", "whose", "which",
    "what", "something", "nothing", "anything", "everything", "someone",
    "nobody", "anybody", "everybody", "one",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "with", "from", "to", "into", "through",
    "over", "under", "between", "among", "against", "during", "without",
    "within", "upon", "about", "after", "before", "behind", "above", "below",
    "near", "toward", "towards", "across", "along", "around", "beyond",
    "beneath", "beside", "besides", "despite", "except", "per", "off",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

const SUBORDINATORS: &[&str] = &[
    "if", "because", "although", "though", "while", "when", "whenever",
    "since", "unless", "until", "whereas", "whether", "that", "as", "whereby",
];

const PARTICLES: &[&str] = &["not", "to"];

const COMMON_ADVERBS: &[&str] = &[
    "very", "never", "always", "often", "here", "there", "now", "then",
    "again", "too", "also", "just", "only", "quite", "rather", "soon",
    "still", "even", "perhaps", "almost", "already", "away", "once", "more",
    "most", "less", "least", "well", "how", "why", "where", "however",
];

const INTERJECTIONS: &[&str] = &["oh", "ah", "alas", "hush", "hey", "hurrah"];

const NUMERALS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "twenty", "thirty", "forty", "fifty",
    "hundred", "thousand", "million",
];

// Suffix heuristics for open-class words, checked in order.
const ADVERB_SUFFIXES: &[&str] = &["ly"];
const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ise", "ize"];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ish", "less", "ant", "ent", "ic",
    "al",
];

/// Self-contained English POS tagger.
///
/// A closed-class lexicon resolves function words deterministically; the
/// remainder is guessed from derivational suffixes with NOUN as the
/// fallback. Coarse next to a trained model, but dependency-free and
/// adequate for pattern-frequency work over long texts.
#[derive(Debug)]
pub struct LexiconTagger {
    model: String,
    lexicon: FxHashMap<&'static str, PosTag>,
}

impl LexiconTagger {
    /// Build a tagger for the given 2-letter language code.
    ///
    /// Only English is available; other languages need an external tagger
    /// plugged in behind the `Tagger` trait.
    pub fn new(language: &str) -> Result<Self, TaggerError> {
        if language != "en" {
            return Err(TaggerError::UnsupportedLanguage(language.to_string()));
        }

        let mut lexicon = FxHashMap::default();
        // Insertion order resolves overlaps: later classes win, so "to"
        // ends up PART and "that" SCONJ, matching their dominant readings
        // in narrative prose.
        for (words, tag) in [
            (NUMERALS, PosTag::Num),
            (INTERJECTIONS, PosTag::Intj),
            (COMMON_ADVERBS, PosTag::Adv),
            (DETERMINERS, PosTag::Det),
            (PRONOUNS, PosTag::Pron),
            (ADPOSITIONS, PosTag::Adp),
            (AUXILIARIES, PosTag::Aux),
            (COORDINATORS, PosTag::Cconj),
            (SUBORDINATORS, PosTag::Sconj),
            (PARTICLES, PosTag::Part),
        ] {
            for word in words {
                lexicon.insert(*word, tag);
            }
        }

        Ok(Self {
            model: format!("{}_lexicon_sm", language),
            lexicon,
        })
    }

    fn tag_word(&self, token: &str) -> PosTag {
        if let Some(tag) = self.lexicon.get(token) {
            return *tag;
        }

        // Tokens reach us lowercased in the normal pipeline; a leading
        // uppercase letter only appears when callers tag raw words.
        if token.chars().next().is_some_and(|c| c.is_uppercase()) {
            return PosTag::Propn;
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::Num;
        }

        for suffix in ADVERB_SUFFIXES {
            if token.len() > suffix.len() + 2 && token.ends_with(suffix) {
                return PosTag::Adv;
            }
        }
        for suffix in VERB_SUFFIXES {
            if token.len() > suffix.len() + 2 && token.ends_with(suffix) {
                return PosTag::Verb;
            }
        }
        for suffix in ADJECTIVE_SUFFIXES {
            if token.len() > suffix.len() + 2 && token.ends_with(suffix) {
                return PosTag::Adj;
            }
        }

        PosTag::Noun
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, TaggerError> {
        Ok(tokens
            .iter()
            .map(|token| TaggedToken {
                token: token.clone(),
                tag: self.tag_word(token),
            })
            .collect())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
