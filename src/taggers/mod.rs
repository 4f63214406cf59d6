/*!
 * Tagger implementations for part-of-speech annotation.
 *
 * POS tagging is an external capability: the analysis core only consumes
 * the `Tagger` contract and never constructs or configures a tagger
 * itself. Shipped implementations:
 * - `lexicon`: self-contained English lexicon/suffix tagger (default)
 * - `mock`: deterministic scripted tagger for tests
 */

use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;

use anyhow::anyhow;

use crate::errors::TaggerError;

/// Universal part-of-speech categories.
///
/// This is the tag set emitted by the common tagging models for literary
/// prose; taggers map their native tags onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PosTag {
    // @returns: Conventional uppercase tag label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADJ" => Ok(Self::Adj),
            "ADP" => Ok(Self::Adp),
            "ADV" => Ok(Self::Adv),
            "AUX" => Ok(Self::Aux),
            "CCONJ" => Ok(Self::Cconj),
            "DET" => Ok(Self::Det),
            "INTJ" => Ok(Self::Intj),
            "NOUN" => Ok(Self::Noun),
            "NUM" => Ok(Self::Num),
            "PART" => Ok(Self::Part),
            "PRON" => Ok(Self::Pron),
            "PROPN" => Ok(Self::Propn),
            "PUNCT" => Ok(Self::Punct),
            "SCONJ" => Ok(Self::Sconj),
            "SYM" => Ok(Self::Sym),
            "VERB" => Ok(Self::Verb),
            "X" => Ok(Self::X),
            _ => Err(anyhow!("Invalid POS tag: {}", s)),
        }
    }
}

/// A token paired with its POS tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// The token text
    pub token: String,

    /// The grammatical category assigned by the tagger
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new(token: &str, tag: PosTag) -> Self {
        Self {
            token: token.to_string(),
            tag,
        }
    }
}

/// Common trait for all POS taggers
///
/// This trait defines the interface that all tagger implementations must
/// follow, allowing them to be injected interchangeably into the pipeline.
pub trait Tagger: Debug {
    /// Tag a token sequence
    ///
    /// # Arguments
    /// * `tokens` - The token sequence to annotate
    ///
    /// # Returns
    /// * `Result<Vec<TaggedToken>, TaggerError>` - One tagged token per input token, in order
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, TaggerError>;

    /// Identifier of the underlying model, for logs and reports
    fn model_name(&self) -> &str;
}

pub mod lexicon;
pub mod mock;
