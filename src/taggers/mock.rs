/*!
 * Mock tagger for testing.
 *
 * Behaviors:
 * - `MockTagger::working()` - tags every token NOUN
 * - `MockTagger::with_tags(...)` - scripted per-token tags, NOUN fallback
 * - `MockTagger::failing()` - always fails with an error
 */

use rustc_hash::FxHashMap;

use crate::errors::TaggerError;
use crate::taggers::{PosTag, TaggedToken, Tagger};

/// Deterministic tagger for tests
#[derive(Debug)]
pub struct MockTagger {
    /// Scripted token -> tag assignments
    tags: FxHashMap<String, PosTag>,
    /// Tag for tokens not in the script
    fallback: PosTag,
    /// Whether every call should fail
    fail: bool,
}

impl MockTagger {
    /// Create a working mock that tags every token NOUN
    pub fn working() -> Self {
        Self {
            tags: FxHashMap::default(),
            fallback: PosTag::Noun,
            fail: false,
        }
    }

    /// Create a mock with scripted per-token tags
    pub fn with_tags(pairs: &[(&str, PosTag)]) -> Self {
        Self {
            tags: pairs
                .iter()
                .map(|(token, tag)| (token.to_string(), *tag))
                .collect(),
            fallback: PosTag::Noun,
            fail: false,
        }
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        Self {
            tags: FxHashMap::default(),
            fallback: PosTag::Noun,
            fail: true,
        }
    }
}

impl Tagger for MockTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, TaggerError> {
        if self.fail {
            return Err(TaggerError::TaggingFailed(
                "mock tagger configured to fail".to_string(),
            ));
        }

        Ok(tokens
            .iter()
            .map(|token| TaggedToken {
                token: token.clone(),
                tag: *self.tags.get(token).unwrap_or(&self.fallback),
            })
            .collect())
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
