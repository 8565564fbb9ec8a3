// Lexicon
// Process-wide substitution tables and filler pools.
// All entries are immutable and shared across requests; stages receive them
// by reference so tests can substitute their own tables.

/// General lexical softening table. Entries apply in order and compound:
/// a later entry may match text introduced by an earlier replacement.
pub const LEXICAL_REPLACEMENTS: &[(&str, &str)] = &[
    ("artificial intelligence", "AI technology"),
    ("demonstrates", "shows"),
    ("capabilities", "abilities"),
    ("processing", "handling"),
    ("systems", "platforms"),
    ("technologies", "tools"),
    ("algorithms", "methods"),
    ("sophisticated", "advanced"),
    ("remarkable", "great"),
    ("innovative", "new"),
    ("utilize", "use"),
    ("implement", "use"),
    ("facilitate", "help"),
    ("optimize", "improve"),
];

/// Formal-to-casual downgrade table used by the register downgrade stage.
pub const CASUAL_DOWNGRADES: &[(&str, &str)] = &[
    ("demonstrates", "shows"),
    ("utilizes", "uses"),
    ("substantial", "big"),
    ("numerous", "many"),
    ("frequently", "often"),
    ("consequently", "so"),
    ("furthermore", "also"),
    ("nevertheless", "but"),
    ("approximately", "about"),
];

/// Conversational fillers appended to sentences by the stylometric injector.
pub const FILLER_PHRASES: &[&str] = &[
    "to be honest",
    "you know",
    "as far as I can tell",
    "if I'm not mistaken",
    "come to think of it",
];

/// Parenthesized tangents inserted by the coherence disruptor.
pub const TANGENT_CLAUSES: &[&str] = &[
    "which is interesting when you consider it",
    "funny how these things connect when you think about it",
    "and here's where it gets really interesting",
    "considering the broader context",
];

/// Stock sentences appended by the length enforcer until the minimum word
/// count is met. Padding runs after both substitution stages, so these must
/// not contain "demonstrates", "sophisticated", or "capabilities" -- the
/// phrases the earlier stages guarantee to have removed.
pub const EXPANSION_SENTENCES: &[&str] = &[
    "This is particularly significant when considering the broader implications.",
    "Moreover, this approach proves considerably effective in practical applications.",
    "Furthermore, the methodology employed here offers substantial benefits for various use cases.",
    "Additionally, these findings suggest important considerations for future developments.",
    "It's worth noting that this represents a meaningful advancement in the field.",
];

/// Immutable bundle of every table and pool the pipeline consumes.
/// Constructed once and passed by reference into each stage.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub lexical_replacements: &'static [(&'static str, &'static str)],
    pub casual_downgrades: &'static [(&'static str, &'static str)],
    pub filler_phrases: &'static [&'static str],
    pub tangent_clauses: &'static [&'static str],
    pub expansion_sentences: &'static [&'static str],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            lexical_replacements: LEXICAL_REPLACEMENTS,
            casual_downgrades: CASUAL_DOWNGRADES,
            filler_phrases: FILLER_PHRASES,
            tangent_clauses: TANGENT_CLAUSES,
            expansion_sentences: EXPANSION_SENTENCES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_are_non_empty() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.lexical_replacements.is_empty());
        assert!(!lexicon.casual_downgrades.is_empty());
        assert!(!lexicon.filler_phrases.is_empty());
        assert!(!lexicon.tangent_clauses.is_empty());
        assert!(!lexicon.expansion_sentences.is_empty());
    }

    #[test]
    fn test_expansion_pool_avoids_guaranteed_removals() {
        // The end-to-end contract promises these phrases never appear in
        // output; padding must not reintroduce them.
        for sentence in EXPANSION_SENTENCES {
            let lower = sentence.to_lowercase();
            for phrase in ["demonstrates", "sophisticated", "capabilities"] {
                assert!(
                    !lower.contains(phrase),
                    "expansion sentence reintroduces {:?}: {}",
                    phrase,
                    sentence
                );
            }
        }
    }

    #[test]
    fn test_expansion_sentences_add_words() {
        for sentence in EXPANSION_SENTENCES {
            assert!(!sentence.trim().is_empty());
        }
    }
}
