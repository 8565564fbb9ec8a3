// Length Enforcer
// Pads output with expansion sentences until a minimum word count is met

use crate::services::text_processor::count_words;
use rand::seq::SliceRandom;
use rand::Rng;

/// Append random expansion sentences (space-separated) until the word count
/// reaches `min_words`. Returns the input unchanged when it already meets the
/// minimum or when the pool has no non-empty entry; since every kept pool
/// entry adds at least one word, the loop always terminates.
pub fn enforce_minimum_length<R: Rng + ?Sized>(
    text: &str,
    min_words: usize,
    expansions: &[&str],
    rng: &mut R,
) -> String {
    if count_words(text) >= min_words {
        return text.to_string();
    }

    let pool: Vec<&str> = expansions
        .iter()
        .copied()
        .filter(|s| !s.trim().is_empty())
        .collect();
    if pool.is_empty() {
        return text.to_string();
    }

    let mut result = text.to_string();
    while count_words(&result) < min_words {
        let Some(expansion) = pool.choose(rng) else {
            break;
        };
        result.push(' ');
        result.push_str(expansion);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::lexicon::EXPANSION_SENTENCES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sufficient_input_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = "word ".repeat(300);
        let text = text.trim();
        assert_eq!(
            enforce_minimum_length(text, 250, EXPANSION_SENTENCES, &mut rng),
            text
        );
    }

    #[test]
    fn test_single_word_reaches_minimum() {
        let mut rng = StdRng::seed_from_u64(2);
        let out = enforce_minimum_length("Hello", 250, EXPANSION_SENTENCES, &mut rng);
        assert!(count_words(&out) >= 250);
        assert!(out.starts_with("Hello "));
    }

    #[test]
    fn test_padding_drawn_from_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = enforce_minimum_length("Seed", 60, EXPANSION_SENTENCES, &mut rng);
        let mut residue = out.strip_prefix("Seed").unwrap().to_string();
        for sentence in EXPANSION_SENTENCES {
            residue = residue.replace(sentence, "");
        }
        assert!(residue.trim().is_empty(), "padding outside pool: {residue:?}");
    }

    #[test]
    fn test_idempotent_once_minimum_met() {
        let mut rng = StdRng::seed_from_u64(4);
        let once = enforce_minimum_length("Hello", 250, EXPANSION_SENTENCES, &mut rng);
        let twice = enforce_minimum_length(&once, 250, EXPANSION_SENTENCES, &mut rng);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_pool_returns_input() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(enforce_minimum_length("Hi", 250, &[], &mut rng), "Hi");
        assert_eq!(
            enforce_minimum_length("Hi", 250, &["", "   "], &mut rng),
            "Hi"
        );
    }
}
