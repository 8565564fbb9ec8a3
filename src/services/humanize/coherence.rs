// Coherence Disruptor
// Tangent clauses and ellipses for burstiness (paranoid mode)

use crate::services::text_processor::split_sentences;
use rand::seq::SliceRandom;
use rand::Rng;

const TANGENT_PROBABILITY: f64 = 0.15;
const ELLIPSIS_PROBABILITY: f64 = 0.1;

/// Split into sentences and, per sentence with independent randomness:
/// p=0.15 append a parenthesized tangent clause; p=0.1 append an ellipsis.
/// Sentences are rejoined with ". " and a single trailing period is added.
/// A sentence that already received an ellipsis therefore ends up with
/// doubled terminal punctuation; that is accepted output, not corrected.
pub fn disrupt<R: Rng + ?Sized>(text: &str, tangents: &[&str], rng: &mut R) -> String {
    let sentences = split_sentences(text);
    let mut processed = Vec::with_capacity(sentences.len());

    for sentence in &sentences {
        let mut out = sentence.clone();

        if rng.gen_bool(TANGENT_PROBABILITY) {
            if let Some(tangent) = tangents.choose(rng) {
                out = format!("{} ({})", out, tangent);
            }
        }

        if rng.gen_bool(ELLIPSIS_PROBABILITY) {
            out.push_str("...");
        }

        processed.push(out);
    }

    format!("{}.", processed.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::lexicon::TANGENT_CLAUSES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_output_ends_with_period() {
        let mut rng = StdRng::seed_from_u64(5);
        let out = disrupt("One thing. Another thing.", TANGENT_CLAUSES, &mut rng);
        assert!(out.ends_with('.'));
    }

    #[test]
    fn test_tangents_come_from_pool() {
        let mut rng = StdRng::seed_from_u64(77);
        let text = "Short sentence here. ".repeat(100);
        let out = disrupt(&text, TANGENT_CLAUSES, &mut rng);

        let mut residue = out.clone();
        for tangent in TANGENT_CLAUSES {
            residue = residue.replace(&format!("({})", tangent), "");
        }
        assert!(
            !residue.contains('('),
            "parenthesized text not drawn from the tangent pool"
        );
    }

    #[test]
    fn test_tangent_frequency_roughly_matches_probability() {
        let mut rng = StdRng::seed_from_u64(31);
        let text = "Short sentence here. ".repeat(500);
        let out = disrupt(&text, TANGENT_CLAUSES, &mut rng);
        let hits = out.matches('(').count();
        let rate = hits as f64 / 500.0;
        assert!(rate > 0.08 && rate < 0.25, "observed tangent rate {rate}");
    }

    #[test]
    fn test_doubled_punctuation_is_possible() {
        // An ellipsis sentence followed by the ". " join yields "... .".
        let text = "First sentence words. ".repeat(200);
        let mut rng = StdRng::seed_from_u64(8);
        let out = disrupt(&text, TANGENT_CLAUSES, &mut rng);
        assert!(out.contains("... "));
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let text = "One. Two. Three. Four. Five.";
        let a = disrupt(text, TANGENT_CLAUSES, &mut StdRng::seed_from_u64(12));
        let b = disrupt(text, TANGENT_CLAUSES, &mut StdRng::seed_from_u64(12));
        assert_eq!(a, b);
    }
}
