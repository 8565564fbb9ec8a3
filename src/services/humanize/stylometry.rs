// Stylometric Injector
// Per-sentence filler phrases and punctuation variation

use crate::services::text_processor::split_sentences;
use rand::seq::SliceRandom;
use rand::Rng;

const FILLER_PROBABILITY: f64 = 0.3;
const ELLIPSIS_PROBABILITY: f64 = 0.1;

/// Split into sentences and, per sentence with fresh randomness: p=0.3 append
/// a comma plus a random filler phrase; for every sentence except the last,
/// p=0.1 terminate with `...`, otherwise `.`. The last sentence is left
/// unterminated for downstream stages. Sentences are rejoined with single
/// spaces.
pub fn inject_style<R: Rng + ?Sized>(text: &str, fillers: &[&str], rng: &mut R) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return String::new();
    }

    let last = sentences.len() - 1;
    let mut processed = Vec::with_capacity(sentences.len());

    for (index, sentence) in sentences.iter().enumerate() {
        let mut out = sentence.clone();

        if rng.gen_bool(FILLER_PROBABILITY) {
            if let Some(filler) = fillers.choose(rng) {
                out = format!("{}, {}", out, filler);
            }
        }

        if index < last {
            if rng.gen_bool(ELLIPSIS_PROBABILITY) {
                out.push_str("...");
            } else {
                out.push('.');
            }
        }

        processed.push(out);
    }

    processed.join(" ")
}
