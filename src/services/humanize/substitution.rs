// Substitution Stages
// Lexical softening and formal-to-casual register downgrade

use rand::Rng;
use regex::Regex;

/// Probability of merging a sentence boundary with a casual connector.
const CONNECTOR_PROBABILITY: f64 = 0.2;

/// Replace every case-insensitive occurrence of each source phrase with its
/// replacement, in table order. Replacements compound: a later entry scans
/// the already-modified text. Matches are not anchored to word boundaries,
/// so substrings inside larger words are replaced too (kept for parity with
/// the legacy behavior).
pub fn substitute(text: &str, table: &[(&str, &str)]) -> String {
    let mut result = text.to_string();
    for (source, replacement) in table {
        let pattern = Regex::new(&format!("(?i){}", regex::escape(source))).unwrap();
        result = pattern.replace_all(&result, *replacement).to_string();
    }
    result
}

/// Register downgrade: apply the casual table, then stochastically rewrite
/// "period, space, uppercase letter" boundaries to "period, space, 'And ',
/// lowercased letter".
pub fn downgrade<R: Rng + ?Sized>(
    text: &str,
    table: &[(&str, &str)],
    rng: &mut R,
) -> String {
    let result = substitute(text, table);

    let boundary = Regex::new(r"\. ([A-Z])").unwrap();
    boundary
        .replace_all(&result, |caps: &regex::Captures| {
            if rng.gen_bool(CONNECTOR_PROBABILITY) {
                format!(". And {}", caps[1].to_lowercase())
            } else {
                caps[0].to_string()
            }
        })
        .to_string()
}
