// Humanization Pipeline
// Fixed linear stage sequence with per-stage enable predicates

use crate::models::{
    HumanizeRequest, HumanizeResult, DEFAULT_MIN_WORDS, MAX_TEXT_LENGTH,
};
use crate::services::lexicon::Lexicon;
use crate::services::oracle::OracleClient;
use crate::services::text_processor::count_words;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum HumanizeError {
    /// Rejected at the boundary before any stage runs.
    #[error("{0}")]
    InvalidInput(String),
    /// Generic processing failure; detail is logged, never surfaced.
    #[error("Failed to humanize text")]
    ProcessingFailed,
}

/// One self-contained transformation within the pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    LexicalSubstitution,
    Paraphrase,
    StylometricInjection,
    RegisterDowngrade,
    CoherenceDisruption,
    LengthEnforcement,
}

/// Execution order. `pipeline_type` does not reorder or gate stages; only
/// the two request toggles do.
pub const STAGE_ORDER: [Stage; 6] = [
    Stage::LexicalSubstitution,
    Stage::Paraphrase,
    Stage::StylometricInjection,
    Stage::RegisterDowngrade,
    Stage::CoherenceDisruption,
    Stage::LengthEnforcement,
];

impl Stage {
    pub fn enabled(&self, request: &HumanizeRequest) -> bool {
        match self {
            Stage::RegisterDowngrade => request.writehuman_mode,
            Stage::CoherenceDisruption => request.paranoid_mode,
            _ => true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::LexicalSubstitution => "lexical_substitution",
            Stage::Paraphrase => "paraphrase",
            Stage::StylometricInjection => "stylometric_injection",
            Stage::RegisterDowngrade => "register_downgrade",
            Stage::CoherenceDisruption => "coherence_disruption",
            Stage::LengthEnforcement => "length_enforcement",
        }
    }
}

/// Pipeline orchestrator. Holds the oracle client and the read-only lexicon;
/// everything else is per-request.
pub struct Humanizer {
    oracle: OracleClient,
    lexicon: Lexicon,
    min_words: usize,
}

impl Default for Humanizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Humanizer {
    pub fn new() -> Self {
        Self::with_oracle(OracleClient::new())
    }

    pub fn with_oracle(oracle: OracleClient) -> Self {
        Self {
            oracle,
            lexicon: Lexicon::default(),
            min_words: DEFAULT_MIN_WORDS,
        }
    }

    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Boundary validation: non-empty after trimming, at most
    /// [`MAX_TEXT_LENGTH`] characters. Runs before any stage.
    pub fn validate(text: &str) -> Result<(), HumanizeError> {
        if text.trim().is_empty() {
            return Err(HumanizeError::InvalidInput("Text is required".to_string()));
        }
        if text.chars().count() > MAX_TEXT_LENGTH {
            return Err(HumanizeError::InvalidInput(format!(
                "Text too long (max {} characters)",
                MAX_TEXT_LENGTH
            )));
        }
        Ok(())
    }

    /// Run the full pipeline with ambient randomness.
    pub async fn humanize(
        &self,
        request: &HumanizeRequest,
    ) -> Result<HumanizeResult, HumanizeError> {
        let mut rng = StdRng::from_entropy();
        self.humanize_with_rng(request, &mut rng).await
    }

    /// Run the full pipeline with a caller-supplied random source, so tests
    /// can seed the stochastic stages.
    pub async fn humanize_with_rng<R: Rng>(
        &self,
        request: &HumanizeRequest,
        rng: &mut R,
    ) -> Result<HumanizeResult, HumanizeError> {
        Self::validate(&request.text)?;

        let start = Instant::now();
        info!(
            "[PIPELINE] start pipeline_type={} education_level={} paranoid={} writehuman={} chars={}",
            request.pipeline_type,
            request.education_level,
            request.paranoid_mode,
            request.writehuman_mode,
            request.text.chars().count()
        );

        let mut text = request.text.clone();
        for stage in STAGE_ORDER {
            if !stage.enabled(request) {
                debug!("[PIPELINE] skip stage={}", stage.name());
                continue;
            }
            text = self.run_stage(stage, &text, request, rng).await;
            debug!("[PIPELINE] done stage={} chars={}", stage.name(), text.len());
        }

        let processing_time_ms = start.elapsed().as_millis() as i64;
        let word_count = count_words(&text) as i32;
        info!(
            "[PIPELINE] complete words={} elapsed_ms={}",
            word_count, processing_time_ms
        );

        Ok(HumanizeResult {
            humanized_text: text,
            original_text: request.text.clone(),
            word_count,
            processing_time_ms,
            meaning_preserved: true,
            pipeline_type: request.pipeline_type,
            education_level: request.education_level,
        })
    }

    async fn run_stage<R: Rng>(
        &self,
        stage: Stage,
        text: &str,
        request: &HumanizeRequest,
        rng: &mut R,
    ) -> String {
        match stage {
            Stage::LexicalSubstitution => {
                super::substitution::substitute(text, self.lexicon.lexical_replacements)
            }
            Stage::Paraphrase => {
                self.oracle
                    .paraphrase_or_identity(text, request.education_level)
                    .await
            }
            Stage::StylometricInjection => {
                super::stylometry::inject_style(text, self.lexicon.filler_phrases, rng)
            }
            Stage::RegisterDowngrade => {
                super::substitution::downgrade(text, self.lexicon.casual_downgrades, rng)
            }
            Stage::CoherenceDisruption => {
                super::coherence::disrupt(text, self.lexicon.tangent_clauses, rng)
            }
            Stage::LengthEnforcement => super::length::enforce_minimum_length(
                text,
                self.min_words,
                self.lexicon.expansion_sentences,
                rng,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PipelineType;

    fn offline_humanizer() -> Humanizer {
        // No API key configured, so the paraphrase stage fails fast and
        // degrades to identity without touching the network.
        Humanizer::with_oracle(OracleClient::with_base_url("http://127.0.0.1:9"))
    }

    #[test]
    fn test_validate_rejects_empty_and_whitespace() {
        assert!(matches!(
            Humanizer::validate(""),
            Err(HumanizeError::InvalidInput(_))
        ));
        assert!(matches!(
            Humanizer::validate("   \n\t "),
            Err(HumanizeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_length_boundary() {
        let exactly = "a".repeat(MAX_TEXT_LENGTH);
        assert!(Humanizer::validate(&exactly).is_ok());

        let over = "a".repeat(MAX_TEXT_LENGTH + 1);
        let err = Humanizer::validate(&over).unwrap_err();
        assert!(err.to_string().contains("5000"));
    }

    #[test]
    fn test_stage_toggles() {
        let mut request = HumanizeRequest::new("x");
        assert!(Stage::RegisterDowngrade.enabled(&request));
        assert!(Stage::CoherenceDisruption.enabled(&request));

        request.writehuman_mode = false;
        request.paranoid_mode = false;
        assert!(!Stage::RegisterDowngrade.enabled(&request));
        assert!(!Stage::CoherenceDisruption.enabled(&request));
        assert!(Stage::LexicalSubstitution.enabled(&request));
        assert!(Stage::LengthEnforcement.enabled(&request));
    }

    #[tokio::test]
    async fn test_end_to_end_replaces_source_phrases() {
        let humanizer = offline_humanizer();
        let request = HumanizeRequest::new("AI technology demonstrates sophisticated capabilities.");
        let mut rng = StdRng::seed_from_u64(7);
        let result = humanizer.humanize_with_rng(&request, &mut rng).await.unwrap();

        let lower = result.humanized_text.to_lowercase();
        assert!(!lower.contains("demonstrates"));
        assert!(!lower.contains("sophisticated"));
        assert!(!lower.contains("capabilities"));
        assert!(result.word_count >= 250);
        assert_eq!(
            result.original_text,
            "AI technology demonstrates sophisticated capabilities."
        );
        assert!(result.meaning_preserved);
        assert_eq!(result.pipeline_type, PipelineType::Comprehensive);
    }

    #[tokio::test]
    async fn test_single_word_terminates_with_minimum_words() {
        let humanizer = offline_humanizer();
        let request = HumanizeRequest::new("Hello");
        let result = humanizer.humanize(&request).await.unwrap();
        assert!(result.word_count >= 250);
    }

    #[tokio::test]
    async fn test_minimum_words_holds_for_every_toggle_combination() {
        let humanizer = offline_humanizer();
        for (paranoid, writehuman) in [(false, false), (false, true), (true, false), (true, true)] {
            let mut request = HumanizeRequest::new("The platform facilitates remarkable outcomes.");
            request.paranoid_mode = paranoid;
            request.writehuman_mode = writehuman;
            let result = humanizer.humanize(&request).await.unwrap();
            assert!(
                result.word_count >= 250,
                "short output with paranoid={paranoid} writehuman={writehuman}"
            );
        }
    }

    #[tokio::test]
    async fn test_pipeline_type_does_not_change_stage_selection() {
        let humanizer = offline_humanizer();
        let mut quick = HumanizeRequest::new("Systems implement innovative algorithms. Results follow.");
        quick.pipeline_type = PipelineType::Quick;
        let comprehensive = HumanizeRequest::new(quick.text.clone());

        let a = humanizer
            .humanize_with_rng(&quick, &mut StdRng::seed_from_u64(99))
            .await
            .unwrap();
        let b = humanizer
            .humanize_with_rng(&comprehensive, &mut StdRng::seed_from_u64(99))
            .await
            .unwrap();

        assert_eq!(a.humanized_text, b.humanized_text);
        assert_eq!(a.pipeline_type, PipelineType::Quick);
        assert_eq!(b.pipeline_type, PipelineType::Comprehensive);
    }

    #[tokio::test]
    async fn test_max_length_input_is_processed() {
        let humanizer = offline_humanizer();
        let text = "word ".repeat(MAX_TEXT_LENGTH / 5);
        assert_eq!(text.chars().count(), MAX_TEXT_LENGTH);
        let result = humanizer.humanize(&HumanizeRequest::new(text)).await.unwrap();
        assert!(result.word_count >= 250);
    }

    #[tokio::test]
    async fn test_oversize_input_rejected_before_stages() {
        let humanizer = offline_humanizer();
        let request = HumanizeRequest::new("a".repeat(MAX_TEXT_LENGTH + 1));
        let err = humanizer.humanize(&request).await.unwrap_err();
        assert!(matches!(err, HumanizeError::InvalidInput(_)));
    }
}
