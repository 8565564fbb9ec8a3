// ReHumanizer Data Models
// Request/response contract for the humanization pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted input length in characters.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Default minimum word count enforced on pipeline output.
pub const DEFAULT_MIN_WORDS: usize = 250;

// ============ Enumerated Tags ============

/// Pipeline variant tag. Accepted and echoed back to the caller; does not
/// currently change which stages run (the stage toggles do that).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineType {
    #[default]
    Comprehensive,
    Standard,
    Quick,
    Advanced,
}

impl PipelineType {
    pub fn from_str(val: &str) -> Self {
        match val.trim().to_lowercase().as_str() {
            "standard" => Self::Standard,
            "quick" => Self::Quick,
            "advanced" => Self::Advanced,
            _ => Self::Comprehensive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comprehensive => "comprehensive",
            Self::Standard => "standard",
            Self::Quick => "quick",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for PipelineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target register for the paraphrase prompt.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Elementary,
    MiddleSchool,
    HighSchool,
    #[default]
    Undergraduate,
    Masters,
    Phd,
}

impl EducationLevel {
    pub fn from_str(val: &str) -> Self {
        match val.trim().to_lowercase().as_str() {
            "elementary" => Self::Elementary,
            "middle_school" => Self::MiddleSchool,
            "high_school" => Self::HighSchool,
            "masters" => Self::Masters,
            "phd" => Self::Phd,
            _ => Self::Undergraduate,
        }
    }

    /// Register name as spelled into the paraphrase prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elementary => "elementary",
            Self::MiddleSchool => "middle_school",
            Self::HighSchool => "high_school",
            Self::Undergraduate => "undergraduate",
            Self::Masters => "masters",
            Self::Phd => "phd",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Humanize Request ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeRequest {
    pub text: String,
    #[serde(default)]
    pub pipeline_type: PipelineType,
    #[serde(default)]
    pub education_level: EducationLevel,
    #[serde(default = "default_true")]
    pub paranoid_mode: bool,
    #[serde(default = "default_true")]
    pub writehuman_mode: bool,
}

impl HumanizeRequest {
    /// Request with all defaults (comprehensive / undergraduate / both toggles on).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pipeline_type: PipelineType::default(),
            education_level: EducationLevel::default(),
            paranoid_mode: true,
            writehuman_mode: true,
        }
    }
}

// ============ Humanize Result ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeResult {
    pub humanized_text: String,
    pub original_text: String,
    pub word_count: i32,
    pub processing_time_ms: i64,
    /// Placeholder assertion; no semantic-similarity check is performed.
    pub meaning_preserved: bool,
    pub pipeline_type: PipelineType,
    pub education_level: EducationLevel,
}

// ============ Default Value Functions ============

fn default_true() -> bool { true }
