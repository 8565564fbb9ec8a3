// ReHumanizer Core Services

pub mod text_processor;
pub mod lexicon;
pub mod oracle;
pub mod humanize;

pub use text_processor::*;
pub use lexicon::*;
pub use oracle::*;

// Re-export humanize module functions
pub use humanize::{
    disrupt,
    downgrade,
    enforce_minimum_length,
    inject_style,
    substitute,
    HumanizeError,
    Humanizer,
    Stage,
    STAGE_ORDER,
};
