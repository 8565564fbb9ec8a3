// Humanization Module
// Pipeline stages organized into specialized submodules:
// - substitution: lexical softening + formal-to-casual downgrade
// - stylometry: filler phrases and punctuation variation
// - coherence: tangent clauses and ellipses (paranoid mode)
// - length: minimum word count enforcement
// - pipeline: ordered stage runner and result assembly

pub mod substitution;
pub mod stylometry;
pub mod coherence;
pub mod length;
pub mod pipeline;

// Re-export commonly used items
pub use pipeline::{HumanizeError, Humanizer, Stage, STAGE_ORDER};
pub use substitution::{downgrade, substitute};
pub use stylometry::inject_style;
pub use coherence::disrupt;
pub use length::enforce_minimum_length;
