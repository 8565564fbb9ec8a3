// Text Processing Service
// Sentence splitting and word counting shared by the pipeline stages

/// Sentence-terminal punctuation recognized by the splitter.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split text into sentence units on terminal punctuation, discarding
/// empty/whitespace-only fragments. Runs of terminators (`...`, `?!`) produce
/// empty fragments that are filtered out, so they behave as a single break.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whitespace-token word count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
