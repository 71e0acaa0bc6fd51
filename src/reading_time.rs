// src/reading_time.rs
//! Reading-time estimation from structured document content.

use crate::constants::WORDS_PER_MINUTE;
use crate::model::{ContentDetail, ContentSection};

/// Estimated reading time in whole minutes, rounded up.
///
/// Counts whitespace-delimited tokens across every section heading and
/// every body block's plain text, then divides by the assumed reading
/// speed. A document with no sections estimates to zero.
///
/// Whitespace tokenization systematically miscounts languages without
/// whitespace-delimited words and punctuation-adjacent text; that is
/// accepted as an approximation, not corrected.
pub fn estimate(detail: &ContentDetail) -> u32 {
    let words: usize = detail.sections.iter().map(section_word_count).sum();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

fn section_word_count(section: &ContentSection) -> usize {
    let heading_words = count_words(&section.heading);
    let body_text = section
        .body
        .iter()
        .map(|block| block.plain_text())
        .collect::<Vec<_>>()
        .join(" ");
    heading_words + count_words(&body_text)
}

/// `split_whitespace` yields nothing for an empty string, so an empty
/// heading counts as zero words rather than one.
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
