// ABOUTME: Readability and sentence-variety statistics for quality scoring
// ABOUTME: Implements Flesch Reading Ease with vowel-group syllable counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! Readability statistics.
//!
//! Sentences split on `[.!?]+`, words on whitespace, syllables by counting
//! contiguous vowel groups with a trailing-silent-`e` decrement and a floor of
//! one syllable per word. Degenerate input degrades to zero instead of
//! failing.

/// Split text into non-empty sentences on terminal punctuation
fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count syllables in a single word via contiguous vowel groups
///
/// A trailing silent `e` is subtracted when the word has more than one vowel
/// group; every word counts as at least one syllable.
fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let letters: Vec<char> = lower.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0usize;
    let mut in_group = false;
    for &c in &letters {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    if groups > 1 && letters.last() == Some(&'e') {
        groups -= 1;
    }

    groups.max(1)
}

/// Flesch Reading Ease, clamped to [0,100]
///
/// `206.835 − 1.015·(words/sentences) − 84.6·(syllables/words)`. Zero
/// sentences or zero words yields 0.
#[must_use]
pub fn flesch_reading_ease(text: &str) -> f64 {
    let sentences = split_sentences(text);
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentences.is_empty() || words.is_empty() {
        return 0.0;
    }

    let sentence_count = sentences.len() as f64;
    let word_count = words.len() as f64;
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let score = 84.6f64.mul_add(
        -(syllable_count as f64 / word_count),
        1.015f64.mul_add(-(word_count / sentence_count), 206.835),
    );

    score.clamp(0.0, 100.0)
}

/// Coefficient of variation (stddev/mean) of per-sentence word counts
///
/// Defined as 0 when fewer than two sentences exist.
#[must_use]
pub fn sentence_variety(text: &str) -> f64 {
    let sentences = split_sentences(text);
    if sentences.len() < 2 {
        return 0.0;
    }

    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| s.split_whitespace().count() as f64)
        .collect();

    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return 0.0;
    }

    let variance = lengths
        .iter()
        .map(|len| {
            let diff = len - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    variance.sqrt() / mean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_counting() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("window"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        // Trailing silent e
        assert_eq!(count_syllables("table"), 1);
        // Floor of one even without vowels
        assert_eq!(count_syllables("tsk"), 1);
        assert_eq!(count_syllables("42"), 1);
    }

    #[test]
    fn test_flesch_empty_input() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(flesch_reading_ease("   "), 0.0);
        // Punctuation only: words exist but no sentences after trimming
        assert_eq!(flesch_reading_ease("..."), 0.0);
    }

    #[test]
    fn test_flesch_simple_text_reads_easy() {
        let score = flesch_reading_ease("The cat sat. The dog ran. We all laughed.");
        assert!(score > 80.0, "simple prose should score high, got {score}");
    }

    #[test]
    fn test_flesch_clamped_to_range() {
        let dense = "Incomprehensibility characterizes institutionalization internationalization \
                     responsibilities notwithstanding counterrevolutionaries.";
        let score = flesch_reading_ease(dense);
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_variety_single_sentence_is_zero() {
        assert_eq!(sentence_variety("One lonely sentence here."), 0.0);
    }

    #[test]
    fn test_variety_uniform_vs_mixed() {
        let uniform = "One two three. One two three. One two three.";
        let mixed = "Short. This sentence has quite a few more words in it. Tiny.";
        assert!(sentence_variety(uniform) < f64::EPSILON);
        assert!(sentence_variety(mixed) > 0.3);
    }
}
