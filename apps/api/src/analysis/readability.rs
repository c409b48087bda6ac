//! Readability metrics for the resume-analysis report.
//!
//! Flesch Reading Ease over the free-text parts of a resume (summary plus
//! experience and project descriptions). Float arithmetic lives here and
//! nowhere near the integer-only ATS scorer.

/// Flesch Reading Ease: 206.835 - 1.015*(words/sentences) - 84.6*(syllables/words).
/// Returns 0.0 for text with no words. Very simple text can legitimately
/// exceed 100; callers display the raw value.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentence_count = count_sentences(text).max(1) as f64;
    let word_count = words.len() as f64;
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    206.835 - 1.015 * (word_count / sentence_count) - 84.6 * (syllable_count as f64 / word_count)
}

/// Whitespace-separated token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentences are terminated by '.', '!' or '?'; only segments containing a
/// letter or digit count.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(|c| c.is_alphanumeric()))
        .count()
}

/// Vowel-group heuristic: each maximal run of aeiouy counts one syllable,
/// a silent final 'e' is dropped, and every word has at least one.
fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
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

    if groups > 1 && letters.last() == Some(&'e') && !is_vowel(letters[letters.len() - 2]) {
        groups -= 1;
    }

    groups.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(flesch_reading_ease("   "), 0.0);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("led a team of five"), 5);
        assert_eq!(word_count("  spaced   out  "), 2);
    }

    #[test]
    fn test_syllable_counts() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        // silent final e
        assert_eq!(count_syllables("make"), 1);
        // never below one
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("mm"), 1);
    }

    #[test]
    fn test_sentence_counting_ignores_empty_segments() {
        assert_eq!(count_sentences("One. Two! Three?"), 3);
        assert_eq!(count_sentences("Trailing dots..."), 1);
        assert_eq!(count_sentences("!!!"), 0);
    }

    #[test]
    fn test_simple_text_reads_easier_than_dense_text() {
        let simple = "The cat sat on the mat. The dog ran to the park.";
        let dense = "Orchestrated multidisciplinary organizational transformation \
                     initiatives leveraging sophisticated methodological frameworks.";
        assert!(flesch_reading_ease(simple) > flesch_reading_ease(dense));
    }

    #[test]
    fn test_simple_sentence_scores_high() {
        let score = flesch_reading_ease("The cat sat on the mat.");
        assert!(score > 90.0, "score was {score}");
    }
}
