//! Rebuilds the letter transition table from a text corpus.
//!
//! The corpus is a wordlist, one token per line, every byte drawn from the
//! password alphabet. Bigrams are counted with the same uppercase-pair
//! folding the scorer applies, then each letter's frequencies are printed
//! as `RawLetter` rows ready to paste into `model/table.rs`.

use crate::constants::PASSWORD_CHARS;
use crate::utils::lines;
use anyhow::{bail, Result};
use rustc_hash::FxHashMap;
use std::io::Write;

/// Sentinel context for the first character of a line.
const START: u8 = 0;

fn in_alphabet(byte: u8) -> bool {
    PASSWORD_CHARS.as_bytes().contains(&byte)
}

fn punctuation() -> impl Iterator<Item = u8> {
    PASSWORD_CHARS
        .bytes()
        .filter(|b| !b.is_ascii_alphanumeric())
}

/// Counts bigrams in `corpus` and writes one `RawLetter` row per ASCII
/// letter to `writer`.
///
/// # Errors
///
/// Fails when the corpus contains a byte outside the password alphabet, or
/// is too small to populate every context class (the start context, the
/// digit and punctuation contexts, and each of the 26 prior letters).
pub fn print_table(corpus: &[u8], writer: &mut impl Write) -> Result<()> {
    let mut bigrams: FxHashMap<(u8, u8), u64> = FxHashMap::default();

    for (lineno, line) in lines(corpus) {
        for (i, &byte) in line.iter().enumerate() {
            if !in_alphabet(byte) {
                bail!(
                    "corpus line {lineno} contains byte 0x{byte:02x}, \
                     which is outside the password alphabet"
                );
            }
            let mut ch = byte;
            let mut prev = if i == 0 { START } else { line[i - 1] };
            if ch.is_ascii_uppercase() && prev.is_ascii_uppercase() {
                ch = ch.to_ascii_lowercase();
                prev = prev.to_ascii_lowercase();
            }
            *bigrams.entry((prev, ch)).or_insert(0) += 1;
        }
    }

    let row_sum = |prev: u8| -> u64 {
        bigrams
            .iter()
            .filter(|&(&(p, _), _)| p == prev)
            .map(|(_, &count)| count)
            .sum()
    };
    let count = |prev: u8, ch: u8| -> u64 { bigrams.get(&(prev, ch)).copied().unwrap_or(0) };

    let total_at_start = row_sum(START);
    let total_after_punct: u64 = punctuation().map(row_sum).sum();
    let total_after_digit: u64 = (b'0'..=b'9').map(row_sum).sum();
    let total_after_letter: Vec<u64> = (b'a'..=b'z').map(row_sum).collect();

    if total_at_start == 0
        || total_after_punct == 0
        || total_after_digit == 0
        || total_after_letter.contains(&0)
    {
        bail!(
            "corpus too small: every context class (token start, digit, \
             punctuation, and each prior letter) needs at least one sample"
        );
    }

    for letter in (b'a'..=b'z').chain(b'A'..=b'Z') {
        let num_first = count(START, letter);
        let num_prev_punct: u64 = punctuation().map(|p| count(p, letter)).sum();
        let num_prev_digit: u64 = (b'0'..=b'9').map(|d| count(d, letter)).sum();

        let p_at_start = num_first as f64 / total_at_start as f64;
        let p_after_punct = num_prev_punct as f64 / total_after_punct as f64;
        let p_after_digit = num_prev_digit as f64 / total_after_digit as f64;

        let cells: Vec<String> = (b'a'..=b'z')
            .zip(&total_after_letter)
            .map(|(prev, &total)| format!("{:.4e}", count(prev, letter) as f64 / total as f64))
            .collect();

        writeln!(
            writer,
            "    RawLetter {{ letter: b'{}', at_start: {:.4e}, after_digit: {:.4e}, \
             after_punct: {:.4e}, after_letter: [{}] }},",
            letter as char,
            p_at_start,
            p_after_digit,
            p_after_punct,
            cells.join(", ")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One line per prior letter plus digit and punctuation contexts.
    fn minimal_corpus() -> Vec<u8> {
        let mut corpus = Vec::new();
        for letter in b'a'..=b'z' {
            corpus.push(letter);
            corpus.push(b'a');
            corpus.push(b'\n');
        }
        corpus.extend_from_slice(b"1a\n.a\n");
        corpus
    }

    #[test]
    fn emits_one_row_per_letter() {
        let mut out = Vec::new();
        print_table(&minimal_corpus(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 52);
        assert!(text.starts_with("    RawLetter { letter: b'a',"));
        assert!(text.contains("RawLetter { letter: b'Z',"));
    }

    #[test]
    fn computes_expected_probabilities() {
        let mut out = Vec::new();
        print_table(&minimal_corpus(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // 28 lines start: 26 with distinct letters, one with '1', one with '.'.
        // 'a' opens exactly one of them.
        let row_a = text.lines().next().unwrap();
        assert!(row_a.contains("at_start: 3.5714e-2"), "{row_a}");
        // Every char following a digit is 'a', likewise after punctuation.
        assert!(row_a.contains("after_digit: 1.0000e0"), "{row_a}");
        assert!(row_a.contains("after_punct: 1.0000e0"), "{row_a}");
    }

    #[test]
    fn rejects_bytes_outside_alphabet() {
        let mut out = Vec::new();
        let err = print_table(b"with space\n", &mut out).unwrap_err();
        assert!(err.to_string().contains("password alphabet"));
    }

    #[test]
    fn rejects_corpus_missing_context_classes() {
        // No digits anywhere: the digit context class is unpopulated.
        let mut out = Vec::new();
        assert!(print_table(b"abcdef\n", &mut out).is_err());
    }
}
