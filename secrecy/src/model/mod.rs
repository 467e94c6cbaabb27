//! Context-dependent letter transition model.
//!
//! Scores come from a fixed table of letter frequencies measured on a large
//! natural-language corpus: for every letter we know how likely it is to
//! open a token, to follow a digit, to follow punctuation, and to follow
//! each specific letter. Letter runs that walk through improbable
//! transitions look random, and random-looking runs inside quotes tend to
//! be passwords.

mod table;
pub mod train;

use crate::constants::{PASSWORD_CHARS, PRIOR_LETTERS};
use crate::error::SecrecyError;
use rustc_hash::FxHashMap;

/// A probability table over the password alphabet that only names some
/// outcomes explicitly; every unnamed outcome shares the remaining mass
/// uniformly.
#[derive(Debug)]
pub struct TruncatedProbs {
    probs: FxHashMap<u8, f64>,
    rest: f64,
}

impl TruncatedProbs {
    /// Builds a distribution from explicit `(prior letter, probability)`
    /// pairs for `letter`.
    ///
    /// The shared remainder is `(1 − Σ explicit) / (|alphabet| − |explicit|)`.
    /// A saturated distribution (all 26 prior letters listed) never hands
    /// out the remainder, and measured transition columns can legitimately
    /// sum past 1.0 there; a distribution that leaves priors unlisted must
    /// keep the remainder non-negative or the model is malformed.
    pub(crate) fn new(letter: u8, pairs: &[(u8, f64)]) -> Result<Self, SecrecyError> {
        let explicit: f64 = pairs.iter().map(|&(_, p)| p).sum();
        let rest = (1.0 - explicit) / (PASSWORD_CHARS.len() - pairs.len()) as f64;
        if rest < 0.0 && pairs.len() < PRIOR_LETTERS {
            return Err(SecrecyError::MalformedModel {
                letter: letter as char,
            });
        }
        Ok(Self {
            probs: pairs.iter().copied().collect(),
            rest,
        })
    }

    /// Probability for a given prior letter: its explicit value if listed,
    /// otherwise the shared remainder.
    #[must_use]
    pub fn get(&self, prior: u8) -> f64 {
        self.probs.get(&prior).copied().unwrap_or(self.rest)
    }
}

/// Probabilities of one letter occurring in each context class.
#[derive(Debug)]
pub struct LetterProbability {
    at_start: f64,
    after_digit: f64,
    after_punct: f64,
    after_letter: TruncatedProbs,
}

/// The full transition model: one [`LetterProbability`] per ASCII letter.
///
/// Built once per run from the embedded table, then shared read-only
/// across all file scans.
#[derive(Debug)]
pub struct Probabilities {
    /// Indexed by [`letter_index`]: `a..=z` then `A..=Z`.
    letters: Vec<LetterProbability>,
}

impl Probabilities {
    /// Builds the model from the embedded constant table, validating the
    /// smoothing invariant of every distribution.
    pub fn from_table() -> Result<Self, SecrecyError> {
        let letters = table::LETTER_TABLE
            .iter()
            .map(|raw| {
                let pairs: Vec<(u8, f64)> = raw
                    .after_letter
                    .iter()
                    .enumerate()
                    .map(|(i, &p)| (b'a' + i as u8, p))
                    .collect();
                Ok(LetterProbability {
                    at_start: raw.at_start,
                    after_digit: raw.after_digit,
                    after_punct: raw.after_punct,
                    after_letter: TruncatedProbs::new(raw.letter, &pairs)?,
                })
            })
            .collect::<Result<Vec<_>, SecrecyError>>()?;
        debug_assert_eq!(letters.len(), 52);
        Ok(Self { letters })
    }

    /// Probability of `letter` given the character preceding it.
    ///
    /// `prev` of `None` means the letter opens the token. When both `prev`
    /// and `letter` are uppercase, both are folded to lowercase and the
    /// lowercase letter's table is used; an uppercase run is no more
    /// surprising than its lowercase spelling. `letter` must be an ASCII
    /// letter — candidate extraction guarantees that.
    #[must_use]
    pub fn probability(&self, prev: Option<u8>, letter: u8) -> f64 {
        let entry = &self.letters[letter_index(letter)];
        let Some(prev) = prev else {
            return entry.at_start;
        };
        if prev.is_ascii_alphabetic() {
            if prev.is_ascii_uppercase() && letter.is_ascii_uppercase() {
                let folded = &self.letters[letter_index(letter.to_ascii_lowercase())];
                return folded.after_letter.get(prev.to_ascii_lowercase());
            }
            return entry.after_letter.get(prev.to_ascii_lowercase());
        }
        if prev.is_ascii_digit() {
            return entry.after_digit;
        }
        entry.after_punct
    }
}

/// Table slot for a letter: `a..=z` map to `0..26`, `A..=Z` to `26..52`.
fn letter_index(letter: u8) -> usize {
    debug_assert!(
        letter.is_ascii_alphabetic(),
        "scorer queried a non-letter byte"
    );
    if letter.is_ascii_lowercase() {
        (letter - b'a') as usize
    } else {
        26 + (letter - b'A') as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_builds_from_embedded_table() {
        let model = Probabilities::from_table().unwrap();
        assert_eq!(model.letters.len(), 52);
    }

    #[test]
    fn start_digit_and_punct_contexts() {
        let model = Probabilities::from_table().unwrap();
        // Golden values straight out of the table.
        assert_eq!(model.probability(None, b'a'), 5.1670e-2);
        assert_eq!(model.probability(Some(b'7'), b'a'), 8.3916e-3);
        assert_eq!(model.probability(Some(b'_'), b'a'), 5.0477e-2);
        // Anything neither letter nor digit counts as punctuation.
        assert_eq!(model.probability(Some(b' '), b'a'), 5.0477e-2);
    }

    #[test]
    fn letter_context_lowers_the_prior() {
        let model = Probabilities::from_table().unwrap();
        // P(e | h) and P(e | H) read the same cell.
        assert_eq!(model.probability(Some(b'h'), b'e'), 1.8389e-1);
        assert_eq!(model.probability(Some(b'H'), b'e'), 1.8389e-1);
    }

    #[test]
    fn uppercase_pair_folds_to_lowercase_table() {
        let model = Probabilities::from_table().unwrap();
        // P(E | H) folds both: reads the lowercase 'e' row at prior 'h',
        // not the 'E' row.
        assert_eq!(
            model.probability(Some(b'H'), b'E'),
            model.probability(Some(b'h'), b'e')
        );
        // An uppercase letter after a lowercase one stays on its own row.
        assert_eq!(model.probability(Some(b'h'), b'E'), 2.8161e-4);
        // A lowercase letter after an uppercase one does not fold the row.
        assert_eq!(model.probability(Some(b'H'), b'e'), 1.8389e-1);
    }

    #[test]
    fn truncated_distribution_shares_remainder() {
        let probs = TruncatedProbs::new(b'x', &[(b'a', 0.4), (b'b', 0.3)]).unwrap();
        assert_eq!(probs.get(b'a'), 0.4);
        // (1 - 0.7) / (91 - 2)
        let expected = 0.3 / 89.0;
        assert!((probs.get(b'z') - expected).abs() < 1e-15);
    }

    #[test]
    fn negative_reachable_remainder_is_rejected() {
        let result = TruncatedProbs::new(b'x', &[(b'a', 0.9), (b'b', 0.3)]);
        assert!(matches!(
            result,
            Err(SecrecyError::MalformedModel { letter: 'x' })
        ));
    }

    #[test]
    fn saturated_distribution_tolerates_oversum() {
        // All 26 priors listed: the remainder is unreachable, so a column
        // sum past 1.0 (as in the measured table) is fine.
        let pairs: Vec<(u8, f64)> = (b'a'..=b'z').map(|l| (l, 0.08)).collect();
        assert!(TruncatedProbs::new(b'x', &pairs).is_ok());
    }
}
