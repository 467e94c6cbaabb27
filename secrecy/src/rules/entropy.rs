//! Detector for password-like strings.
//!
//! Pulls candidate tokens out of quoting contexts and scores them against
//! the letter transition model. The score is the inverse of the average
//! alphabet-weighted transition probability: common spellings land well
//! below 1, while letter salad climbs above it. It is a tuned heuristic,
//! not Shannon entropy, and the 0.5 threshold belongs to exactly this
//! arithmetic.

use crate::constants::{candidate_re, PASSWORD_CHARS, SCORE_THRESHOLD};
use crate::context::ReportContext;
use crate::model::Probabilities;
use crate::utils::lines;

/// Scores every candidate on every line and reports the suspicious ones.
pub fn check(ctx: &ReportContext, content: &[u8], path: &str, model: &Probabilities) {
    for (lineno, line) in lines(content) {
        for caps in candidate_re().captures_iter(line) {
            let Some(token) = caps.iter().skip(1).flatten().next() else {
                continue;
            };
            let score = surprisal(model, token.as_bytes());
            if score > SCORE_THRESHOLD {
                ctx.line_error(
                    path,
                    lineno,
                    format!(
                        "high entropy string: \"{}\" (entropy {})",
                        String::from_utf8_lossy(token.as_bytes()),
                        score
                    ),
                );
            }
        }
    }
}

/// Surprisal score of a letter run.
///
/// Each position contributes its transition probability weighted by the
/// alphabet size; the score is the reciprocal of the positional average.
/// A token whose every transition has probability zero averages to zero
/// and scores infinite — maximally surprising, so it is reported, not an
/// error.
#[must_use]
pub fn surprisal(model: &Probabilities, token: &[u8]) -> f64 {
    let mut weighted = 0.0;
    for (i, &letter) in token.iter().enumerate() {
        let prev = if i == 0 { None } else { Some(token[i - 1]) };
        weighted += model.probability(prev, letter) * PASSWORD_CHARS.len() as f64;
    }
    1.0 / (weighted / token.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Finding;

    fn model() -> Probabilities {
        Probabilities::from_table().unwrap()
    }

    fn run(content: &[u8]) -> Vec<Finding> {
        let ctx = ReportContext::new();
        check(&ctx, content, "conf/app.yml", &model());
        ctx.sorted_findings()
    }

    #[test]
    fn natural_words_score_low() {
        let model = model();
        assert!((surprisal(&model, b"hello") - 0.15395644824567703).abs() < 1e-12);
        assert!((surprisal(&model, b"password") - 0.09917857576143548).abs() < 1e-12);
        assert!((surprisal(&model, b"kubernetes") - 0.1315102189167368).abs() < 1e-12);
    }

    #[test]
    fn letter_salad_scores_high() {
        let model = model();
        assert!((surprisal(&model, b"Xqzkwpf") - 2.4666762521705823).abs() < 1e-12);
        assert!((surprisal(&model, b"QzVxWqJk") - 2.2458028653446416).abs() < 1e-12);
        // Barely past the threshold.
        assert!((surprisal(&model, b"Trkbxqzv") - 0.5261799768829141).abs() < 1e-12);
    }

    #[test]
    fn zero_probability_chain_scores_infinite() {
        // Every transition in this token has measured probability zero.
        let score = surprisal(&model(), b"qJqJqD");
        assert!(score.is_infinite());
        assert!(score > SCORE_THRESHOLD);
    }

    #[test]
    fn flags_quoted_random_tokens_only() {
        let findings = run(b"greeting = \"hello\"\npw = \"Xqzkwpf\"\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, Some(2));
        assert!(findings[0].message.contains("high entropy string: \"Xqzkwpf\""));
    }

    #[test]
    fn all_three_delimiter_pairs_are_candidates() {
        assert_eq!(run(b"a = 'Xqzkwpf'\n").len(), 1);
        assert_eq!(run(b"<password>Xqzkwpf</password>\n").len(), 1);
        assert_eq!(run(b"b = \"Xqzkwpf\"\n").len(), 1);
    }

    #[test]
    fn mismatched_delimiters_are_not_candidates() {
        assert!(run(b"a = \"Xqzkwpf'\n").is_empty());
        assert!(run(b">Xqzkwpf>\n").is_empty());
    }

    #[test]
    fn short_or_non_letter_tokens_are_not_candidates() {
        assert!(run(b"pw = \"Xqzkw\"\n").is_empty());
        assert!(run(b"pw = \"Xqzkwp4f\"\n").is_empty());
    }

    #[test]
    fn multiple_candidates_per_line_are_scored_independently() {
        let findings = run(b"a = \"Xqzkwpf\"; b = 'QzVxWqJk'\n");
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn infinite_score_is_reported_with_inf_marker() {
        let findings = run(b"x = \"qJqJqD\"\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("(entropy inf)"));
    }
}
