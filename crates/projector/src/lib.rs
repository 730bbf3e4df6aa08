//! Diff projection.
//!
//! Turns an [`Alignment`] between two token sequences into a list of
//! [`DiffSegment`]s that carry the reference's verbatim text. Concatenating
//! `reference_text` over all segments gives back the reference string byte
//! for byte, so a renderer can show the diff with the original formatting.
//!
//! Runs of consecutive ops of the same kind collapse into one segment:
//! matches become `Unchanged`, substitutions `Replaced`, deletions `Removed`
//! and insertions `Inserted`.

mod segment;

use align::{Alignment, EditOp};
use canonical::{Token, TokenSequence};
use tracing::{debug, warn};

pub use crate::segment::{DiffSegment, SegmentKind};

/// Project `alignment` onto the reference's source text.
///
/// `alignment` must have been computed over `reference.tokens` and
/// `hypothesis.tokens`. An alignment of other sequences is logged and yields
/// no segments.
pub fn project(
    alignment: &Alignment,
    reference: &TokenSequence,
    hypothesis: &TokenSequence,
) -> Vec<DiffSegment> {
    if alignment.reference_len != reference.len()
        || alignment.hypothesis_len != hypothesis.len()
        || !alignment.is_complete()
    {
        warn!(
            alignment_reference_len = alignment.reference_len,
            alignment_hypothesis_len = alignment.hypothesis_len,
            reference_tokens = reference.len(),
            hypothesis_tokens = hypothesis.len(),
            "projection_alignment_mismatch"
        );
        return Vec::new();
    }

    let mut segments: Vec<DiffSegment> = Vec::new();
    // Reference byte offset just past the last consumed token.
    let mut cursor = 0usize;

    for run in alignment.runs() {
        let kind = SegmentKind::from(run[0].kind());
        let reference_tokens: Vec<&Token> = run
            .iter()
            .filter_map(EditOp::reference)
            .filter_map(|i| reference.get(i))
            .collect();

        let (reference_text, separator_len, reference_span) =
            match (reference_tokens.first(), reference_tokens.last()) {
                (Some(first), Some(last)) => {
                    cursor = last.end;
                    (
                        join_verbatim(&reference_tokens),
                        first.separator.len(),
                        first.separator_span().start..last.end,
                    )
                }
                _ => (String::new(), 0, cursor..cursor),
            };

        let (hypothesis_words, hypothesis_text) = match kind {
            SegmentKind::Replaced | SegmentKind::Inserted => {
                let tokens: Vec<&Token> = run
                    .iter()
                    .filter_map(EditOp::hypothesis)
                    .filter_map(|j| hypothesis.get(j))
                    .collect();
                hypothesis_parts(&tokens)
            }
            SegmentKind::Unchanged | SegmentKind::Removed => (Vec::new(), String::new()),
        };

        segments.push(DiffSegment {
            kind,
            reference_text,
            separator_len,
            reference_span,
            hypothesis_words,
            hypothesis_text,
        });
    }

    attach_trailing(&mut segments, reference);

    debug!(
        segments = segments.len(),
        changes = segments.iter().filter(|s| s.is_change()).count(),
        reference_tokens = reference.len(),
        hypothesis_tokens = hypothesis.len(),
        "projection_complete"
    );

    segments
}

/// Concatenate the reference text of every segment.
pub fn reconstruct_reference(segments: &[DiffSegment]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.reference_text.len()).sum());
    for segment in segments {
        out.push_str(&segment.reference_text);
    }
    out
}

fn join_verbatim(tokens: &[&Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.separator);
        out.push_str(&token.text);
    }
    out
}

fn hypothesis_parts(tokens: &[&Token]) -> (Vec<String>, String) {
    let words = tokens.iter().map(|t| t.text.clone()).collect();
    let mut text = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        if idx > 0 {
            text.push_str(&token.separator);
        }
        text.push_str(&token.text);
    }
    (words, text)
}

fn attach_trailing(segments: &mut Vec<DiffSegment>, reference: &TokenSequence) {
    if reference.trailing.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(last) if last.kind == SegmentKind::Unchanged => {
            last.reference_text.push_str(&reference.trailing);
            last.reference_span.end = reference.source_len;
        }
        _ => segments.push(DiffSegment {
            kind: SegmentKind::Unchanged,
            reference_text: reference.trailing.clone(),
            separator_len: reference.trailing.len(),
            reference_span: reference.trailing_start()..reference.source_len,
            hypothesis_words: Vec::new(),
            hypothesis_text: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canonical::{NormalizeConfig, Normalizer};

    fn diff_with(cfg: &NormalizeConfig, reference: &str, hypothesis: &str) -> Vec<DiffSegment> {
        let normalizer = Normalizer::new(cfg).expect("valid config");
        let r = normalizer.tokenize(reference);
        let h = normalizer.tokenize(hypothesis);
        let alignment = align::align_by(&r.tokens, &h.tokens, |a, b| {
            normalizer.tokens_equivalent(a, b)
        });
        project(&alignment, &r, &h)
    }

    fn diff(reference: &str, hypothesis: &str) -> Vec<DiffSegment> {
        diff_with(&NormalizeConfig::default(), reference, hypothesis)
    }

    fn kinds(segments: &[DiffSegment]) -> Vec<SegmentKind> {
        segments.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn leading_insertion_and_replacement() {
        let reference = "You can go pretty far in life when you're a perfect sphere in a vacuum";
        let segments = diff(
            reference,
            "well you can go pretty far in life if youre a perfect sphere in a vacuum",
        );

        assert_eq!(
            kinds(&segments),
            vec![
                SegmentKind::Inserted,
                SegmentKind::Unchanged,
                SegmentKind::Replaced,
                SegmentKind::Unchanged,
            ]
        );

        assert_eq!(segments[0].hypothesis_words, vec!["well"]);
        assert_eq!(segments[0].reference_text, "");
        assert_eq!(segments[0].reference_span, 0..0);

        assert_eq!(segments[1].reference_text, "You can go pretty far in life");
        assert!(segments[1].hypothesis_words.is_empty());

        assert_eq!(segments[2].reference_text, " when");
        assert_eq!(segments[2].separator(), " ");
        assert_eq!(segments[2].reference_words(), vec!["when"]);
        assert_eq!(segments[2].reference_span, 29..34);
        assert_eq!(segments[2].hypothesis_words, vec!["if"]);

        assert_eq!(segments[3].reference_text, " you're a perfect sphere in a vacuum");
        assert_eq!(reconstruct_reference(&segments), reference);
    }

    #[test]
    fn empty_reference_is_single_insertion() {
        let segments = diff("", "hello");
        assert_eq!(kinds(&segments), vec![SegmentKind::Inserted]);
        assert_eq!(segments[0].hypothesis_text, "hello");
        assert_eq!(reconstruct_reference(&segments), "");
    }

    #[test]
    fn empty_hypothesis_is_single_removal() {
        let segments = diff("hello world", "");
        assert_eq!(kinds(&segments), vec![SegmentKind::Removed]);
        assert_eq!(segments[0].reference_text, "hello world");
        assert_eq!(segments[0].reference_words(), vec!["hello", "world"]);
        assert!(segments[0].hypothesis_words.is_empty());
    }

    #[test]
    fn declared_equivalence_keeps_text_unchanged() {
        let cfg = NormalizeConfig::default().with_equivalence("one", "1");
        let segments = diff_with(&cfg, "one two three", "1 two three");
        assert_eq!(kinds(&segments), vec![SegmentKind::Unchanged]);
        assert_eq!(segments[0].reference_text, "one two three");
    }

    #[test]
    fn case_sensitivity_follows_config() {
        let folded = diff("a perfect sphere", "a perfect Sphere");
        assert_eq!(kinds(&folded), vec![SegmentKind::Unchanged]);

        let cfg = NormalizeConfig::default().with_case_sensitive(true);
        let strict = diff_with(&cfg, "a perfect sphere", "a perfect Sphere");
        assert_eq!(
            kinds(&strict),
            vec![SegmentKind::Unchanged, SegmentKind::Replaced]
        );
        assert_eq!(strict[1].hypothesis_words, vec!["Sphere"]);
    }

    #[test]
    fn mid_insertion_has_empty_span_at_cursor() {
        let segments = diff("hello world", "hello big world");
        assert_eq!(
            kinds(&segments),
            vec![
                SegmentKind::Unchanged,
                SegmentKind::Inserted,
                SegmentKind::Unchanged,
            ]
        );
        assert_eq!(segments[1].reference_span, 5..5);
        assert_eq!(segments[2].reference_text, " world");
    }

    #[test]
    fn consecutive_substitutions_merge() {
        let segments = diff("a b c", "x  y c");
        assert_eq!(
            kinds(&segments),
            vec![SegmentKind::Replaced, SegmentKind::Unchanged]
        );
        assert_eq!(segments[0].reference_text, "a b");
        assert_eq!(segments[0].hypothesis_words, vec!["x", "y"]);
        assert_eq!(segments[0].hypothesis_text, "x  y");
    }

    #[test]
    fn trailing_text_joins_final_unchanged() {
        let reference = "hello world.\n";
        let segments = diff(reference, "hello world");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].reference_text, reference);
        assert_eq!(segments[0].reference_span, 0..reference.len());
    }

    #[test]
    fn trailing_text_after_change_is_own_segment() {
        let reference = "hello world --\n";
        let segments = diff(reference, "hello there");
        assert_eq!(
            kinds(&segments),
            vec![
                SegmentKind::Unchanged,
                SegmentKind::Replaced,
                SegmentKind::Unchanged,
            ]
        );
        assert_eq!(segments[2].reference_text, " --\n");
        assert_eq!(segments[2].reference_span, 11..15);
        assert_eq!(reconstruct_reference(&segments), reference);
    }

    #[test]
    fn whitespace_only_reference_keeps_whitespace() {
        let segments = diff("  \n", "");
        assert_eq!(kinds(&segments), vec![SegmentKind::Unchanged]);
        assert_eq!(segments[0].reference_text, "  \n");
    }

    #[test]
    fn deletion_between_matches() {
        let reference = "this is - really fine";
        let segments = diff(reference, "this is fine");
        assert_eq!(
            kinds(&segments),
            vec![
                SegmentKind::Unchanged,
                SegmentKind::Removed,
                SegmentKind::Unchanged,
            ]
        );
        assert_eq!(segments[1].reference_text, " - really");
        assert_eq!(segments[1].separator(), " - ");
        assert_eq!(reconstruct_reference(&segments), reference);
    }

    #[test]
    fn mismatched_alignment_yields_nothing() {
        let normalizer = Normalizer::new(&NormalizeConfig::default()).expect("valid config");
        let r = normalizer.tokenize("hello world");
        let h = normalizer.tokenize("hello");

        let stale = align::align(&["hello", "big", "world"], &["hello"]);
        assert!(project(&stale, &r, &h).is_empty());

        let mut truncated = align::align(&["hello", "world"], &["hello"]);
        truncated.ops.pop();
        assert!(project(&truncated, &r, &h).is_empty());
    }

    #[test]
    fn segments_serialize() {
        let segments = diff("a b", "a c");
        let json = serde_json::to_value(&segments).expect("serialize");
        assert_eq!(json[1]["kind"], "replaced");
        assert_eq!(json[1]["reference_span"]["start"], 1);
        assert_eq!(json[1]["hypothesis_words"][0], "c");
    }
}
