//! Minimum-cost word alignment.
//!
//! Given a reference and a hypothesis sequence and an equivalence predicate,
//! this crate finds an alignment of least total cost where a match costs 0
//! and a substitution, deletion or insertion costs 1, i.e. the word-level
//! Levenshtein distance, together with the ops that achieve it.
//!
//! ## Determinism
//!
//! When several alignments share the minimum cost, the one returned is fixed:
//! at every cell the diagonal (match or substitute) wins over a deletion,
//! which wins over an insertion. The same inputs therefore always produce
//! the same ops.
//!
//! ## Complexity
//!
//! `align_by` is O(m*n) time and keeps one byte per cell for backtracking.
//! [`edit_distance_by`] skips the ops and needs only O(min(m, n)) memory.
//!
//! ```rust
//! use align::{align, EditOp};
//!
//! let reference = ["the", "cat", "sat"];
//! let hypothesis = ["the", "bat", "sat", "down"];
//! let alignment = align(&reference, &hypothesis);
//!
//! assert_eq!(alignment.cost, 2);
//! assert_eq!(alignment.ops[1], EditOp::Substitute { reference: 1, hypothesis: 1 });
//! assert_eq!(alignment.ops[3], EditOp::Insert { hypothesis: 3 });
//! ```

mod distance;
mod op;
mod stats;
mod table;

use serde::{Deserialize, Serialize};

pub use crate::distance::{edit_distance, edit_distance_by};
pub use crate::op::{EditOp, OpKind};
pub use crate::stats::AlignmentStats;

use crate::table::StepMatrix;

/// Ordered ops of a minimum-cost alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub ops: Vec<EditOp>,
    /// Sum of op costs; the edit distance.
    pub cost: usize,
    pub reference_len: usize,
    pub hypothesis_len: usize,
}

impl Alignment {
    pub fn stats(&self) -> AlignmentStats {
        AlignmentStats::from_ops(&self.ops)
    }

    /// True if every op is a match.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|op| op.kind() == OpKind::Match)
    }

    /// Check that the ops consume every reference and every hypothesis index
    /// exactly once, in increasing order, and that `cost` is their sum.
    pub fn is_complete(&self) -> bool {
        let mut next_reference = 0;
        let mut next_hypothesis = 0;
        let mut cost = 0;

        for op in &self.ops {
            if let Some(r) = op.reference() {
                if r != next_reference {
                    return false;
                }
                next_reference += 1;
            }
            if let Some(h) = op.hypothesis() {
                if h != next_hypothesis {
                    return false;
                }
                next_hypothesis += 1;
            }
            cost += op.cost();
        }

        next_reference == self.reference_len
            && next_hypothesis == self.hypothesis_len
            && cost == self.cost
    }

    /// Maximal runs of consecutive ops of the same kind.
    pub fn runs(&self) -> impl Iterator<Item = &[EditOp]> {
        self.ops.chunk_by(|a, b| a.kind() == b.kind())
    }

    /// Edit string such as `"IMMSMD"`.
    pub fn op_string(&self) -> String {
        self.ops.iter().map(|op| op.kind().as_char()).collect()
    }
}

/// Align `reference` against `hypothesis` using `equivalent` to decide
/// matches.
///
/// Never fails. An empty reference gives all inserts, an empty hypothesis
/// all deletes.
pub fn align_by<T, U, F>(reference: &[T], hypothesis: &[U], mut equivalent: F) -> Alignment
where
    F: FnMut(&T, &U) -> bool,
{
    let rows = reference.len();
    let cols = hypothesis.len();
    let (matrix, cost) = StepMatrix::fill(rows, cols, |i, j| {
        equivalent(&reference[i], &hypothesis[j])
    });

    Alignment {
        ops: matrix.backtrack(rows, cols),
        cost,
        reference_len: rows,
        hypothesis_len: cols,
    }
}

/// [`align_by`] with `==` as the equivalence.
pub fn align<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Alignment {
    align_by(reference, hypothesis, |a, b| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn identical_sequences_align_as_matches() {
        let seq = words("you can go pretty far in life");
        let alignment = align(&seq, &seq);
        assert_eq!(alignment.cost, 0);
        assert!(alignment.is_identity());
        assert!(alignment.is_complete());
        assert_eq!(alignment.op_string(), "MMMMMMM");
    }

    #[test]
    fn empty_reference_is_all_inserts() {
        let empty: Vec<&str> = Vec::new();
        let alignment = align(&empty, &words("hello there"));
        assert_eq!(
            alignment.ops,
            vec![
                EditOp::Insert { hypothesis: 0 },
                EditOp::Insert { hypothesis: 1 },
            ]
        );
        assert_eq!(alignment.cost, 2);
        assert!(alignment.is_complete());
    }

    #[test]
    fn empty_hypothesis_is_all_deletes() {
        let empty: Vec<&str> = Vec::new();
        let alignment = align(&words("hello world"), &empty);
        assert_eq!(alignment.op_string(), "DD");
        assert!(alignment.is_complete());
    }

    #[test]
    fn both_empty() {
        let empty: Vec<&str> = Vec::new();
        let alignment = align(&empty, &empty);
        assert!(alignment.ops.is_empty());
        assert_eq!(alignment.cost, 0);
        assert!(alignment.is_complete());
    }

    #[test]
    fn leading_insert_and_substitution() {
        let reference = words("you can go pretty far in life when youre a perfect sphere");
        let hypothesis = words("well you can go pretty far in life if youre a perfect sphere");
        let alignment = align(&reference, &hypothesis);
        assert_eq!(alignment.cost, 2);
        assert_eq!(alignment.op_string(), "IMMMMMMMSMMMM");
        assert_eq!(
            alignment.ops[8],
            EditOp::Substitute {
                reference: 7,
                hypothesis: 8
            }
        );
    }

    #[test]
    fn swapped_pair_prefers_substitutions() {
        let alignment = align(&["a", "b"], &["b", "a"]);
        assert_eq!(alignment.cost, 2);
        assert_eq!(alignment.op_string(), "SS");
    }

    #[test]
    fn rotated_word_moves_as_delete_then_insert() {
        let alignment = align(&words("a b c d"), &words("b c d a"));
        assert_eq!(alignment.cost, 2);
        assert_eq!(alignment.op_string(), "DMMMI");
    }

    #[test]
    fn custom_equivalence_drives_matches() {
        let reference = ["Sphere", "Vacuum"];
        let hypothesis = ["sphere", "VACUUM"];
        let exact = align(&reference, &hypothesis);
        assert_eq!(exact.op_string(), "SS");

        let folded = align_by(&reference, &hypothesis, |a, b| a.eq_ignore_ascii_case(b));
        assert!(folded.is_identity());
    }

    #[test]
    fn incomplete_alignments_are_detected() {
        let mut alignment = align(&["a", "b"], &["a", "c"]);
        assert!(alignment.is_complete());
        alignment.ops.pop();
        assert!(!alignment.is_complete());

        let mut wrong_cost = align(&["a"], &["b"]);
        wrong_cost.cost = 0;
        assert!(!wrong_cost.is_complete());
    }

    #[test]
    fn runs_group_same_kind() {
        let alignment = align(&words("a b c x y"), &words("a b z x y w"));
        let kinds: Vec<(OpKind, usize)> = alignment
            .runs()
            .map(|run| (run[0].kind(), run.len()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (OpKind::Match, 2),
                (OpKind::Substitute, 1),
                (OpKind::Match, 2),
                (OpKind::Insert, 1),
            ]
        );
    }

    #[test]
    fn stats_agree_with_cost() {
        let alignment = align(&words("a b c d e"), &words("x b d e f g"));
        let stats = alignment.stats();
        assert_eq!(stats.errors(), alignment.cost);
        assert_eq!(stats.reference_words(), 5);
        assert_eq!(stats.hypothesis_words(), 6);
    }

    #[test]
    fn serializes_ops_with_tags() {
        let alignment = align(&["a"], &["b", "a"]);
        let json = serde_json::to_string(&alignment.ops).expect("serialize");
        assert_eq!(
            json,
            r#"[{"op":"insert","hypothesis":0},{"op":"match","reference":0,"hypothesis":1}]"#
        );
    }

    fn small_words() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..4, 0..12)
    }

    proptest! {
        #[test]
        fn prop_alignment_is_complete(a in small_words(), b in small_words()) {
            let alignment = align(&a, &b);
            prop_assert!(alignment.is_complete());
            prop_assert_eq!(alignment.cost, edit_distance(&a, &b));
        }

        #[test]
        fn prop_cost_is_symmetric(a in small_words(), b in small_words()) {
            prop_assert_eq!(align(&a, &b).cost, align(&b, &a).cost);
        }

        #[test]
        fn prop_cost_bounded_by_lengths(a in small_words(), b in small_words()) {
            let cost = align(&a, &b).cost;
            prop_assert!(cost >= a.len().abs_diff(b.len()));
            prop_assert!(cost <= a.len().max(b.len()));
        }
    }
}
