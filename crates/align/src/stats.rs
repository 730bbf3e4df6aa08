use serde::{Deserialize, Serialize};

use crate::op::{EditOp, OpKind};

/// Per-kind op counts of an alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub matches: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl AlignmentStats {
    pub fn from_ops(ops: &[EditOp]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            match op.kind() {
                OpKind::Match => stats.matches += 1,
                OpKind::Substitute => stats.substitutions += 1,
                OpKind::Delete => stats.deletions += 1,
                OpKind::Insert => stats.insertions += 1,
            }
        }
        stats
    }

    /// `S + D + I`, equal to the alignment cost.
    pub fn errors(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }

    /// Number of reference words, `M + S + D`.
    pub fn reference_words(&self) -> usize {
        self.matches + self.substitutions + self.deletions
    }

    pub fn hypothesis_words(&self) -> usize {
        self.matches + self.substitutions + self.insertions
    }

    /// Word error rate, `(S + D + I) / N`.
    ///
    /// 0.0 when both sides are empty, 1.0 when only the reference is. Can
    /// exceed 1.0 when the hypothesis is much longer than the reference.
    pub fn word_error_rate(&self) -> f64 {
        let n = self.reference_words();
        if n == 0 {
            return if self.insertions == 0 { 0.0 } else { 1.0 };
        }
        self.errors() as f64 / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_rate() {
        let ops = [
            EditOp::Insert { hypothesis: 0 },
            EditOp::Match {
                reference: 0,
                hypothesis: 1,
            },
            EditOp::Substitute {
                reference: 1,
                hypothesis: 2,
            },
            EditOp::Match {
                reference: 2,
                hypothesis: 3,
            },
            EditOp::Delete { reference: 3 },
        ];
        let stats = AlignmentStats::from_ops(&ops);
        assert_eq!(stats.matches, 2);
        assert_eq!(stats.errors(), 3);
        assert_eq!(stats.reference_words(), 4);
        assert_eq!(stats.hypothesis_words(), 4);
        assert!((stats.word_error_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_reference_rates() {
        assert_eq!(AlignmentStats::default().word_error_rate(), 0.0);
        let only_inserts = AlignmentStats {
            insertions: 3,
            ..Default::default()
        };
        assert_eq!(only_inserts.word_error_rate(), 1.0);
    }
}
