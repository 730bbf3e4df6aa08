use serde::{Deserialize, Serialize};

/// One step of an alignment, carrying the token indices it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Reference and hypothesis tokens are equivalent. Cost 0.
    Match { reference: usize, hypothesis: usize },
    /// Reference token replaced by a different hypothesis token. Cost 1.
    Substitute { reference: usize, hypothesis: usize },
    /// Reference token with no hypothesis counterpart. Cost 1.
    Delete { reference: usize },
    /// Hypothesis token with no reference counterpart. Cost 1.
    Insert { hypothesis: usize },
}

impl EditOp {
    pub fn kind(&self) -> OpKind {
        match self {
            EditOp::Match { .. } => OpKind::Match,
            EditOp::Substitute { .. } => OpKind::Substitute,
            EditOp::Delete { .. } => OpKind::Delete,
            EditOp::Insert { .. } => OpKind::Insert,
        }
    }

    /// Reference index consumed by this op, if any.
    pub fn reference(&self) -> Option<usize> {
        match *self {
            EditOp::Match { reference, .. }
            | EditOp::Substitute { reference, .. }
            | EditOp::Delete { reference } => Some(reference),
            EditOp::Insert { .. } => None,
        }
    }

    /// Hypothesis index consumed by this op, if any.
    pub fn hypothesis(&self) -> Option<usize> {
        match *self {
            EditOp::Match { hypothesis, .. }
            | EditOp::Substitute { hypothesis, .. }
            | EditOp::Insert { hypothesis } => Some(hypothesis),
            EditOp::Delete { .. } => None,
        }
    }

    pub fn cost(&self) -> usize {
        self.kind().cost()
    }
}

/// Fieldless tag of an [`EditOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Match,
    Substitute,
    Delete,
    Insert,
}

impl OpKind {
    pub fn cost(self) -> usize {
        match self {
            OpKind::Match => 0,
            OpKind::Substitute | OpKind::Delete | OpKind::Insert => 1,
        }
    }

    /// Single-letter code, as in the usual `MMSDI` edit strings.
    pub fn as_char(self) -> char {
        match self {
            OpKind::Match => 'M',
            OpKind::Substitute => 'S',
            OpKind::Delete => 'D',
            OpKind::Insert => 'I',
        }
    }
}
