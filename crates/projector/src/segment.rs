use std::ops::Range;

use align::OpKind;
use serde::{Deserialize, Serialize};

/// How a stretch of the reference relates to the hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Reference words matched by equivalent hypothesis words.
    Unchanged,
    /// Reference words the hypothesis replaced with other words.
    Replaced,
    /// Hypothesis words with no reference counterpart.
    Inserted,
    /// Reference words missing from the hypothesis.
    Removed,
}

impl SegmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::Unchanged => "unchanged",
            SegmentKind::Replaced => "replaced",
            SegmentKind::Inserted => "inserted",
            SegmentKind::Removed => "removed",
        }
    }
}

impl From<OpKind> for SegmentKind {
    fn from(kind: OpKind) -> Self {
        match kind {
            OpKind::Match => SegmentKind::Unchanged,
            OpKind::Substitute => SegmentKind::Replaced,
            OpKind::Insert => SegmentKind::Inserted,
            OpKind::Delete => SegmentKind::Removed,
        }
    }
}

/// One maximal run of a single [`SegmentKind`], in reference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    /// Verbatim reference slice, starting with the separator that precedes
    /// the first word. Empty for [`SegmentKind::Inserted`].
    pub reference_text: String,
    /// Byte length of the leading separator inside `reference_text`.
    pub separator_len: usize,
    /// Byte range of `reference_text` in the reference string.
    pub reference_span: Range<usize>,
    /// Verbatim hypothesis words. Only set on Replaced and Inserted.
    pub hypothesis_words: Vec<String>,
    /// Hypothesis slice from the first to the last word, inner separators
    /// kept. Only set on Replaced and Inserted.
    pub hypothesis_text: String,
}

impl DiffSegment {
    /// Separator text before the first reference word.
    pub fn separator(&self) -> &str {
        &self.reference_text[..self.separator_len]
    }

    /// Reference text without the leading separator.
    pub fn body(&self) -> &str {
        &self.reference_text[self.separator_len..]
    }

    /// Whitespace-delimited runs of [`body`](Self::body).
    ///
    /// Punctuation-only runs between words are included as they appear.
    pub fn reference_words(&self) -> Vec<&str> {
        self.body().split_whitespace().collect()
    }

    pub fn is_change(&self) -> bool {
        self.kind != SegmentKind::Unchanged
    }
}
