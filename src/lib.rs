//! Word-level diffs between a reference text and a transcript of it.
//!
//! This crate stitches the tokenizer (`canonical`), the aligner (`align`) and
//! the projector (`projector`) together behind one entry point,
//! [`TranscriptDiffer`], and adds rendering, YAML configuration and a
//! speech recognition boundary on top.
//!
//! ```rust
//! use transcript_diff::{NormalizeConfig, SegmentKind, TranscriptDiffer};
//!
//! let differ = TranscriptDiffer::new(&NormalizeConfig::default()).unwrap();
//! let segments = differ.diff("hello world", "hello big world");
//!
//! let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [SegmentKind::Unchanged, SegmentKind::Inserted, SegmentKind::Unchanged]
//! );
//! ```

pub mod asr;
pub mod config;
mod error;
pub mod render;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug};

pub use align::{
    Alignment, AlignmentStats, EditOp, OpKind, align, align_by, edit_distance, edit_distance_by,
};
pub use canonical::{
    CanonicalError, EquivalenceSet, NormalizeConfig, Normalizer, Token, TokenSequence, tokenize,
};
pub use projector::{DiffSegment, SegmentKind, project, reconstruct_reference};

pub use crate::asr::{
    AudioSegment, MAX_SEGMENT_SECONDS, Transcriber, Transcript, TranscriptionDiff,
    TranscriptionRequest, transcription_diff,
};
pub use crate::config::{ConfigLoadError, TranscriptDiffConfig};
pub use crate::error::DiffError;
pub use crate::render::{RenderConfig, RenderStyle, render};

/// Segments of one diff together with its op counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    pub segments: Vec<DiffSegment>,
    pub stats: AlignmentStats,
}

impl DiffReport {
    pub fn word_error_rate(&self) -> f64 {
        self.stats.word_error_rate()
    }
}

/// A compiled normalization config ready to diff any number of pairs.
///
/// Immutable once built, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct TranscriptDiffer {
    normalizer: Normalizer,
}

impl TranscriptDiffer {
    /// Validate `cfg` and compile its equivalences.
    pub fn new(cfg: &NormalizeConfig) -> Result<Self, DiffError> {
        Ok(Self {
            normalizer: Normalizer::new(cfg)?,
        })
    }

    pub fn from_config(cfg: &TranscriptDiffConfig) -> Result<Self, DiffError> {
        Self::new(&cfg.normalization)
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// A differ with the same settings for texts in `language`.
    ///
    /// Non-English tags switch off the English abbreviation and numeral
    /// presets.
    pub fn for_language(&self, language: &str) -> Result<Self, DiffError> {
        let cfg = self.normalizer.config().clone().with_language(language);
        Self::new(&cfg)
    }

    /// Align two already tokenized sequences by key equivalence.
    pub fn align(&self, reference: &TokenSequence, hypothesis: &TokenSequence) -> Alignment {
        align_by(&reference.tokens, &hypothesis.tokens, |r, h| {
            self.normalizer.tokens_equivalent(r, h)
        })
    }

    /// Diff `hypothesis` against `reference`.
    ///
    /// Never fails: empty input on either side yields only insertions or only
    /// removals.
    pub fn diff(&self, reference: &str, hypothesis: &str) -> Vec<DiffSegment> {
        self.report(reference, hypothesis).segments
    }

    /// [`diff`](Self::diff) plus the alignment's op counts.
    pub fn report(&self, reference: &str, hypothesis: &str) -> DiffReport {
        let start = Instant::now();
        let span = tracing::span!(
            Level::DEBUG,
            "transcript_diff.diff",
            reference_bytes = reference.len(),
            hypothesis_bytes = hypothesis.len()
        );
        let _guard = span.enter();

        let reference_tokens = self.normalizer.tokenize(reference);
        let hypothesis_tokens = self.normalizer.tokenize(hypothesis);
        let alignment = self.align(&reference_tokens, &hypothesis_tokens);
        let segments = project(&alignment, &reference_tokens, &hypothesis_tokens);
        let stats = alignment.stats();

        debug!(
            reference_tokens = reference_tokens.len(),
            hypothesis_tokens = hypothesis_tokens.len(),
            cost = alignment.cost,
            segments = segments.len(),
            elapsed_micros = start.elapsed().as_micros(),
            "diff_complete"
        );

        DiffReport { segments, stats }
    }

    /// Diff many independent `(reference, hypothesis)` pairs.
    ///
    /// Output order follows `pairs`. Runs on the rayon pool when the
    /// `parallel` feature is enabled.
    pub fn diff_batch<R, H>(&self, pairs: &[(R, H)]) -> Vec<DiffReport>
    where
        R: AsRef<str> + Sync,
        H: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(r, h)| self.report(r.as_ref(), h.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .map(|(r, h)| self.report(r.as_ref(), h.as_ref()))
                .collect()
        }
    }
}

/// One-off diff with a freshly compiled `cfg`.
///
/// Prefer a [`TranscriptDiffer`] when diffing more than one pair.
pub fn text_diff(
    reference: &str,
    hypothesis: &str,
    cfg: &NormalizeConfig,
) -> Result<Vec<DiffSegment>, DiffError> {
    Ok(TranscriptDiffer::new(cfg)?.diff(reference, hypothesis))
}
