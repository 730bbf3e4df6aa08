//! Speech recognition boundary.
//!
//! The recognizer itself lives outside this crate. Callers implement
//! [`Transcriber`] for whatever engine they run and hand it in explicitly;
//! [`transcription_diff`] then recognizes the audio and diffs the result
//! against the reference text.

use std::fmt;
use std::time::Instant;

use tracing::{info, warn};

use crate::error::DiffError;
use crate::{DiffReport, TranscriptDiffer};

/// Longest segment a typical recognizer window handles in one pass.
///
/// Longer audio is passed through unchanged with a warning; splitting it is
/// the recognizer's business.
pub const MAX_SEGMENT_SECONDS: f64 = 30.0;

/// Borrowed mono PCM audio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSegment<'a> {
    pub samples: &'a [f32],
    pub sample_rate: u32,
}

impl<'a> AudioSegment<'a> {
    pub fn new(samples: &'a [f32], sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Duration in seconds, 0.0 for a zero sample rate.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }
}

/// Input of one recognition call.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRequest<'a> {
    pub audio: AudioSegment<'a>,
    /// Language tag of the audio if known (`"en"`, `"fr-ca"`, ...). `None`
    /// lets the recognizer detect it.
    pub language: Option<String>,
    /// Rare words the recognizer should be biased towards, such as names
    /// from the reference text.
    pub custom_words: Vec<String>,
}

impl<'a> TranscriptionRequest<'a> {
    pub fn new(audio: AudioSegment<'a>) -> Self {
        Self {
            audio,
            language: None,
            custom_words: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_custom_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_words.extend(words.into_iter().map(Into::into));
        self
    }
}

/// Recognized text and the language it was recognized in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub language: Option<String>,
}

/// A speech recognizer.
///
/// Implementations own their model; nothing here caches or shares one.
pub trait Transcriber {
    type Error: fmt::Display;

    fn transcribe(&self, request: &TranscriptionRequest<'_>) -> Result<Transcript, Self::Error>;
}

/// Result of [`transcription_diff`].
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionDiff {
    pub transcript: Transcript,
    pub report: DiffReport,
}

/// Transcribe `request` and diff the transcript against `reference`.
///
/// When `differ` has no language of its own, the detected language of the
/// transcript (or else the request's hint) selects the normalization rules,
/// so English presets never rewrite text in another language. Recognizer
/// failures become [`DiffError::Transcription`].
pub fn transcription_diff<T>(
    transcriber: &T,
    differ: &TranscriptDiffer,
    reference: &str,
    request: &TranscriptionRequest<'_>,
) -> Result<TranscriptionDiff, DiffError>
where
    T: Transcriber + ?Sized,
{
    let start = Instant::now();
    let duration_secs = request.audio.duration_secs();
    if duration_secs > MAX_SEGMENT_SECONDS {
        warn!(
            duration_secs,
            max_secs = MAX_SEGMENT_SECONDS,
            "audio_segment_exceeds_window"
        );
    }

    let transcript = match transcriber.transcribe(request) {
        Ok(transcript) => transcript,
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "transcription_failure");
            return Err(DiffError::Transcription(err.to_string()));
        }
    };

    let language = transcript
        .language
        .as_deref()
        .or(request.language.as_deref())
        .filter(|tag| !tag.trim().is_empty());
    let report = match language {
        Some(tag) if differ.normalizer().config().language.is_none() => {
            differ.for_language(tag)?.report(reference, &transcript.text)
        }
        _ => differ.report(reference, &transcript.text),
    };
    info!(
        language = ?transcript.language,
        duration_secs,
        word_error_rate = report.stats.word_error_rate(),
        elapsed_micros = start.elapsed().as_micros(),
        "transcription_diff_success"
    );

    Ok(TranscriptionDiff { transcript, report })
}
