//! Human-readable rendering of diff segments.
//!
//! Two layouts are available:
//!
//! - [`RenderStyle::Annotated`] keeps unchanged reference text verbatim and
//!   puts every change on its own marker lines:
//!
//!   ```text
//!   + well
//!   You can go pretty far in life
//!   - when
//!   + if
//!   you're a perfect sphere in a vacuum
//!   ```
//!
//! - [`RenderStyle::Inline`] writes each change in place as
//!   `(hypothesis|reference)`:
//!
//!   ```text
//!   (well|) You can go pretty far in life (if|when) you're a perfect sphere in a vacuum
//!   ```
//!
//! With `color` on, hypothesis text is red and reference text green.

use projector::{DiffSegment, SegmentKind};
use serde::{Deserialize, Serialize};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    Inline,
    #[default]
    Annotated,
}

/// Options for [`render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub style: RenderStyle,
    /// Wrap changed text in ANSI color codes.
    pub color: bool,
    /// Show reference words the hypothesis dropped. When false, removed words
    /// are left out of the output entirely.
    pub show_removed: bool,
    /// Prefix of reference lines in the annotated style.
    pub reference_marker: String,
    /// Prefix of hypothesis lines in the annotated style.
    pub hypothesis_marker: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::Annotated,
            color: false,
            show_removed: true,
            reference_marker: "-".to_string(),
            hypothesis_marker: "+".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_show_removed(mut self, show_removed: bool) -> Self {
        self.show_removed = show_removed;
        self
    }

    fn paint(&self, out: &mut String, color: &str, text: &str) {
        if self.color {
            out.push_str(color);
            out.push_str(text);
            out.push_str(RESET);
        } else {
            out.push_str(text);
        }
    }
}

/// Render `segments` as text according to `cfg`.
pub fn render(segments: &[DiffSegment], cfg: &RenderConfig) -> String {
    match cfg.style {
        RenderStyle::Annotated => render_annotated(segments, cfg),
        RenderStyle::Inline => render_inline(segments, cfg),
    }
}

fn render_annotated(segments: &[DiffSegment], cfg: &RenderConfig) -> String {
    let mut out = String::new();
    let mut after_block = false;

    for segment in segments {
        match segment.kind {
            SegmentKind::Unchanged => {
                let text = if after_block {
                    strip_block_lead(&segment.reference_text)
                } else {
                    segment.reference_text.as_str()
                };
                out.push_str(text);
                after_block = false;
            }
            SegmentKind::Replaced => {
                start_line(&mut out);
                reference_line(&mut out, cfg, segment);
                hypothesis_line(&mut out, cfg, segment);
                after_block = true;
            }
            SegmentKind::Inserted => {
                start_line(&mut out);
                hypothesis_line(&mut out, cfg, segment);
                after_block = true;
            }
            SegmentKind::Removed => {
                if cfg.show_removed {
                    start_line(&mut out);
                    reference_line(&mut out, cfg, segment);
                    after_block = true;
                }
            }
        }
    }

    out
}

fn start_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn reference_line(out: &mut String, cfg: &RenderConfig, segment: &DiffSegment) {
    let words = segment.reference_words().join(" ");
    marker_line(out, cfg, &cfg.reference_marker, GREEN, &words);
}

fn hypothesis_line(out: &mut String, cfg: &RenderConfig, segment: &DiffSegment) {
    let words = segment.hypothesis_words.join(" ");
    marker_line(out, cfg, &cfg.hypothesis_marker, RED, &words);
}

fn marker_line(out: &mut String, cfg: &RenderConfig, marker: &str, color: &str, words: &str) {
    let line = if words.is_empty() {
        marker.to_string()
    } else {
        format!("{marker} {words}")
    };
    cfg.paint(out, color, &line);
    out.push('\n');
}

/// Drop leading horizontal whitespace and at most one line break.
fn strip_block_lead(text: &str) -> &str {
    let text = text.trim_start_matches([' ', '\t']);
    text.strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or(text)
}

fn render_inline(segments: &[DiffSegment], cfg: &RenderConfig) -> String {
    let mut out = String::new();
    // Set after an insertion, which carries no separator of its own.
    let mut needs_gap = false;

    for segment in segments {
        let lead = match segment.kind {
            SegmentKind::Unchanged => segment.reference_text.as_str(),
            // Hidden removals take their separator with them.
            SegmentKind::Removed if !cfg.show_removed => "",
            _ => segment.separator(),
        };
        if needs_gap && !lead.is_empty() && !lead.starts_with(char::is_whitespace) {
            out.push(' ');
        }
        if !lead.is_empty() {
            needs_gap = false;
        }
        out.push_str(lead);

        match segment.kind {
            SegmentKind::Unchanged => {}
            SegmentKind::Removed if !cfg.show_removed => {}
            SegmentKind::Inserted => {
                if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                    out.push(' ');
                }
                inline_change(&mut out, cfg, &segment.hypothesis_text, "");
                needs_gap = true;
            }
            SegmentKind::Replaced | SegmentKind::Removed => {
                inline_change(&mut out, cfg, &segment.hypothesis_text, segment.body());
            }
        }
    }

    out
}

fn inline_change(out: &mut String, cfg: &RenderConfig, hypothesis: &str, reference: &str) {
    out.push('(');
    cfg.paint(out, RED, hypothesis);
    out.push('|');
    cfg.paint(out, GREEN, reference);
    out.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(
        kind: SegmentKind,
        reference_text: &str,
        separator_len: usize,
        hypothesis: &[&str],
    ) -> DiffSegment {
        DiffSegment {
            kind,
            reference_text: reference_text.to_string(),
            separator_len,
            reference_span: 0..reference_text.len(),
            hypothesis_words: hypothesis.iter().map(|w| w.to_string()).collect(),
            hypothesis_text: hypothesis.join(" "),
        }
    }

    fn sphere() -> Vec<DiffSegment> {
        vec![
            segment(SegmentKind::Inserted, "", 0, &["well"]),
            segment(SegmentKind::Unchanged, "You can go pretty far in life", 0, &[]),
            segment(SegmentKind::Replaced, " when", 1, &["if"]),
            segment(SegmentKind::Unchanged, " you're a perfect sphere in a vacuum", 1, &[]),
        ]
    }

    #[test]
    fn annotated_layout() {
        let out = render(&sphere(), &RenderConfig::default());
        assert_eq!(
            out,
            "+ well\nYou can go pretty far in life\n- when\n+ if\nyou're a perfect sphere in a vacuum"
        );
    }

    #[test]
    fn inline_layout() {
        let cfg = RenderConfig::default().with_style(RenderStyle::Inline);
        let out = render(&sphere(), &cfg);
        assert_eq!(
            out,
            "(well|) You can go pretty far in life (if|when) you're a perfect sphere in a vacuum"
        );
    }

    #[test]
    fn inline_colors_wrap_both_sides() {
        let cfg = RenderConfig::default()
            .with_style(RenderStyle::Inline)
            .with_color(true);
        let segments = vec![segment(SegmentKind::Replaced, "when", 0, &["if"])];
        assert_eq!(
            render(&segments, &cfg),
            "(\x1b[31mif\x1b[0m|\x1b[32mwhen\x1b[0m)"
        );
    }

    #[test]
    fn annotated_colors_whole_marker_line() {
        let cfg = RenderConfig::default().with_color(true);
        let segments = vec![segment(SegmentKind::Removed, "gone", 0, &[])];
        assert_eq!(render(&segments, &cfg), "\x1b[32m- gone\x1b[0m\n");
    }

    #[test]
    fn hidden_removals_leave_no_trace() {
        let segments = vec![
            segment(SegmentKind::Unchanged, "this is", 0, &[]),
            segment(SegmentKind::Removed, " - really", 3, &[]),
            segment(SegmentKind::Unchanged, " fine", 1, &[]),
        ];
        let hidden = RenderConfig::default().with_show_removed(false);
        assert_eq!(render(&segments, &hidden), "this is fine");

        let inline_hidden = hidden.clone().with_style(RenderStyle::Inline);
        assert_eq!(render(&segments, &inline_hidden), "this is fine");

        let shown = RenderConfig::default();
        assert_eq!(render(&segments, &shown), "this is\n- really\nfine");
    }

    #[test]
    fn inline_hidden_removal_keeps_single_gap() {
        let cfg = RenderConfig::default()
            .with_style(RenderStyle::Inline)
            .with_show_removed(false);
        let segments = vec![
            segment(SegmentKind::Unchanged, "keep", 0, &[]),
            segment(SegmentKind::Removed, " gone", 1, &[]),
            segment(SegmentKind::Inserted, "", 0, &["new"]),
            segment(SegmentKind::Unchanged, " end", 1, &[]),
        ];
        assert_eq!(render(&segments, &cfg), "keep (new|) end");
    }

    #[test]
    fn block_lead_strips_one_line_break() {
        assert_eq!(strip_block_lead("  \nnext"), "next");
        assert_eq!(strip_block_lead("\n\nnext"), "\nnext");
        assert_eq!(strip_block_lead(" \r\nnext"), "next");
        assert_eq!(strip_block_lead("next"), "next");
    }

    #[test]
    fn custom_markers() {
        let cfg = RenderConfig {
            reference_marker: "REF:".into(),
            hypothesis_marker: "ASR:".into(),
            ..Default::default()
        };
        let segments = vec![segment(SegmentKind::Replaced, "when", 0, &["if"])];
        assert_eq!(render(&segments, &cfg), "REF: when\nASR: if\n");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: RenderConfig =
            serde_json::from_str(r#"{"style": "inline", "color": true}"#).expect("parse");
        assert_eq!(cfg.style, RenderStyle::Inline);
        assert!(cfg.color);
        assert!(cfg.show_removed);
        assert_eq!(cfg.reference_marker, "-");
    }
}
