//! Diagnostic records produced while building a slug.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Stage-specific metadata attached to a step.
pub type StepMeta = BTreeMap<&'static str, Value>;

/// One pipeline stage: its name, what went in and what came out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlugStep {
    pub op: &'static str,
    pub before: String,
    pub after: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: StepMeta,
}

/// A non-fatal anomaly noticed while building a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Warning {
    /// Locale-aware word segmentation was unavailable
    SegmenterUnavailable,
    /// At least one character was encoded as a `u<hex>` token
    UnknownScriptHexEncoded,
    /// No usable slug survived; the fallback generator produced it
    FellBack,
}

impl Warning {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SegmenterUnavailable => "segmenter-unavailable",
            Self::UnknownScriptHexEncoded => "unknown-script-hex-encoded",
            Self::FellBack => "fell-back",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for pipeline steps.
///
/// The pipeline asks [`enabled`](StepRecorder::enabled) before building a
/// step, so a disabled recorder costs nothing beyond the check.
pub trait StepRecorder {
    fn enabled(&self) -> bool {
        true
    }

    fn record(&mut self, step: SlugStep);
}

/// Recorder that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecorder;

impl StepRecorder for NoopRecorder {
    fn enabled(&self) -> bool {
        false
    }

    fn record(&mut self, _step: SlugStep) {}
}

/// Recorder that keeps every step in order.
#[derive(Debug, Default, Clone)]
pub struct StepLog {
    steps: Vec<SlugStep>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[SlugStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<SlugStep> {
        self.steps
    }
}

impl StepRecorder for StepLog {
    fn record(&mut self, step: SlugStep) {
        log::debug!("slug step {}: {:?} -> {:?}", step.op, step.before, step.after);
        self.steps.push(step);
    }
}

/// What the pipeline hands back besides the steps.
#[derive(Debug, Clone, PartialEq)]
pub struct SlugOutcome {
    pub slug: String,
    /// Tokens as they stood when they were joined
    pub tokens: Vec<String>,
    pub warnings: Vec<Warning>,
}

/// Full result of [`crate::slug_detailed`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlugDetailed {
    pub input: String,
    pub slug: String,
    pub tokens: Vec<String>,
    pub warnings: Vec<Warning>,
    pub steps: Vec<SlugStep>,
}
