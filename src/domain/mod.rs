//! Core types: options, separator, diagnostic trace, errors

mod error;
mod options;
mod separator;
mod trace;

pub use error::SlugError;
pub use options::{
    Alphabet, EmojiPolicy, FallbackContext, FallbackFn, FallbackStrategy, Mode, SlugOptions,
    SlugOverrides, StopwordPolicy, SymbolsPolicy, UnknownPolicy,
};
pub use separator::Separator;
pub use trace::{
    NoopRecorder, SlugDetailed, SlugOutcome, SlugStep, StepLog, StepMeta, StepRecorder, Warning,
};
