//! Black-box acceptance harness for the `patton` vulnerability-search CLI.
//!
//! The tool under test is driven as a subprocess. Given steps accumulate
//! search parameters, a When step spawns the tool in argument-mode or
//! stdin-mode and captures its stdout line-by-line, and Then steps evaluate
//! substring-containment assertions against the capture. The cucumber
//! wiring lives in `tests/bdd.rs`; this crate is the executor it drives.
//!
//! The tool itself is opaque: its output format is never parsed beyond
//! containment, its exit code is recorded but never fatal on its own, and
//! its binary and database are supplied through `PATTON_BINARY` and
//! `PATTON_DATABASE`.

#![forbid(unsafe_code)]

pub mod assertions;
pub mod context;
pub mod error;
pub mod invoke;
pub mod settings;
pub mod table;

pub use context::{CapturedOutput, ExecutionContext, SearchParams};
pub use error::{StepError, StepResult};
pub use settings::HarnessSettings;
pub use table::{AdvisoryRow, PackageAdvisoryRow};
