//! Step failure taxonomy.

use thiserror::Error;

/// Why a step failed.
///
/// `Harness` means the test could not be run at all: the subprocess would
/// not spawn, a pipe broke, a data table was malformed. `Assertion` means
/// the tool ran and its output did not meet the scenario's expectations.
/// The distinction matters when triaging a red suite: harness errors are
/// never the tool's fault.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("harness error: {0}")]
    Harness(String),

    #[error("{0}")]
    Assertion(String),
}

impl StepError {
    pub fn harness(message: impl Into<String>) -> Self {
        Self::Harness(message.into())
    }

    /// Harness error wrapping an I/O failure, with the failing operation named.
    pub fn harness_io(context: impl Into<String>, err: std::io::Error) -> Self {
        Self::Harness(format!("{}: {err}", context.into()))
    }

    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }

    pub fn is_harness(&self) -> bool {
        matches!(self, Self::Harness(_))
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }
}

pub type StepResult<T = ()> = Result<T, StepError>;
