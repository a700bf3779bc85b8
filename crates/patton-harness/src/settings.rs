//! Harness configuration from the environment.

use camino::Utf8PathBuf;

/// Environment variable naming the tool-under-test binary.
pub const BINARY_ENV: &str = "PATTON_BINARY";
/// Environment variable naming the tool's advisory database.
pub const DATABASE_ENV: &str = "PATTON_DATABASE";

pub const DEFAULT_BINARY: &str = "patton";
pub const DEFAULT_DATABASE: &str = "patton.db.zst";

/// Where the tool under test lives.
///
/// Read once at harness construction and immutable for the process
/// lifetime. Both paths are handed to the tool verbatim; existence is
/// nobody's problem until spawn time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessSettings {
    pub binary: Utf8PathBuf,
    pub database: Utf8PathBuf,
}

impl HarnessSettings {
    pub fn new(binary: impl Into<Utf8PathBuf>, database: impl Into<Utf8PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            database: database.into(),
        }
    }

    /// Reads `PATTON_BINARY` and `PATTON_DATABASE`, falling back to
    /// `patton` and `patton.db.zst` in the working directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            binary: lookup(BINARY_ENV)
                .unwrap_or_else(|| DEFAULT_BINARY.to_owned())
                .into(),
            database: lookup(DATABASE_ENV)
                .unwrap_or_else(|| DEFAULT_DATABASE.to_owned())
                .into(),
        }
    }
}
