//! Decoding of scenario data tables.
//!
//! The first row of every table is a header and is skipped. Two shapes are
//! recognized: a single advisory column, and a package/version/advisory
//! triple where only columns 0 and 2 matter to the harness.

use crate::error::{StepError, StepResult};

/// A row of a CVE-only table: one advisory identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvisoryRow {
    pub cve: String,
}

/// A row of a package-advisory table.
///
/// Column 0 names the package, column 2 the advisory. Column 1 (typically
/// a version) and anything beyond column 2 are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageAdvisoryRow {
    pub package: String,
    pub cve: String,
}

/// Decodes a CVE-only table, skipping the header row.
pub fn advisory_rows(rows: &[Vec<String>]) -> StepResult<Vec<AdvisoryRow>> {
    rows.iter()
        .skip(1)
        .map(|row| {
            let cve = row
                .first()
                .ok_or_else(|| StepError::harness("table row has no advisory column"))?;
            Ok(AdvisoryRow { cve: cve.clone() })
        })
        .collect()
}

/// Decodes a package-advisory table, skipping the header row.
///
/// A row shorter than three columns is a feature-file authoring mistake and
/// surfaces as a harness error, not an assertion failure.
pub fn package_advisory_rows(rows: &[Vec<String>]) -> StepResult<Vec<PackageAdvisoryRow>> {
    rows.iter()
        .skip(1)
        .map(|row| {
            if row.len() < 3 {
                return Err(StepError::harness(format!(
                    "table row {row:?} needs package and advisory columns"
                )));
            }
            Ok(PackageAdvisoryRow {
                package: row[0].clone(),
                cve: row[2].clone(),
            })
        })
        .collect()
}
