//! Containment assertions over captured output.
//!
//! Matching is case-sensitive raw substring containment: no tokenisation,
//! no regex, no awareness of the tool's output columns. That keeps the
//! harness independent of the tool's output format, at a price:
//! `CVE-2020-1` matches a line containing `CVE-2020-10`. Scenario authors
//! must pick advisory identifiers that are unambiguous in the expected
//! output.

use crate::context::CapturedOutput;
use crate::error::{StepError, StepResult};
use crate::table::{AdvisoryRow, PackageAdvisoryRow};

/// Every listed advisory must appear in at least one captured line.
///
/// Fails with the observed match count versus the expected row count.
pub fn each_advisory_listed(output: &CapturedOutput, rows: &[AdvisoryRow]) -> StepResult {
    let matched = rows
        .iter()
        .filter(|row| output.stdout.iter().any(|line| line.contains(&row.cve)))
        .count();

    if matched < rows.len() {
        return Err(StepError::assertion(format!("Only {matched} matches")));
    }

    Ok(())
}

/// Every row must have a single captured line containing both its package
/// name and its advisory identifier.
pub fn each_package_advisory_listed(
    output: &CapturedOutput,
    rows: &[PackageAdvisoryRow],
) -> StepResult {
    for row in rows {
        if !line_names_both(output, row) {
            return Err(StepError::assertion(format!(
                "vulnerability {:?} for package {:?} not found",
                row.cve, row.package
            )));
        }
    }

    Ok(())
}

/// No row may have a captured line containing both its package name and its
/// advisory identifier.
pub fn no_package_advisory_listed(
    output: &CapturedOutput,
    rows: &[PackageAdvisoryRow],
) -> StepResult {
    for row in rows {
        if line_names_both(output, row) {
            return Err(StepError::assertion(format!(
                "false positive {:?} for package {:?} found",
                row.cve, row.package
            )));
        }
    }

    Ok(())
}

fn line_names_both(output: &CapturedOutput, row: &PackageAdvisoryRow) -> bool {
    output
        .stdout
        .iter()
        .any(|line| line.contains(&row.package) && line.contains(&row.cve))
}
