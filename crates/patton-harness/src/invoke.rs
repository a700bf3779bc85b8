//! Spawning the tool under test and capturing its stdout.
//!
//! Two invocation shapes exist. Argument-mode puts the search term on the
//! command line; stdin-mode passes `-` and streams a multi-line listing to
//! the child's stdin. Both pipe stdout and capture it line-by-line, inherit
//! stderr, and reap the child before returning, so assertions always see a
//! complete capture.
//!
//! A non-zero exit is recorded, never fatal on its own: the tool may
//! legitimately exit non-zero when nothing matches, and the scenario's
//! assertions decide. Failure to spawn, write, read, or wait is a
//! [`StepError::Harness`].

use crate::context::{CapturedOutput, SearchParams};
use crate::error::{StepError, StepResult};
use crate::settings::HarnessSettings;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

/// Runs an argument-mode search: `binary -d DB -t TYPE -v VERSION TERM`.
///
/// All parameter values travel verbatim; the tool decides what an empty
/// field means. Nothing is written to the child's stdin.
pub fn search_by_argument(
    settings: &HarnessSettings,
    params: &SearchParams,
) -> StepResult<CapturedOutput> {
    let child = Command::new(settings.binary.as_std_path())
        .arg("-d")
        .arg(settings.database.as_std_path())
        .args(["-t", &params.search_type, "-v", &params.version])
        .arg(&params.search_term)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|err| StepError::harness_io(format!("spawn {}", settings.binary), err))?;

    collect(child)
}

/// Runs a stdin-mode search: `binary -d DB -t TYPE -`, with the search term
/// (a raw package-manager listing) written once to the child's stdin.
pub fn search_via_stdin(
    settings: &HarnessSettings,
    params: &SearchParams,
) -> StepResult<CapturedOutput> {
    let mut child = Command::new(settings.binary.as_std_path())
        .arg("-d")
        .arg(settings.database.as_std_path())
        .args(["-t", &params.search_type, "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|err| StepError::harness_io(format!("spawn {}", settings.binary), err))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| StepError::harness("child stdin was not piped"))?;
    let listing = params.search_term.clone();

    // Feed the listing from its own thread so a child that writes before it
    // reads cannot deadlock against a full stdin pipe. Dropping the handle
    // closes the pipe and the child sees end-of-input.
    let writer = std::thread::spawn(move || stdin.write_all(listing.as_bytes()));

    let captured = collect(child);

    match writer.join() {
        Ok(Ok(())) => {}
        // A child may exit without draining stdin; its output and exit code
        // still decide the scenario.
        Ok(Err(err)) if err.kind() == std::io::ErrorKind::BrokenPipe => {}
        Ok(Err(err)) => return Err(StepError::harness_io("write child stdin", err)),
        Err(_) => return Err(StepError::harness("stdin writer thread panicked")),
    }

    captured
}

/// Streams the child's stdout line-by-line, then reaps it.
///
/// Lines are captured newline-stripped in emission order. `BufReader` grows
/// its buffer per line, so a single arbitrarily long line streams without a
/// cap or a deadlock.
fn collect(mut child: Child) -> StepResult<CapturedOutput> {
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| StepError::harness("child stdout was not piped"))?;

    let mut captured = CapturedOutput::default();
    for line in BufReader::new(stdout).lines() {
        let line = line.map_err(|err| StepError::harness_io("read child stdout", err))?;
        captured.stdout.push(line);
    }

    let status = child
        .wait()
        .map_err(|err| StepError::harness_io("wait for child", err))?;
    // Killed-by-signal carries no code; fold it to a generic failure.
    captured.exit_code = Some(status.code().unwrap_or(-1));

    Ok(captured)
}
