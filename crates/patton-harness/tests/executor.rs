//! Whole-scenario flows through the executor: parameters in, invocation,
//! assertions over the capture. Mirrors what the cucumber steps do, minus
//! the framework.

use patton_harness::{
    AdvisoryRow, ExecutionContext, HarnessSettings, assertions, invoke,
};
use patton_test_util::FakeTool;

fn advisory(cve: &str) -> AdvisoryRow {
    AdvisoryRow {
        cve: cve.to_owned(),
    }
}

#[test]
fn positive_cpe_scenario_passes() {
    let tool = FakeTool::emitting(&["openssl 1.0.1 CVE-2014-0160"]);
    let settings = HarnessSettings::new(tool.path().to_owned(), "adv.db.zst");

    let mut ctx = ExecutionContext::default();
    ctx.set_search_term("openssl");
    ctx.set_version("1.0.1");
    ctx.set_search_type("cpe");

    ctx.output = invoke::search_by_argument(&settings, &ctx.params)
        .expect("invocation should succeed");

    assertions::each_advisory_listed(&ctx.output, &[advisory("CVE-2014-0160")])
        .expect("the listed advisory is in the capture");
}

#[test]
fn empty_result_fails_with_zero_matches() {
    // The tool exits non-zero with nothing on stdout, as a real search with
    // no hits would. The assertion, not the exit code, fails the scenario.
    let tool = FakeTool::exiting(1, &[]);
    let settings = HarnessSettings::new(tool.path().to_owned(), "adv.db.zst");

    let mut ctx = ExecutionContext::default();
    ctx.set_search_term("nonexistent-package-xyz");
    ctx.set_version("0.0.0");
    ctx.set_search_type("cpe");

    ctx.output = invoke::search_by_argument(&settings, &ctx.params)
        .expect("a fruitless search is still a successful invocation");
    assert_eq!(ctx.output.exit_code, Some(1));

    let err = assertions::each_advisory_listed(&ctx.output, &[advisory("CVE-2014-0160")])
        .expect_err("nothing was captured");
    assert!(err.is_assertion());
    assert_eq!(err.to_string(), "Only 0 matches");
}

#[test]
fn a_second_invocation_replaces_the_capture() {
    let first = FakeTool::emitting(&["first run line"]);
    let second = FakeTool::emitting(&["second run line"]);

    let mut ctx = ExecutionContext::default();
    ctx.set_search_term("openssl");
    ctx.set_search_type("cpe");

    let settings = HarnessSettings::new(first.path().to_owned(), "adv.db.zst");
    ctx.output =
        invoke::search_by_argument(&settings, &ctx.params).expect("first invocation succeeds");

    let settings = HarnessSettings::new(second.path().to_owned(), "adv.db.zst");
    ctx.output =
        invoke::search_by_argument(&settings, &ctx.params).expect("second invocation succeeds");

    assert_eq!(ctx.output.stdout, vec!["second run line"]);
}
