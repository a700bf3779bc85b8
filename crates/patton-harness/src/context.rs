//! Per-scenario mutable state.

/// Parameters accumulated by the Given steps and consumed by an invocation.
///
/// Values are verbatim scenario text; empty strings travel to the tool
/// as-is and the tool decides validity. Later writes to a field overwrite
/// earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// A package name, or the raw multi-line output of a package manager.
    pub search_term: String,
    pub version: String,
    /// Package manager dialect (`dpkg`, `rpm`, ...); informational.
    pub distro: String,
    /// How the tool should interpret the input (`cpe`, `wp-plugin`, ...).
    pub search_type: String,
}

/// What the tool under test produced.
///
/// Stdout lines are newline-stripped, in emission order. The exit code is
/// unset until the child has been reaped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: Vec<String>,
    pub exit_code: Option<i32>,
}

/// Scenario-scoped state: one set of search parameters, one capture.
///
/// One context exists per scenario and is dropped with it; no state crosses
/// scenario boundaries.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    pub params: SearchParams,
    pub output: CapturedOutput,
}

impl ExecutionContext {
    /// Returns both sub-records to their empty initial state.
    pub fn reset(&mut self) {
        self.params = SearchParams::default();
        self.output = CapturedOutput::default();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.params.search_term = term.into();
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.params.version = version.into();
    }

    pub fn set_distro(&mut self, distro: impl Into<String>) {
        self.params.distro = distro.into();
    }

    pub fn set_search_type(&mut self, search_type: impl Into<String>) {
        self.params.search_type = search_type.into();
    }

    pub fn append_stdout_line(&mut self, line: impl Into<String>) {
        self.output.stdout.push(line.into());
    }

    pub fn set_exit_code(&mut self, code: i32) {
        self.output.exit_code = Some(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_total() {
        let mut ctx = ExecutionContext::default();
        ctx.set_search_term("openssl");
        ctx.set_version("1.0.1");
        ctx.set_distro("dpkg");
        ctx.set_search_type("cpe");
        ctx.append_stdout_line("openssl 1.0.1 CVE-2014-0160");
        ctx.set_exit_code(2);

        ctx.reset();

        assert_eq!(ctx.params, SearchParams::default());
        assert_eq!(ctx.output, CapturedOutput::default());
    }

    #[test]
    fn later_writes_overwrite_earlier_ones() {
        let mut ctx = ExecutionContext::default();
        ctx.set_search_term("openssl");
        ctx.set_search_term("zlib");
        assert_eq!(ctx.params.search_term, "zlib");
    }

    #[test]
    fn appended_lines_keep_emission_order() {
        let mut ctx = ExecutionContext::default();
        ctx.append_stdout_line("first");
        ctx.append_stdout_line("second");
        ctx.append_stdout_line("third");
        assert_eq!(ctx.output.stdout, vec!["first", "second", "third"]);
    }

    #[test]
    fn exit_code_is_unset_before_any_invocation() {
        let ctx = ExecutionContext::default();
        assert_eq!(ctx.output.exit_code, None);
    }
}
