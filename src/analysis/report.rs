// Copyright 2022 Matthew Ingwersen.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Rendering of findings as a Markdown report.

use std::fmt::Write;

use super::{Finding, Severity};

/// The entire report when there are no findings.
pub const NO_ISSUES: &str = "No issues detected. Your DNS configuration follows best practices.";

/// Renders `findings` as a Markdown report.
///
/// Findings are grouped into one section per severity, most severe
/// first, keeping their relative order within a section. Sections with
/// no findings are left out. If there are no findings at all, the
/// report is just [`NO_ISSUES`].
pub fn render(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return NO_ISSUES.to_owned();
    }

    let mut report = String::from("# DNS Best Practices Analysis Report\n\n");
    for severity in Severity::DESCENDING {
        let mut section = findings.iter().filter(|f| f.severity() == severity).peekable();
        if section.peek().is_none() {
            continue;
        }
        write!(report, "## {}\n\n", severity.heading()).unwrap();
        for finding in section {
            write!(
                report,
                "### {}\n{}\n\n**Recommendation:** {}\n\n",
                finding.issue_type(),
                finding.description(),
                finding.recommendation(),
            )
            .unwrap();
        }
    }
    report
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn make_finding(issue_type: &str, severity: Severity) -> Finding {
        Finding::new(
            issue_type,
            severity,
            format!("{issue_type} description."),
            format!("Fix {issue_type}."),
        )
    }

    #[test]
    fn empty_findings_render_no_issues_sentence() {
        assert_eq!(render(&[]), NO_ISSUES);
    }

    #[test]
    fn findings_are_grouped_by_severity() {
        let findings = [
            make_finding("L1", Severity::Low),
            make_finding("H1", Severity::High),
            make_finding("M1", Severity::Medium),
            make_finding("L2", Severity::Low),
        ];
        let expected = "\
# DNS Best Practices Analysis Report

## Critical Issues

### H1
H1 description.

**Recommendation:** Fix H1.

## Important Recommendations

### M1
M1 description.

**Recommendation:** Fix M1.

## Minor Suggestions

### L1
L1 description.

**Recommendation:** Fix L1.

### L2
L2 description.

**Recommendation:** Fix L2.

";
        assert_eq!(render(&findings), expected);
    }

    #[test]
    fn empty_sections_are_omitted() {
        let report = render(&[make_finding("Low TTL", Severity::Low)]);
        assert!(report
            .starts_with("# DNS Best Practices Analysis Report\n\n## Minor Suggestions\n"));
        assert!(!report.contains("## Critical Issues"));
        assert!(!report.contains("## Important Recommendations"));
    }
}
