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

//! Best-practice analysis of parsed zones.
//!
//! [`analyze`] checks each zone against a fixed list of rules:
//!
//! 1. A zone should not have exactly one MX record (no backup mail
//!    exchanger).
//! 2. Records should not have TTLs below 300 seconds.
//! 3. A zone should have a `www` A or CNAME record.
//! 4. A zone should publish SPF.
//! 5. A zone should publish DMARC at `_dmarc`.
//! 6. A zone should be signed with DNSSEC (DNSKEY or DS present).
//!
//! Each rule produces [`Finding`]s with a fixed [`Severity`]. Findings
//! are returned in evaluation order (zone by zone, rule by rule), not
//! by severity; [`render`] does the grouping by severity when producing
//! the Markdown report.

use std::fmt;
use std::str::FromStr;

mod report;
mod rules;

pub use report::{render, NO_ISSUES};
pub use rules::LOW_TTL_THRESHOLD;

use crate::zone::Zone;

////////////////////////////////////////////////////////////////////////
// SEVERITIES                                                         //
////////////////////////////////////////////////////////////////////////

/// The severity of a [`Finding`].
///
/// Severities are ordered from least to most severe, so
/// `Severity::High > Severity::Low`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// All severities, most severe first. This is the order in which
    /// the report presents them.
    pub const DESCENDING: [Severity; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the heading of this severity's section in the report.
    pub fn heading(self) -> &'static str {
        match self {
            Self::High => "Critical Issues",
            Self::Medium => "Important Recommendations",
            Self::Low => "Minor Suggestions",
        }
    }
}

impl FromStr for Severity {
    type Err = &'static str;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.eq_ignore_ascii_case("high") {
            Ok(Self::High)
        } else if text.eq_ignore_ascii_case("medium") {
            Ok(Self::Medium)
        } else if text.eq_ignore_ascii_case("low") {
            Ok(Self::Low)
        } else {
            Err("expected high, medium, or low")
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::High => f.write_str("high"),
            Self::Medium => f.write_str("medium"),
            Self::Low => f.write_str("low"),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// FINDINGS                                                           //
////////////////////////////////////////////////////////////////////////

/// One issue found by [`analyze`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Finding {
    issue_type: String,
    severity: Severity,
    description: String,
    recommendation: String,
}

impl Finding {
    /// Creates a new [`Finding`].
    pub fn new(
        issue_type: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            issue_type: issue_type.into(),
            severity,
            description: description.into(),
            recommendation: recommendation.into(),
        }
    }

    /// Returns the short category label, e.g. `Missing SPF`.
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }
}

/// Checks `zones` against all rules. Zones are processed in order, and
/// for each zone the rules run in the order listed in the
/// [module-level documentation](self).
pub fn analyze(zones: &[Zone]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for zone in zones {
        for rule in rules::RULES {
            rule(zone, &mut findings);
        }
    }
    findings
}

////////////////////////////////////////////////////////////////////////
// SUMMARIES                                                          //
////////////////////////////////////////////////////////////////////////

/// The number of findings at each severity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Summary {
    /// Counts `findings` by severity.
    pub fn of(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }

    /// Returns the number of findings at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    /// Returns the total number of findings.
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    /// Returns the most severe level with at least one finding.
    pub fn highest(&self) -> Option<Severity> {
        Severity::DESCENDING
            .into_iter()
            .find(|&severity| self.count(severity) > 0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} high, {} medium, {} low",
            self.high, self.medium, self.low
        )
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone_file;

    fn issue_types(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(Finding::issue_type).collect()
    }

    #[test]
    fn empty_zone_reports_absences_only() {
        let findings = analyze(&[Zone::new("example.com", Vec::new())]);
        assert_eq!(
            issue_types(&findings),
            [
                "Missing www Record",
                "Missing SPF",
                "Missing DMARC",
                "DNSSEC Not Implemented",
            ]
        );
        let severities: Vec<Severity> = findings.iter().map(Finding::severity).collect();
        assert_eq!(
            severities,
            [Severity::Low, Severity::High, Severity::Medium, Severity::Medium]
        );
    }

    #[test]
    fn single_mx_is_reported_once() {
        let zone = zone_file::parse(
            "$ORIGIN example.com.\n\
             @ IN MX 10 mail.example.com.\n\
             www IN A 192.0.2.1\n\
             mail IN A 192.0.2.2\n",
        );
        let findings = analyze(&[zone]);
        let backup: Vec<&Finding> = findings
            .iter()
            .filter(|f| f.issue_type() == "Backup Email Server")
            .collect();
        assert_eq!(backup.len(), 1);
        assert_eq!(backup[0].severity(), Severity::Medium);
    }

    #[test]
    fn low_ttl_from_parsed_record_is_reported() {
        let zone = zone_file::parse("$ORIGIN example.com.\nshort 100 IN A 192.0.2.1\n");
        let findings = analyze(&[zone]);
        let low_ttl = findings
            .iter()
            .find(|f| f.issue_type() == "Low TTL")
            .unwrap();
        assert_eq!(low_ttl.severity(), Severity::Low);
        assert!(low_ttl.description().contains("short"));
    }

    #[test]
    fn well_configured_zone_has_no_findings() {
        let zone = zone_file::parse(
            "$ORIGIN example.com.\n\
             $TTL 3600\n\
             @      IN MX  10 mx1.example.com.\n\
             @      IN MX  20 mx2.example.com.\n\
             www    IN A   192.0.2.1\n\
             @      IN TXT \"v=spf1 mx -all\"\n\
             _dmarc IN TXT \"v=DMARC1; p=reject\"\n\
             @      IN DS  12345 13 2 0123456789abcdef\n",
        );
        assert!(analyze(&[zone]).is_empty());
    }

    #[test]
    fn findings_follow_zone_order() {
        let a = Zone::new("a.test", Vec::new());
        let b = Zone::new("b.test", Vec::new());
        let findings = analyze(&[a, b]);
        assert_eq!(findings.len(), 8);
        assert!(findings[..4].iter().all(|f| f.description().contains("a.test")));
        assert!(findings[4..].iter().all(|f| f.description().contains("b.test")));
    }

    #[test]
    fn severity_order_and_parsing() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert_eq!("HIGH".parse::<Severity>(), Ok(Severity::High));
        assert_eq!("low".parse::<Severity>(), Ok(Severity::Low));
        assert!("critical".parse::<Severity>().is_err());
        assert_eq!(Severity::Medium.to_string(), "medium");
    }

    #[test]
    fn summary_counts_by_severity() {
        let findings = analyze(&[Zone::new("example.com", Vec::new())]);
        let summary = Summary::of(&findings);
        assert_eq!(
            summary,
            Summary {
                high: 1,
                medium: 2,
                low: 1
            }
        );
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.highest(), Some(Severity::High));
        assert_eq!(summary.to_string(), "1 high, 2 medium, 1 low");
        assert_eq!(Summary::default().highest(), None);
    }
}
