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

//! The best-practice rules.
//!
//! Each rule looks at one zone and appends zero or more findings. The
//! rules are independent of each other and always run in the order of
//! [`RULES`].

use super::{Finding, Severity};
use crate::rr::{Ttl, Type};
use crate::zone::Zone;

/// A best-practice rule.
pub(super) type Rule = fn(&Zone, &mut Vec<Finding>);

/// All rules, in evaluation order.
pub(super) const RULES: [Rule; 6] = [
    single_mx,
    low_ttl,
    missing_www,
    missing_spf,
    missing_dmarc,
    missing_dnssec,
];

/// TTLs below this many seconds are reported as low.
pub const LOW_TTL_THRESHOLD: Ttl = Ttl::from_secs(300);

/// A zone with exactly one MX record has no backup mail exchanger.
/// Zones with no MX records at all are not reported.
fn single_mx(zone: &Zone, findings: &mut Vec<Finding>) {
    if zone.records_of_type(&Type::MX).count() == 1 {
        findings.push(Finding::new(
            "Backup Email Server",
            Severity::Medium,
            format!(
                "Only one MX record found for {}. This creates a single point of failure \
                 for email delivery.",
                zone.domain(),
            ),
            "Add at least one backup MX record with a higher preference value.",
        ));
    }
}

/// Every record with an explicit TTL below [`LOW_TTL_THRESHOLD`] is
/// reported.
fn low_ttl(zone: &Zone, findings: &mut Vec<Finding>) {
    for record in zone.records() {
        if let Some(ttl) = record.ttl.filter(|&ttl| ttl < LOW_TTL_THRESHOLD) {
            findings.push(Finding::new(
                "Low TTL",
                Severity::Low,
                format!(
                    "Record {} has a very low TTL ({}s).",
                    record.display_name(),
                    ttl,
                ),
                "Consider increasing TTL to at least 300s (5 minutes) to reduce DNS query load.",
            ));
        }
    }
}

fn missing_www(zone: &Zone, findings: &mut Vec<Finding>) {
    let qualified = format!("www.{}", zone.domain());
    let has_www = zone.records().iter().any(|record| {
        (record.name == "www" || record.name == qualified)
            && (record.rr_type == Type::A || record.rr_type == Type::CNAME)
    });
    if !has_www {
        findings.push(Finding::new(
            "Missing www Record",
            Severity::Low,
            format!("No www record found for {}.", zone.domain()),
            "Consider adding a www record (A or CNAME) to accommodate users who may type \
             www prefix.",
        ));
    }
}

/// SPF may be published either in a TXT record (the modern way) or in
/// the obsolete SPF record type.
fn missing_spf(zone: &Zone, findings: &mut Vec<Finding>) {
    let has_spf = zone.records().iter().any(|record| {
        (record.rr_type == Type::TXT && record.data.iter().any(|d| d.contains("v=spf1")))
            || record.rr_type == Type::SPF
    });
    if !has_spf {
        findings.push(Finding::new(
            "Missing SPF",
            Severity::High,
            format!("No SPF record found for {}.", zone.domain()),
            "Add an SPF record to prevent email spoofing and improve deliverability.",
        ));
    }
}

/// Only a TXT record owned by exactly `_dmarc` (relative to the origin)
/// counts.
fn missing_dmarc(zone: &Zone, findings: &mut Vec<Finding>) {
    let has_dmarc = zone.records_of_type(&Type::TXT).any(|record| {
        record.name == "_dmarc" && record.data.iter().any(|d| d.contains("v=DMARC1"))
    });
    if !has_dmarc {
        findings.push(Finding::new(
            "Missing DMARC",
            Severity::Medium,
            format!("No DMARC record found for {}.", zone.domain()),
            "Add a DMARC record to improve email security and deliverability.",
        ));
    }
}

/// A zone is taken to be signed if it has a DNSKEY or a DS record.
fn missing_dnssec(zone: &Zone, findings: &mut Vec<Finding>) {
    if !zone.has_type(&Type::DNSKEY) && !zone.has_type(&Type::DS) {
        findings.push(Finding::new(
            "DNSSEC Not Implemented",
            Severity::Medium,
            format!(
                "DNSSEC does not appear to be implemented for {}.",
                zone.domain(),
            ),
            "Consider implementing DNSSEC to protect against DNS spoofing and cache \
             poisoning attacks.",
        ));
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
