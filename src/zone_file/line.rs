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

//! Classification of physical zone file lines.

use super::directive::{parse_directive, Directive};
use super::record::{has_owner_field, match_record, RecordLine};

/// The kind of a single physical line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum LineKind<'a> {
    Blank,
    Comment,
    Directive(Directive<'a>),
    Soa,
    ApexNs,
    Record(RecordLine<'a>),
    Unrecognized,
}

/// Classifies `line`.
///
/// The checks are made in a fixed order; the first that applies wins.
/// Note that the SOA and apex NS checks are substring tests on the
/// whole line. SOA records are never converted, and NS records are
/// only converted when they have an explicit owner. This is
/// approximate: an indented line whose data merely contains `NS`
/// (e.g. a `DNSKEY` record) is dropped as well.
pub(super) fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with(';') {
        LineKind::Comment
    } else if trimmed.starts_with('$') {
        LineKind::Directive(parse_directive(trimmed))
    } else if line.contains("SOA") {
        LineKind::Soa
    } else if line.contains("NS") && !has_owner_field(line) {
        LineKind::ApexNs
    } else if let Some(record) = match_record(line) {
        LineKind::Record(record)
    } else {
        LineKind::Unrecognized
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
