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

//! Permissive parsing of BIND-style zone files.
//!
//! This module extracts what it can from a zone file and silently
//! drops the rest. It is not a validator and does not implement the
//! full [RFC 1035 § 5] grammar: there is no support for parentheses
//! spanning several lines, `$INCLUDE`, escape sequences, or classes
//! other than `IN`. Each physical line is classified on its own (see
//! the `line` module) into one of a small set of kinds, and only lines
//! shaped like resource records produce [`Record`]s.
//!
//! Two bits of state carry across lines. The zone's domain comes from
//! the first `$ORIGIN` directive in the file (see [`find_origin`]),
//! falling back to [`DEFAULT_DOMAIN`](crate::zone::DEFAULT_DOMAIN).
//! The most recent `$TTL` directive supplies the TTL of records that
//! do not state one. An empty or `@` owner always means the zone apex;
//! it does *not* repeat the previous record's owner.
//!
//! [`parse`] returns a whole [`Zone`]. For line-by-line access,
//! including the reason each dropped line was dropped, iterate over a
//! [`Parser`]:
//!
//! ```
//! use bindform::zone_file::{Ignored, LineContent, Parser};
//!
//! const ZONE_FILE: &str = "\
//! $ORIGIN example.com.
//! $TTL 86400
//! @   IN SOA ns1 admin 123 3600 900 86400 3600
//!     IN NS ns1
//! ns1 IN A 127.0.0.1
//! ";
//!
//! let kinds: Vec<_> = Parser::new(ZONE_FILE).map(|line| line.content).collect();
//! assert!(matches!(kinds[0], LineContent::Ignored(Ignored::Directive)));
//! assert!(matches!(kinds[2], LineContent::Ignored(Ignored::Soa)));
//! assert!(matches!(kinds[3], LineContent::Ignored(Ignored::ApexNs)));
//! match &kinds[4] {
//!     LineContent::Record(record) => {
//!         assert_eq!(record.name, "ns1");
//!         assert_eq!(u32::from(record.ttl.unwrap()), 86400);
//!     }
//!     _ => panic!(),
//! }
//! ```
//!
//! [RFC 1035 § 5]: https://datatracker.ietf.org/doc/html/rfc1035#section-5

use std::fmt;
use std::iter::Enumerate;
use std::str::Lines;

use log::{debug, trace, warn};

use crate::rr::{Record, Ttl};
use crate::zone::Zone;

mod directive;
mod line;
mod record;

use directive::Directive;
pub use directive::find_origin;
use line::{classify, LineKind};
use record::RecordLine;

////////////////////////////////////////////////////////////////////////
// STRUCTURES                                                         //
////////////////////////////////////////////////////////////////////////

/// A zone file to be parsed, as supplied by the caller.
///
/// The file name is only used in log messages; the zone's domain is
/// always taken from the file's contents.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// A line-by-line parser for zone files. See the
/// [module-level documentation](`self`) for details and example usage.
///
/// Iterating over a `Parser` yields one [`Line`] per physical line of
/// the input. The parser never fails; lines it cannot use are reported
/// as [`LineContent::Ignored`].
pub struct Parser<'a> {
    lines: Enumerate<Lines<'a>>,
    default_ttl: Option<Ttl>,
}

/// A line read by a [`Parser`].
#[derive(Clone, Debug)]
pub struct Line {
    /// The 1-based line number.
    pub number: usize,
    pub content: LineContent,
}

/// The content of a [`Line`].
#[derive(Clone, Debug)]
pub enum LineContent {
    Record(Record),
    Ignored(Ignored),
}

/// The reason a [`Line`] produced no record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ignored {
    Blank,
    Comment,
    Directive,
    Soa,
    ApexNs,
    Unrecognized,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Blank => f.write_str("blank line"),
            Self::Comment => f.write_str("comment"),
            Self::Directive => f.write_str("directive"),
            Self::Soa => f.write_str("SOA record"),
            Self::ApexNs => f.write_str("NS record without an owner"),
            Self::Unrecognized => f.write_str("unrecognized line"),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// PARSER CONSTRUCTION AND ITERATION                                  //
////////////////////////////////////////////////////////////////////////

impl<'a> Parser<'a> {
    /// Creates a new [`Parser`] over the zone file text `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            default_ttl: None,
        }
    }

    /// Returns the default TTL set by the most recent `$TTL` directive
    /// read so far.
    pub fn default_ttl(&self) -> Option<Ttl> {
        self.default_ttl
    }

    /// Builds a [`Record`] from a matched record line, applying the
    /// default TTL and the apex and trailing-dot conventions.
    fn make_record(&self, line: RecordLine<'_>) -> Option<Record> {
        let name = match line.owner {
            None | Some("@") => "",
            Some(owner) => strip_trailing_dot(owner),
        };
        let rdata = strip_trailing_dot(line.rdata.trim());
        Some(Record {
            rr_type: line.rr_type.parse().ok()?,
            name: name.to_owned(),
            ttl: line.ttl.or(self.default_ttl),
            class: line.class.unwrap_or_default(),
            data: rdata.split_whitespace().map(str::to_owned).collect(),
        })
    }
}

impl Iterator for Parser<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, text) = self.lines.next()?;
        let content = match classify(text) {
            LineKind::Blank => LineContent::Ignored(Ignored::Blank),
            LineKind::Comment => LineContent::Ignored(Ignored::Comment),
            LineKind::Directive(directive) => {
                match directive {
                    Directive::Ttl(Some(ttl)) => self.default_ttl = Some(ttl),
                    Directive::Ttl(None) => {
                        debug!("Line {}: $TTL without a usable value.", index + 1)
                    }
                    Directive::Other(name) => {
                        debug!("Line {}: unsupported directive {}.", index + 1, name)
                    }
                    Directive::Origin => (),
                }
                LineContent::Ignored(Ignored::Directive)
            }
            LineKind::Soa => LineContent::Ignored(Ignored::Soa),
            LineKind::ApexNs => LineContent::Ignored(Ignored::ApexNs),
            LineKind::Record(record_line) => match self.make_record(record_line) {
                Some(record) => LineContent::Record(record),
                None => LineContent::Ignored(Ignored::Unrecognized),
            },
            LineKind::Unrecognized => LineContent::Ignored(Ignored::Unrecognized),
        };
        Some(Line {
            number: index + 1,
            content,
        })
    }
}

////////////////////////////////////////////////////////////////////////
// WHOLE-FILE PARSING                                                 //
////////////////////////////////////////////////////////////////////////

/// Parses the zone file text `text` into a [`Zone`].
///
/// This never fails. Lines that cannot be used are dropped (those that
/// look like mistakes are mentioned in the debug log).
pub fn parse(text: &str) -> Zone {
    let origin = find_origin(text);
    let mut records = Vec::new();
    for line in Parser::new(text) {
        match line.content {
            LineContent::Record(record) => {
                trace!("Line {}: read {}.", line.number, record);
                records.push(record);
            }
            LineContent::Ignored(Ignored::Unrecognized) => {
                debug!("Line {}: dropped {}.", line.number, Ignored::Unrecognized)
            }
            LineContent::Ignored(_) => (),
        }
    }

    let zone = Zone::new(origin.unwrap_or_default(), records);
    if origin.map_or(true, |o| strip_trailing_dot(o).is_empty()) {
        warn!(
            "No usable $ORIGIN directive found; using {} as the domain.",
            zone.domain(),
        );
    }
    zone
}

/// Parses each of `files` with [`parse`], returning the zones in the
/// same order.
pub fn parse_many(files: &[SourceFile]) -> Vec<Zone> {
    files
        .iter()
        .map(|file| {
            let zone = parse(&file.content);
            debug!(
                "Parsed {} as {} ({} records).",
                file.name,
                zone.domain(),
                zone.records().len(),
            );
            zone
        })
        .collect()
}

/// Removes one trailing `.` from `text`, if present.
fn strip_trailing_dot(text: &str) -> &str {
    text.strip_suffix('.').unwrap_or(text)
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
