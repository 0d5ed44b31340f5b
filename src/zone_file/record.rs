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

//! Matching of resource record lines.
//!
//! A record line has the shape
//!
//! ```text
//! [<owner>] <whitespace> [<TTL>] [IN] <type> <rdata...>
//! ```
//!
//! The owner is present exactly when the line does not begin with
//! whitespace. The TTL and class are each optional, so a line such as
//! `www 300 A 192.0.2.1` could in principle be read several ways. The
//! readings are tried in a fixed preference order (TTL and class, TTL
//! only, class only, neither) and the first one that leaves a type
//! followed by some record data is used.

use crate::class::Class;
use crate::rr::Ttl;

/// The fields of a record line, borrowed from the line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct RecordLine<'a> {
    pub owner: Option<&'a str>,
    pub ttl: Option<Ttl>,
    pub class: Option<Class>,
    pub rr_type: &'a str,
    pub rdata: &'a str,
}

/// The (TTL, class) combinations to try, in order of preference.
const READINGS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

/// Matches `line` against the record line shape. Returns [`None`] if
/// no reading of the line fits.
pub(super) fn match_record(line: &str) -> Option<RecordLine<'_>> {
    let (owner, rest) = split_owner(line)?;
    let fields = field_spans(rest);

    for (with_ttl, with_class) in READINGS {
        let mut next = 0;

        let ttl = if with_ttl {
            match fields.get(next).and_then(|&(s, e)| Ttl::from_digits(&rest[s..e])) {
                Some(ttl) => {
                    next += 1;
                    Some(ttl)
                }
                None => continue,
            }
        } else {
            None
        };

        let class = if with_class {
            match fields.get(next).and_then(|&(s, e)| rest[s..e].parse().ok()) {
                Some(class) => {
                    next += 1;
                    Some(class)
                }
                None => continue,
            }
        } else {
            None
        };

        let Some(&(type_start, type_end)) = fields.get(next) else {
            continue;
        };

        // The type must be followed by at least one whitespace
        // character and at least one more character of record data.
        let tail = &rest[type_end..];
        if tail.chars().nth(1).is_none() {
            continue;
        }

        return Some(RecordLine {
            owner,
            ttl,
            class,
            rr_type: &rest[type_start..type_end],
            rdata: tail,
        });
    }

    None
}

/// Returns whether `line` begins with an owner field followed by
/// whitespace.
pub(super) fn has_owner_field(line: &str) -> bool {
    matches!(split_owner(line), Some((Some(_), _)))
}

/// Splits the owner field off of the front of `line`. The returned
/// remainder always begins with whitespace. Returns [`None`] if the
/// line is empty or consists of a single field.
fn split_owner(line: &str) -> Option<(Option<&str>, &str)> {
    let first = line.chars().next()?;
    if first.is_whitespace() {
        Some((None, line))
    } else {
        let end = line.find(char::is_whitespace)?;
        Some((Some(&line[..end]), &line[end..]))
    }
}

/// Computes the byte ranges of the whitespace-separated fields of
/// `text`.
fn field_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (index, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, index));
                start = None;
            }
            (false, None) => start = Some(index),
            _ => (),
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_record_line_matches() {
        let line = match_record("www 300 IN A 192.0.2.1").unwrap();
        assert_eq!(line.owner, Some("www"));
        assert_eq!(line.ttl, Some(Ttl::from(300)));
        assert_eq!(line.class, Some(Class::IN));
        assert_eq!(line.rr_type, "A");
        assert_eq!(line.rdata.trim(), "192.0.2.1");
    }

    #[test]
    fn ttl_and_class_are_optional() {
        let line = match_record("mail\tMX 10 mx.example.com.").unwrap();
        assert_eq!(line.owner, Some("mail"));
        assert_eq!(line.ttl, None);
        assert_eq!(line.class, None);
        assert_eq!(line.rr_type, "MX");
        assert_eq!(line.rdata.trim(), "10 mx.example.com.");

        let line = match_record("mail IN MX 10 mx").unwrap();
        assert_eq!((line.ttl, line.class), (None, Some(Class::IN)));

        let line = match_record("mail 60 MX 10 mx").unwrap();
        assert_eq!((line.ttl, line.class), (Some(Ttl::from(60)), None));
    }

    #[test]
    fn leading_whitespace_means_no_owner() {
        let line = match_record("    IN A 192.0.2.1").unwrap();
        assert_eq!(line.owner, None);
        assert_eq!(line.rr_type, "A");
    }

    #[test]
    fn numeric_field_becomes_type_when_nothing_follows_it() {
        // "3600" cannot be the TTL here, since then "192.0.2.1" would
        // be the type with no data after it.
        let line = match_record("www 3600 192.0.2.1").unwrap();
        assert_eq!(line.ttl, None);
        assert_eq!(line.rr_type, "3600");
        assert_eq!(line.rdata.trim(), "192.0.2.1");
    }

    #[test]
    fn class_is_case_sensitive() {
        let line = match_record("www in A 192.0.2.1").unwrap();
        assert_eq!(line.class, None);
        assert_eq!(line.rr_type, "in");
        assert_eq!(line.rdata.trim(), "A 192.0.2.1");
    }

    #[test]
    fn lines_without_rdata_do_not_match() {
        assert_eq!(match_record("www A"), None);
        assert_eq!(match_record("www A "), None);
        assert_eq!(match_record("www"), None);
        assert_eq!(match_record(""), None);
    }

    #[test]
    fn has_owner_field_works() {
        assert!(has_owner_field("@ IN NS ns1"));
        assert!(!has_owner_field("  IN NS ns1"));
        assert!(!has_owner_field("NS"));
    }

    #[test]
    fn field_spans_works() {
        assert_eq!(field_spans(" ab  c\td "), vec![(1, 3), (5, 6), (7, 8)]);
        assert!(field_spans("   ").is_empty());
    }
}
