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

//! Handling of zone file `$`-directives.

use crate::rr::Ttl;

/// A `$`-directive line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Directive<'a> {
    /// `$ORIGIN`. The origin itself is located by [`find_origin`],
    /// which scans the whole file, so the line carries no value.
    Origin,

    /// `$TTL`, with the new default TTL if one could be read.
    Ttl(Option<Ttl>),

    /// Any other directive (e.g. `$INCLUDE`), which is not supported.
    Other(&'a str),
}

/// Classifies a line that starts with `$` (after leading whitespace
/// has been removed).
pub(super) fn parse_directive(trimmed: &str) -> Directive<'_> {
    if trimmed.starts_with("$TTL") {
        let digits = find_argument(trimmed, "$TTL", |c| c.is_ascii_digit());
        Directive::Ttl(digits.and_then(Ttl::from_digits))
    } else if trimmed.starts_with("$ORIGIN") {
        Directive::Origin
    } else {
        Directive::Other(trimmed.split(char::is_whitespace).next().unwrap_or(trimmed))
    }
}

/// Locates the zone's origin: the argument of the first `$ORIGIN`
/// directive in `text`.
///
/// This is a scan over the raw text rather than over parsed lines. The
/// first `$ORIGIN` that is followed by whitespace and then a
/// non-whitespace token wins, wherever it appears, and later `$ORIGIN`
/// directives do not change it. The returned name still carries its
/// trailing dot, if any.
pub fn find_origin(text: &str) -> Option<&str> {
    find_argument(text, "$ORIGIN", |c| !c.is_whitespace())
}

/// Finds the first occurrence of `keyword` in `text` that is followed
/// by at least one whitespace character and then at least one
/// character matching `accept`, and returns the run of matching
/// characters.
fn find_argument<'a>(
    text: &'a str,
    keyword: &str,
    accept: impl Fn(char) -> bool,
) -> Option<&'a str> {
    text.match_indices(keyword).find_map(|(index, _)| {
        let after = &text[index + keyword.len()..];
        let argument = after.trim_start();
        if argument.len() == after.len() {
            // No whitespace between the keyword and its argument.
            return None;
        }
        let end = argument
            .find(|c: char| !accept(c))
            .unwrap_or(argument.len());
        if end == 0 {
            None
        } else {
            Some(&argument[..end])
        }
    })
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
