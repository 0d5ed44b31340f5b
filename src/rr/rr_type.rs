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

//! Provides the [`Type`] structure for DNS RR types.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

////////////////////////////////////////////////////////////////////////
// RR TYPES                                                           //
////////////////////////////////////////////////////////////////////////

/// Represents the RR type of a record read from a zone file.
///
/// Record types are kept as text rather than as a closed set: any type
/// token found in a zone file (including ones we know nothing about)
/// must pass through to the generated Terraform unchanged. The only
/// normalization applied is conversion to upper case, so `mx` and `MX`
/// compare equal.
///
/// Constants are provided for the types that the [`analysis`] rules
/// inspect (e.g. [`Type::MX`]).
///
/// [`analysis`]: crate::analysis
#[derive(Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Type(Cow<'static, str>);

impl Type {
    pub const A: Type = Type(Cow::Borrowed("A"));
    pub const CNAME: Type = Type(Cow::Borrowed("CNAME"));
    pub const MX: Type = Type(Cow::Borrowed("MX"));
    pub const TXT: Type = Type(Cow::Borrowed("TXT"));
    pub const SPF: Type = Type(Cow::Borrowed("SPF"));
    pub const DNSKEY: Type = Type(Cow::Borrowed("DNSKEY"));
    pub const DS: Type = Type(Cow::Borrowed("DS"));

    /// Returns the (upper-case) textual form of the type.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Type {
    type Err = &'static str;

    /// Parses a type token. The token must be non-empty and must not
    /// contain whitespace; beyond that, anything is accepted.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            Err("type is empty")
        } else if text.chars().any(char::is_whitespace) {
            Err("type contains whitespace")
        } else {
            Ok(Self(Cow::Owned(text.to_uppercase())))
        }
    }
}

impl AsRef<str> for Type {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
