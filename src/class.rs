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

//! Implementation of the [`Class`] type for DNS classes.

use std::fmt;
use std::str::FromStr;

/// Represents the class of a record read from a zone file.
///
/// Only the Internet class is supported, so this has a single variant.
/// It exists so that parsed records still carry their class, and so
/// that the zone file parser has one place that decides what a class
/// token looks like.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Class {
    #[default]
    IN,
}

impl FromStr for Class {
    type Err = &'static str;

    /// Parses a class token. Unlike most of the zone file format, this
    /// is case-sensitive: only `IN` is recognized.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "IN" => Ok(Self::IN),
            _ => Err("unsupported class"),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::IN => f.write_str("IN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Class;

    #[test]
    fn parses_only_upper_case_in() {
        assert_eq!("IN".parse::<Class>(), Ok(Class::IN));
        assert!("in".parse::<Class>().is_err());
        assert!("CH".parse::<Class>().is_err());
    }

    #[test]
    fn displays_as_in() {
        assert_eq!(Class::IN.to_string(), "IN");
    }
}
