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

//! Implementation of the [`Record`] structure.

use std::fmt;

use super::{Ttl, Type};
use crate::class::Class;

/// A resource record as read from a zone file.
///
/// The owner name is relative to the zone's origin, with the empty
/// string denoting the apex. The record data is kept as the ordered
/// list of whitespace-separated tokens that appeared in the file; no
/// type-specific interpretation is performed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub rr_type: Type,
    pub name: String,
    pub ttl: Option<Ttl>,
    pub class: Class,
    pub data: Vec<String>,
}

impl Record {
    /// Returns whether this record is owned by the zone apex.
    pub fn is_apex(&self) -> bool {
        self.name.is_empty()
    }

    /// Returns the owner name as it is conventionally written in zone
    /// files, i.e. with `@` for the apex.
    pub fn display_name(&self) -> &str {
        if self.is_apex() {
            "@"
        } else {
            &self.name
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())?;
        if let Some(ttl) = self.ttl {
            write!(f, " {ttl}")?;
        }
        write!(f, " {} {}", self.class, self.rr_type)?;
        for token in &self.data {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, ttl: Option<u32>) -> Record {
        Record {
            rr_type: Type::MX,
            name: name.into(),
            ttl: ttl.map(Ttl::from),
            class: Class::IN,
            data: vec!["10".into(), "mail.example.com".into()],
        }
    }

    #[test]
    fn apex_is_displayed_as_at() {
        let record = make_record("", None);
        assert!(record.is_apex());
        assert_eq!(record.display_name(), "@");
        assert_eq!(record.to_string(), "@ IN MX 10 mail.example.com");
    }

    #[test]
    fn display_includes_ttl_when_present() {
        let record = make_record("mail", Some(300));
        assert!(!record.is_apex());
        assert_eq!(record.to_string(), "mail 300 IN MX 10 mail.example.com");
    }
}
