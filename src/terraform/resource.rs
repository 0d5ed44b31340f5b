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

//! Terraform resource names for records.

use std::fmt;

use crate::rr::Record;
use crate::zone::Zone;

/// The Terraform resource name (the second label of a `resource`
/// block) of a record.
///
/// It has the form `<zone>_<owner>_<type>_<index>`, where `<owner>` is
/// the owner name with dots replaced by underscores (or `root` for the
/// apex), `<type>` is the lower-cased RR type, and `<index>` is the
/// zero-based position of the record within its zone. The index makes
/// the name unique within a zone even when the same owner has several
/// records of one type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ResourceName(String);

impl ResourceName {
    /// Computes the resource name of `record`, found at position
    /// `index` in `zone`.
    pub fn for_record(zone: &Zone, index: usize, record: &Record) -> Self {
        let owner = if record.is_apex() {
            "root".to_owned()
        } else {
            record.name.replace('.', "_")
        };
        Self(format!(
            "{}_{}_{}_{}",
            zone.name(),
            owner,
            record.rr_type.as_str().to_lowercase(),
            index,
        ))
    }

}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
