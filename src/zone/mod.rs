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

//! Implementation of the [`Zone`] structure, the parsed form of a
//! single zone file.

use crate::rr::{Record, Type};

/// The domain used for zones whose file has no usable `$ORIGIN`
/// directive.
pub const DEFAULT_DOMAIN: &str = "example.com";

/// A zone parsed from a zone file.
///
/// A `Zone` is a value object: it is built once, by
/// [`zone_file::parse`](crate::zone_file::parse) or [`Zone::new`], and
/// is read-only afterwards. Its records are kept in file order, which
/// matters for the resource names chosen by the
/// [`terraform`](crate::terraform) generator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Zone {
    domain: String,
    name: String,
    records: Vec<Record>,
    is_active: bool,
}

impl Zone {
    /// Creates a new, active `Zone` for `domain` holding `records`.
    ///
    /// One trailing dot is removed from `domain`. If nothing remains,
    /// [`DEFAULT_DOMAIN`] is used instead, so a `Zone`'s domain is never
    /// empty. The zone's short name is the first label of the domain.
    pub fn new(domain: &str, records: Vec<Record>) -> Self {
        let domain = match domain.strip_suffix('.').unwrap_or(domain) {
            "" => DEFAULT_DOMAIN,
            d => d,
        };
        let name = domain.split('.').next().unwrap_or_default();
        Self {
            domain: domain.to_owned(),
            name: name.to_owned(),
            records,
            is_active: true,
        }
    }

    /// Returns the zone's fully qualified domain, without the trailing
    /// dot.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the zone's short name (the first label of its domain).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the zone's records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns whether the zone is marked active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns an iterator over the records of type `rr_type`.
    pub fn records_of_type<'a>(&'a self, rr_type: &'a Type) -> impl Iterator<Item = &'a Record> {
        self.records.iter().filter(move |r| r.rr_type == *rr_type)
    }

    /// Returns whether the zone has at least one record of type
    /// `rr_type`.
    pub fn has_type(&self, rr_type: &Type) -> bool {
        self.records_of_type(rr_type).next().is_some()
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
