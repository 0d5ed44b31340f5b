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

//! Conversion of BIND-style zone files into Terraform resource
//! definitions for the Azion Intelligent DNS provider, plus a
//! best-practices analysis of the records they contain.
//!
//! The pipeline has three stages:
//!
//! 1. [`zone_file`] parses zone file text into [`Zone`](zone::Zone)
//!    values. The parser is deliberately permissive: lines it does not
//!    understand are dropped rather than reported as errors.
//! 2. [`terraform`] turns a list of zones into Terraform text.
//! 3. [`analysis`] checks a list of zones against a fixed set of rules
//!    and renders the resulting findings as a Markdown report.
//!
//! Stages 2 and 3 only read the zones; neither depends on the other.
//!
//! ```
//! use bindform::{analysis, terraform, zone_file};
//!
//! let zone = zone_file::parse(
//!     "$ORIGIN example.com.\n\
//!      $TTL 3600\n\
//!      @   IN MX 10 mail.example.com.\n\
//!      www IN A  192.0.2.1\n",
//! );
//! assert_eq!(zone.domain(), "example.com");
//! assert_eq!(zone.records().len(), 2);
//!
//! let zones = [zone];
//! let tf = terraform::generate(&zones);
//! assert!(tf.contains(r#"resource "azion_intelligent_dns_record" "example_www_a_1""#));
//!
//! let findings = analysis::analyze(&zones);
//! assert!(findings.iter().any(|f| f.issue_type() == "Backup Email Server"));
//! ```

pub mod analysis;
pub mod class;
pub mod rr;
pub mod terraform;
pub mod zone;
pub mod zone_file;
