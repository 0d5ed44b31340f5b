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

//! Generation of Terraform configuration for the Azion Intelligent DNS
//! provider.
//!
//! The output of [`generate`] is consumed by other tooling, so its
//! exact text (resource types, field names and order, alignment,
//! quoting, and the blank line after every block) is fixed. It
//! consists of a provider block ([`provider_block`]), followed, for
//! each zone, by a zone block ([`zone_block`]) and then one record
//! block per record ([`record_blocks`]).
//!
//! Generation is a pure function of its input. Record data tokens are
//! copied into the output verbatim; nothing is escaped or validated.
//! API credentials are never written: the provider reads them from its
//! environment when the configuration is applied.

use std::fmt::Write;

use crate::rr::Record;
use crate::zone::Zone;

mod resource;
pub use resource::ResourceName;

/// The resource type of zone blocks.
pub const ZONE_RESOURCE: &str = "azion_intelligent_dns_zone";

/// The resource type of record blocks.
pub const RECORD_RESOURCE: &str = "azion_intelligent_dns_record";

/// The TTL written for records that have none.
pub const DEFAULT_TTL: u32 = 3600;

/// The routing policy written for every record.
pub const POLICY: &str = "simple";

const PROVIDER_BLOCK: &str = r#"terraform {
  required_providers {
    azion = {
      source  = "aziontech/azion"
      version = "~> 1.0.0"
    }
  }
}

provider "azion" {
  # The API token is read from the AZION_API_TOKEN environment variable.
}

"#;

/// Generates the complete Terraform configuration for `zones`.
pub fn generate(zones: &[Zone]) -> String {
    let mut config = provider_block().to_owned();
    for zone in zones {
        config.push_str(&zone_block(zone));
        config.push_str(&record_blocks(zone));
    }
    config
}

/// Returns the static provider block.
pub fn provider_block() -> &'static str {
    PROVIDER_BLOCK
}

/// Generates the zone block for `zone`.
pub fn zone_block(zone: &Zone) -> String {
    format!(
        "resource \"{ZONE_RESOURCE}\" \"{name}\" {{\n\
         \x20 zone = {{\n\
         \x20   domain     = \"{domain}\"\n\
         \x20   is_active  = {active}\n\
         \x20   name       = \"{name}\"\n\
         \x20 }}\n\
         }}\n\
         \n",
        name = zone.name(),
        domain = zone.domain(),
        active = zone.is_active(),
    )
}

/// Generates the record blocks for all records in `zone`, in order.
pub fn record_blocks(zone: &Zone) -> String {
    let mut blocks = String::new();
    for (index, record) in zone.records().iter().enumerate() {
        write_record_block(&mut blocks, zone, index, record);
    }
    blocks
}

/// Appends the block for `record`, found at position `index` in
/// `zone`, to `out`.
fn write_record_block(out: &mut String, zone: &Zone, index: usize, record: &Record) {
    let resource_name = ResourceName::for_record(zone, index, record);
    let answers = record
        .data
        .iter()
        .map(|answer| format!("      \"{answer}\""))
        .collect::<Vec<_>>()
        .join(",\n");
    let ttl = record.ttl.map_or(DEFAULT_TTL, u32::from);

    writeln!(out, "resource \"{RECORD_RESOURCE}\" \"{resource_name}\" {{").unwrap();
    writeln!(out, "  zone_id = \"${{{ZONE_RESOURCE}.{}.id}}\"", zone.name()).unwrap();
    out.push_str("  record = {\n");
    writeln!(out, "    record_type  = \"{}\"", record.rr_type).unwrap();
    writeln!(out, "    entry        = \"{}\"", record.name).unwrap();
    out.push_str("    answers_list = [\n");
    out.push_str(&answers);
    out.push_str("\n    ]\n");
    writeln!(out, "    policy       = \"{POLICY}\"").unwrap();
    writeln!(out, "    ttl          = {ttl}").unwrap();
    writeln!(
        out,
        "    description  = \"Auto-generated from BIND for {}\"",
        record.display_name(),
    )
    .unwrap();
    out.push_str("  }\n}\n\n");
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::Class;
    use crate::rr::{Ttl, Type};

    fn make_record(name: &str, rr_type: Type, ttl: Option<u32>, data: &[&str]) -> Record {
        Record {
            rr_type,
            name: name.into(),
            ttl: ttl.map(Ttl::from),
            class: Class::IN,
            data: data.iter().map(|&d| d.to_owned()).collect(),
        }
    }

    fn make_zone() -> Zone {
        Zone::new(
            "example.com",
            vec![
                make_record("", Type::MX, None, &["10", "mail.example.com"]),
                make_record("www", Type::A, Some(300), &["192.0.2.1"]),
                make_record("www", Type::A, Some(0), &["192.0.2.2"]),
            ],
        )
    }

    #[test]
    fn zone_block_matches_template() {
        let expected = "\
resource \"azion_intelligent_dns_zone\" \"example\" {
  zone = {
    domain     = \"example.com\"
    is_active  = true
    name       = \"example\"
  }
}

";
        assert_eq!(zone_block(&make_zone()), expected);
    }

    #[test]
    fn record_block_matches_template() {
        let zone = make_zone();
        let expected = "\
resource \"azion_intelligent_dns_record\" \"example_root_mx_0\" {
  zone_id = \"${azion_intelligent_dns_zone.example.id}\"
  record = {
    record_type  = \"MX\"
    entry        = \"\"
    answers_list = [
      \"10\",
      \"mail.example.com\"
    ]
    policy       = \"simple\"
    ttl          = 3600
    description  = \"Auto-generated from BIND for @\"
  }
}

";
        let mut block = String::new();
        write_record_block(&mut block, &zone, 0, &zone.records()[0]);
        assert_eq!(block, expected);
    }

    #[test]
    fn explicit_ttls_are_kept() {
        let blocks = record_blocks(&make_zone());
        assert!(blocks.contains("    ttl          = 300\n"));
        assert!(blocks.contains("    ttl          = 0\n"));
    }

    #[test]
    fn record_without_data_has_empty_answers_list() {
        let zone = Zone::new("example.com", vec![make_record("x", Type::TXT, None, &[])]);
        assert!(record_blocks(&zone).contains("    answers_list = [\n\n    ]\n"));
    }

    #[test]
    fn lone_dot_rdata_adds_no_empty_answer() {
        let zone = crate::zone_file::parse("@ IN MX 0 .\n");
        assert!(record_blocks(&zone).contains("    answers_list = [\n      \"0\"\n    ]\n"));
    }

    #[test]
    fn generate_starts_with_provider_block() {
        let config = generate(&[]);
        assert_eq!(config, PROVIDER_BLOCK);
        assert!(config.starts_with("terraform {\n  required_providers {\n"));
        assert!(config.contains("      source  = \"aziontech/azion\"\n"));
        assert!(config.contains("provider \"azion\" {\n"));
    }

    #[test]
    fn generate_emits_one_distinct_block_per_record() {
        let zones = [make_zone()];
        let config = generate(&zones);
        let names: Vec<&str> = config
            .lines()
            .filter_map(|line| line.strip_prefix("resource \"azion_intelligent_dns_record\" \""))
            .collect();
        assert_eq!(
            names,
            [
                "example_root_mx_0\" {",
                "example_www_a_1\" {",
                "example_www_a_2\" {",
            ]
        );
    }

    #[test]
    fn generate_orders_zones_then_records() {
        let other = Zone::new(
            "other.net",
            vec![make_record("", Type::A, None, &["192.0.2.9"])],
        );
        let config = generate(&[make_zone(), other]);
        let example = config.find("\"example\" {").unwrap();
        let example_record = config.find("\"example_www_a_2\"").unwrap();
        let other_zone = config.find("\"other\" {").unwrap();
        let other_record = config.find("\"other_root_a_0\"").unwrap();
        assert!(example < example_record);
        assert!(example_record < other_zone);
        assert!(other_zone < other_record);
    }

    #[test]
    fn generate_is_deterministic() {
        let zones = [make_zone()];
        assert_eq!(generate(&zones), generate(&zones));
    }
}
