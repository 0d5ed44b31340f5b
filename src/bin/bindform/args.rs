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

//! Implements command-line argument parsing.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use bindform::analysis::Severity;

/// Parses the command line arguments.
pub fn parse() -> Args {
    Args::parse()
}

/// Converts BIND zone files into Terraform configuration for Azion
/// Intelligent DNS
#[derive(Debug, Parser)]
#[command(author, version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write both the Terraform configuration and the analysis report
    Convert(ConvertArgs),
    /// Write only the Terraform configuration
    Generate(GenerateArgs),
    /// Write only the analysis report
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("input").required(true).args(["config", "zones"])))]
pub struct ConvertArgs {
    /// Set the configuration file to use
    #[arg(
        long,
        conflicts_with_all = ["terraform", "report", "fail_on"],
        value_name = "FILE"
    )]
    pub config: Option<PathBuf>,

    /// Add zone files (or directories of zone files) to convert
    #[arg(long, num_args = 1.., value_delimiter = ',', value_name = "PATH")]
    pub zones: Vec<PathBuf>,

    /// Set the path of the Terraform configuration to write
    #[arg(long, value_name = "PATH")]
    pub terraform: Option<PathBuf>,

    /// Set the path of the analysis report to write
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Exit with status 2 if any finding is at least this severe
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<Severity>,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Zone files (or directories of zone files) to convert
    #[arg(required = true, value_name = "ZONE")]
    pub zones: Vec<PathBuf>,

    /// Write to this file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Zone files (or directories of zone files) to analyze
    #[arg(required = true, value_name = "ZONE")]
    pub zones: Vec<PathBuf>,

    /// Write to this file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit with status 2 if any finding is at least this severe
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<Severity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse_from(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("bindform").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn convert_requires_config_or_zones() {
        assert!(parse_from(&["convert"]).is_err());
        assert!(parse_from(&["convert", "--config", "bindform.toml"]).is_ok());
    }

    #[test]
    fn convert_zones_are_comma_delimited() {
        let args =
            parse_from(&["convert", "--zones", "a.zone,b.zone", "--fail-on", "HIGH"]).unwrap();
        match args.command {
            Command::Convert(convert) => {
                assert_eq!(
                    convert.zones,
                    [PathBuf::from("a.zone"), PathBuf::from("b.zone")]
                );
                assert_eq!(convert.fail_on, Some(Severity::High));
            }
            _ => panic!("expected the convert command"),
        }
    }

    #[test]
    fn convert_config_conflicts_with_output_paths() {
        assert!(parse_from(&["convert", "--config", "c.toml", "--terraform", "out.tf"]).is_err());
    }

    #[test]
    fn invalid_severity_is_rejected() {
        assert!(parse_from(&["analyze", "a.zone", "--fail-on", "critical"]).is_err());
    }

    #[test]
    fn generate_requires_zones() {
        assert!(parse_from(&["generate"]).is_err());
        let args = parse_from(&["generate", "a.zone", "dir", "-o", "out.tf"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Generate(GenerateArgs { ref zones, output: Some(_) }) if zones.len() == 2
        ));
    }
}
