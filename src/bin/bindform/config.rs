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

//! Implements the conversion configuration file.

use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::Level::Debug;
use log::{debug, log_enabled};
use paste::paste;
use serde::{de, Deserialize};

use bindform::analysis::Severity;

use crate::args::ConvertArgs;

////////////////////////////////////////////////////////////////////////
// CONFIGURATION LOADING                                              //
////////////////////////////////////////////////////////////////////////

/// Loads the configuration from the file given by `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let dir = match path.as_ref().parent() {
        Some(p) => p,
        None => return Err(anyhow!("the configuration file path has no parent")),
    };
    let raw_config = fs::read(path.as_ref()).context("failed to read the configuration file")?;
    let mut config: Config =
        toml::from_slice(&raw_config).context("failed to parse the configuration file")?;
    config.resolve_paths(dir);
    log_config_summary(&config);
    Ok(config)
}

/// Loads the configuration from the parsed command line arguments given
/// by `args`.
pub fn load_from_args(args: ConvertArgs) -> Config {
    let config = Config {
        terraform: args.terraform.unwrap_or_else(default_terraform_path),
        report: args.report.unwrap_or_else(default_report_path),
        fail_on: args.fail_on.map(ConfigSeverity),
        zones: args
            .zones
            .into_iter()
            .map(|path| ZoneConfig { path })
            .collect(),
    };
    log_config_summary(&config);
    config
}

/// Summarizes the configuration in the log, if the debug log level is
/// enabled.
fn log_config_summary(config: &Config) {
    if !log_enabled!(Debug) {
        return;
    }

    let fail_on = match config.fail_on {
        Some(ref severity) => severity.0.to_string(),
        None => "never".to_owned(),
    };
    let mut message = format!(
        "Configuration loaded:\n\
         Terraform output: {}\n\
         Report output:    {}\n\
         Fail on:          {}\n\
         Zones:            ",
        config.terraform.display(),
        config.report.display(),
        fail_on,
    );
    if config.zones.is_empty() {
        message.push_str("none to load");
    } else {
        write!(message, "{} to load", config.zones.len()).unwrap();
        for zone_config in &config.zones {
            write!(message, "\n  {}", zone_config.path.display()).unwrap();
        }
    }
    debug!("{}", message);
}

////////////////////////////////////////////////////////////////////////
// CONFIGURATION FILE STRUCTURE                                       //
////////////////////////////////////////////////////////////////////////

/// The complete configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_terraform_path")]
    pub terraform: PathBuf,
    #[serde(default = "default_report_path")]
    pub report: PathBuf,
    pub fail_on: Option<ConfigSeverity>,
    pub zones: Vec<ZoneConfig>,
}

impl Config {
    /// Returns the paths of all configured zones.
    pub fn zone_paths(&self) -> Vec<PathBuf> {
        self.zones.iter().map(|z| z.path.clone()).collect()
    }

    /// Interprets all relative paths as relative to `dir`.
    fn resolve_paths(&mut self, dir: &Path) {
        let paths = [&mut self.terraform, &mut self.report]
            .into_iter()
            .chain(self.zones.iter_mut().map(|z| &mut z.path));
        for path in paths {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }
}

const DEFAULT_TERRAFORM_PATH: &str = "azion_dns.tf";
const DEFAULT_REPORT_PATH: &str = "dns_analysis_report.md";

fn default_terraform_path() -> PathBuf {
    PathBuf::from(DEFAULT_TERRAFORM_PATH)
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}

/// The configuration of a single zone file (or directory of zone
/// files).
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneConfig {
    pub path: PathBuf,
}

////////////////////////////////////////////////////////////////////////
// WRAPPERS OVER BINDFORM TYPES FOR SERDE                             //
////////////////////////////////////////////////////////////////////////

/// Generates a deserializable `ConfigX` structure wrapping an `X` type
/// from [`bindform`], using its [`FromStr`](std::str::FromStr)
/// implementation.
macro_rules! make_serde_wrapper {
    ($wrapper:ident, $over:ty, $description:literal) => {
        /// A macro-generated deserializable wrapper over a [`bindform`]
        /// type.
        #[derive(Clone, Debug)]
        pub struct $wrapper(pub $over);

        impl<'de> Deserialize<'de> for $wrapper {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: de::Deserializer<'de>,
            {
                deserializer.deserialize_str(paste! { [<$wrapper Visitor>] })
            }
        }

        paste! {
            /// A macro-generated [`Visitor`](de::Visitor).
            #[derive(Debug)]
            struct [<$wrapper Visitor>];
        }

        impl<'de> de::Visitor<'de> for paste! { [<$wrapper Visitor>] } {
            type Value = $wrapper;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str($description)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse()
                    .map($wrapper)
                    .map_err(|e| E::custom(format!("invalid {}: {}", $description, e)))
            }
        }
    };
}

make_serde_wrapper!(ConfigSeverity, Severity, "severity");

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
