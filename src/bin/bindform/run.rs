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

//! Implements the `convert`, `generate`, and `analyze` commands.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info, warn};

use bindform::analysis::{self, Finding, Severity, Summary};
use bindform::terraform;

use crate::args::{AnalyzeArgs, Command, ConvertArgs, GenerateArgs};
use crate::config;
use crate::zones;

/// How a command finished, if it did not fail.
#[derive(Debug, Eq, PartialEq)]
enum Status {
    Success,
    /// The analysis produced a finding at or above the `--fail-on`
    /// threshold.
    ThresholdMet(Severity),
}

/// Runs `command`.
pub fn run(command: Command) {
    env_logger::init_from_env(Env::new().default_filter_or("warn"));
    info!(
        "bindform v{}.{}.{} starting.",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH"),
    );

    let result = match command {
        Command::Convert(args) => try_converting(args),
        Command::Generate(args) => try_generating(args),
        Command::Analyze(args) => try_analyzing(args),
    };
    match result {
        Ok(Status::Success) => info!("Exiting with success."),
        Ok(Status::ThresholdMet(threshold)) => {
            warn!(
                "Findings of {} severity or above were reported; exiting with status 2.",
                threshold,
            );
            process::exit(2);
        }
        Err(e) => {
            let mut message = String::from("Failed to run:");
            for (i, cause) in e.chain().enumerate() {
                write!(message, "\n[{}] {}", i + 1, cause).unwrap();
            }
            message.push_str("\nExiting with failure.");
            error!("{}", message);
            process::exit(1);
        }
    }
}

fn try_converting(args: ConvertArgs) -> Result<Status> {
    let config = if let Some(ref config_path) = args.config {
        info!("Loading the configuration from {}.", config_path.display());
        config::load_from_path(config_path).context("failed to load the configuration")?
    } else {
        info!("Loading the configuration from the command line.");
        config::load_from_args(args)
    };

    let zones = zones::load(&config.zone_paths()).context("failed to load the zones")?;

    let tf = terraform::generate(&zones);
    write_output(Some(config.terraform.as_path()), &tf, "Terraform configuration")?;

    let findings = analysis::analyze(&zones);
    write_output(
        Some(config.report.as_path()),
        &analysis::render(&findings),
        "analysis report",
    )?;

    Ok(check_threshold(&findings, config.fail_on.map(|s| s.0)))
}

fn try_generating(args: GenerateArgs) -> Result<Status> {
    let zones = zones::load(&args.zones).context("failed to load the zones")?;
    let tf = terraform::generate(&zones);
    write_output(args.output.as_deref(), &tf, "Terraform configuration")?;
    Ok(Status::Success)
}

fn try_analyzing(args: AnalyzeArgs) -> Result<Status> {
    let zones = zones::load(&args.zones).context("failed to load the zones")?;
    let findings = analysis::analyze(&zones);
    write_output(
        args.output.as_deref(),
        &analysis::render(&findings),
        "analysis report",
    )?;
    Ok(check_threshold(&findings, args.fail_on))
}

/// Writes `contents` to the file at `path`, or to standard output if
/// `path` is [`None`]. `what` names the contents for the log and for
/// error messages.
fn write_output(path: Option<&Path>, contents: &str, what: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("failed to write the {} to {}", what, path.display()))?;
            info!("Wrote the {} to {}.", what, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|()| stdout.flush())
                .with_context(|| format!("failed to write the {} to standard output", what))?;
        }
    }
    Ok(())
}

/// Logs the severity summary of `findings` and checks it against the
/// `fail_on` threshold.
fn check_threshold(findings: &[Finding], fail_on: Option<Severity>) -> Status {
    let summary = Summary::of(findings);
    info!("Analysis found {} issues ({}).", summary.total(), summary);
    match (fail_on, summary.highest()) {
        (Some(threshold), Some(highest)) if highest >= threshold => Status::ThresholdMet(threshold),
        _ => Status::Success,
    }
}
