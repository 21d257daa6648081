// Dweve CrossBench - Cross-Language Benchmark Comparison
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Compare command - parse captured outputs and render the comparison.

use super::read_file;
use crate::cli::{CompareArgs, Emit};
use crate::error::CliError;
use colored::Colorize;
use crossbench_core::{generate_report_with, FormatKind, RunMetadata, SourceId, SourceRun};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// Run the comparison pipeline over the declared sources and write the
/// rendered report to the selected sink.
///
/// # Errors
///
/// Returns `Err` if:
/// - A `--source` or `--failed` argument is malformed
/// - A source names an unknown format
/// - `--baseline` names an undeclared source
/// - An output file cannot be read or the report cannot be written
pub fn compare(args: &CompareArgs) -> Result<(), CliError> {
    if args.sources.is_empty() && args.failed.is_empty() {
        return Err(CliError::invalid_spec(
            "at least one --source or --failed is required",
        ));
    }

    let mut runs = Vec::new();

    for spec in &args.sources {
        let (name, format, path) = parse_source_spec(spec)?;
        let text = read_file(&path)?;
        let run = SourceRun::parsed(SourceId::new(name.as_str()), &text, format);
        println!(
            "{} {} ({}, {} records)",
            "✓".green().bold(),
            name,
            format,
            run.records.len()
        );
        runs.push(run);
    }

    for spec in &args.failed {
        let (name, reason) = parse_failed_spec(spec)?;
        println!("{} {} ({})", "✗".red().bold(), name, reason);
        runs.push(SourceRun::failed(SourceId::new(name), reason));
    }

    let baseline = match &args.baseline {
        Some(name) => {
            let id = SourceId::new(name.as_str());
            if !runs.iter().any(|run| run.source == id) {
                return Err(CliError::invalid_spec(format!(
                    "baseline '{}' does not name a declared source",
                    name
                )));
            }
            Some(id)
        }
        None => None,
    };

    let metadata = RunMetadata {
        title: args.title.clone(),
        generated_at: args.timestamp.clone().or_else(epoch_timestamp),
        platform: args.platform.clone(),
        notes: Vec::new(),
    };

    let document = generate_report_with(&runs, baseline.as_ref(), metadata);
    let rendered = match args.emit {
        Emit::Markdown => document.to_markdown(),
        Emit::Text => document.to_text(),
        Emit::Json => document.to_json()?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered).map_err(|e| CliError::io_error(path, e))?;
            println!("Report saved to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Split `NAME=FORMAT:PATH` into its parts.
fn parse_source_spec(spec: &str) -> Result<(String, FormatKind, PathBuf), CliError> {
    let (name, rest) = spec.split_once('=').ok_or_else(|| {
        CliError::invalid_spec(format!("expected NAME=FORMAT:PATH, got '{}'", spec))
    })?;
    let (format, path) = rest.split_once(':').ok_or_else(|| {
        CliError::invalid_spec(format!("expected NAME=FORMAT:PATH, got '{}'", spec))
    })?;
    let name = name.trim();
    if name.is_empty() || path.is_empty() {
        return Err(CliError::invalid_spec(format!(
            "expected NAME=FORMAT:PATH, got '{}'",
            spec
        )));
    }
    Ok((name.to_string(), format.parse()?, PathBuf::from(path)))
}

/// Split `NAME=REASON` into its parts.
fn parse_failed_spec(spec: &str) -> Result<(String, String), CliError> {
    let (name, reason) = spec
        .split_once('=')
        .ok_or_else(|| CliError::invalid_spec(format!("expected NAME=REASON, got '{}'", spec)))?;
    let name = name.trim();
    let reason = reason.trim();
    if name.is_empty() || reason.is_empty() {
        return Err(CliError::invalid_spec(format!(
            "expected NAME=REASON, got '{}'",
            spec
        )));
    }
    Ok((name.to_string(), reason.to_string()))
}

/// Default report timestamp: Unix epoch seconds.
fn epoch_timestamp() -> Option<String> {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs().to_string())
}
