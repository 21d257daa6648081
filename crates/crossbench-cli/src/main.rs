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

//! CrossBench Command Line Interface

use clap::Parser;
use crossbench_cli::cli::Commands;
use std::process::ExitCode;

/// CrossBench - cross-language benchmark comparison toolkit
///
/// Reads captured benchmark output from text files, extracts per-operation
/// metrics, matches benchmarks across sources, and renders a comparison
/// report with ranked verdicts.
///
/// # Examples
///
/// ```bash
/// # Compare two captured runs against a baseline
/// crossbench compare \
///     --source tml=block:out/tml.txt \
///     --source go=tabular:out/go.txt \
///     --baseline tml \
///     --output report.md
///
/// # Record a run that crashed or timed out
/// crossbench compare \
///     --source go=tabular:out/go.txt \
///     --failed "rust=timeout after 300s" \
///     --emit text
/// ```
#[derive(Parser)]
#[command(name = "crossbench")]
#[command(author, version, about = "CrossBench - cross-language benchmark comparison toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
