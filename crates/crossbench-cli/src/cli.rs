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

//! Command definitions for the CrossBench CLI.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output encodings the `compare` command can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Markdown tables, for saved reports.
    Markdown,
    /// Fixed-width text, for consoles.
    Text,
    /// Pretty-printed JSON, for machine consumers.
    Json,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare captured benchmark outputs across sources
    Compare(CompareArgs),
}

/// Arguments for the `compare` command.
#[derive(Args)]
pub struct CompareArgs {
    /// Successful source as NAME=FORMAT:PATH, where FORMAT is one of
    /// block, tabular, freeform (repeatable)
    #[arg(long = "source", value_name = "NAME=FORMAT:PATH")]
    pub sources: Vec<String>,

    /// Failed source as NAME=REASON; appears in the errors section and
    /// contributes no records (repeatable)
    #[arg(long = "failed", value_name = "NAME=REASON")]
    pub failed: Vec<String>,

    /// Source to compute pairwise verdicts against; must be declared via
    /// --source or --failed
    #[arg(long, value_name = "NAME")]
    pub baseline: Option<String>,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,

    /// Platform description for the report header
    #[arg(long)]
    pub platform: Option<String>,

    /// Preformatted generation timestamp; defaults to Unix epoch seconds
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = Emit::Markdown)]
    pub emit: Emit,

    /// Write the report here instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Commands {
    /// Execute the selected command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Compare(args) => commands::compare::compare(&args),
        }
    }
}
