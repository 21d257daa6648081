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

//! Core engine for cross-language benchmark comparison.
//!
//! This crate turns the free-form textual output of independently built
//! benchmark programs into a deterministic comparison report:
//!
//! 1. [`parse`] — format-specific parsers extract [`MetricRecord`]s from raw
//!    text; the caller selects the [`FormatKind`] since it knows which
//!    program produced the text.
//! 2. [`normalize_name`] — benchmark labels are canonicalized so that
//!    formatting drift between producers does not break matching.
//! 3. [`match_runs`] — records from all successful runs are grouped into
//!    [`MatchGroup`]s denoting the same logical benchmark.
//! 4. [`rank`] / [`summarize`] — per-group verdicts and aggregate win/mean
//!    statistics.
//! 5. [`generate_report`] — the single entry point producing an immutable
//!    [`ReportDocument`], renderable as Markdown, fixed-width text, or JSON.
//!
//! The pipeline is synchronous and pure: no process execution, no clock
//! reads, no filesystem access. Malformed input degrades to fewer records,
//! never to an error; the only fallible operations are format-name lookup
//! and JSON encoding.

mod error;
mod matcher;
mod normalize;
pub mod parse;
mod record;
mod render;
mod report;
mod verdict;

pub use error::{CompareError, CompareResult};
pub use matcher::{match_runs, MatchGroup};
pub use normalize::normalize_name;
pub use parse::FormatKind;
pub use record::{MetricRecord, RunStatus, SourceId, SourceRun, Throughput};
pub use report::{
    generate_report, generate_report_with, ErrorEntry, GroupRow, GroupSection, ReportDocument,
    RunMetadata,
};
pub use verdict::{
    classify, rank, summarize, AggregateSummary, Ranking, Verdict, FASTER_BOUND, TIED_BOUND,
};
