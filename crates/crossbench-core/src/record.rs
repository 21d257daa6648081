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

//! Data model for parsed benchmark output.

use crate::normalize::normalize_name;
use crate::parse::FormatKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one benchmark-producing program/run.
///
/// Source ids order report rows and aggregate tables, so the comparison
/// output is deterministic regardless of the order runs were gathered in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Create a new source id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Reported throughput of a benchmark operation.
///
/// The tabular format reports megabytes per second; the block format
/// reports abstract operations per second. Both are kept as printed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Throughput {
    /// Data throughput in MB/s.
    MegabytesPerSec(f64),
    /// Operation throughput in ops/sec.
    OpsPerSec(u64),
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MegabytesPerSec(mbs) => write!(f, "{:.2} MB/s", mbs),
            Self::OpsPerSec(ops) => write!(f, "{} ops/sec", group_digits(*ops)),
        }
    }
}

/// Format an integer with thousands separators, e.g. `2600016` → `2,600,016`.
pub(crate) fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One extracted (name, timing) measurement. Immutable once parsed.
///
/// `time_ns` is the sole required quantitative field: a parser that cannot
/// recover a per-operation time for a benchmark emits no record at all. A
/// source-reported zero ("sub-measurable") is floored to 1 ns at
/// construction so no zero can reach a ratio computation downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// The source that produced this measurement.
    pub source: SourceId,
    /// Benchmark name exactly as printed by the producer.
    pub test_name: String,
    /// Canonical matching key derived from `test_name`.
    pub normalized_name: String,
    /// Per-operation time in nanoseconds, always >= 1.
    pub time_ns: u64,
    /// Reported throughput, if the producer printed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<Throughput>,
    /// Iteration count, if the producer printed one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,
    /// Free-text notes attached by the producer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_notes: Option<String>,
}

impl MetricRecord {
    /// Create a record from a printed name and a per-op time in nanoseconds.
    ///
    /// A zero time is floored to 1 ns.
    pub fn new(source: SourceId, test_name: impl Into<String>, time_ns: u64) -> Self {
        let test_name = test_name.into();
        let normalized_name = normalize_name(&test_name);
        Self {
            source,
            test_name,
            normalized_name,
            time_ns: time_ns.max(1),
            throughput: None,
            iterations: None,
            extra_notes: None,
        }
    }

    /// Attach a throughput measurement.
    pub fn with_throughput(mut self, throughput: Throughput) -> Self {
        self.throughput = Some(throughput);
        self
    }

    /// Attach an iteration count.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Attach producer notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.extra_notes = Some(notes.into());
        self
    }
}

/// Outcome of one benchmark-program invocation, as determined by the caller
/// that ran the external process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The process exited successfully; its output was parsed.
    Success,
    /// The process crashed, timed out, or otherwise failed.
    Failed(String),
}

impl RunStatus {
    /// Whether this run completed successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// One source's parsed run: status plus extracted records.
///
/// Owned by the aggregation pipeline for the duration of one report
/// generation; never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRun {
    /// The source this run belongs to.
    pub source: SourceId,
    /// Success or failure, as reported by the external process runner.
    pub status: RunStatus,
    /// Records extracted from the run's raw output.
    pub records: Vec<MetricRecord>,
}

impl SourceRun {
    /// Parse raw output text with the given format strategy.
    ///
    /// A parser yielding zero records is a valid successful run, distinct
    /// from a failed one.
    pub fn parsed(source: SourceId, raw_text: &str, format: FormatKind) -> Self {
        let records = format.parse(&source, raw_text);
        Self {
            source,
            status: RunStatus::Success,
            records,
        }
    }

    /// A run whose external process failed; contributes no records.
    pub fn failed(source: SourceId, reason: impl Into<String>) -> Self {
        Self {
            source,
            status: RunStatus::Failed(reason.into()),
            records: Vec::new(),
        }
    }
}
