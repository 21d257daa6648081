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

//! Block format parser.
//!
//! The block convention prints a benchmark name line terminated by `:`,
//! followed by an indented run of `Key: Value` lines until a blank line or
//! the next name line:
//!
//! ```text
//! String concat:
//!   Iterations: 100000
//!   Total time: 38 ms
//!   Per op:     384 ns
//!   Ops/sec:    2600016
//!   Notes:      optional
//! ```
//!
//! Two alternate single-line encodings, `"<int> ns/op"` and
//! `"<int> ops/sec"`, are accepted interleaved with the keyed lines.
//! Diagnostic lines (`[DEBUG]`, `best_ns=`) are skipped without
//! terminating the block. Within one block the first occurrence of a key
//! wins.

use crate::record::{MetricRecord, SourceId, Throughput};
use once_cell::sync::Lazy;
use regex::Regex;

/// The recognized `Key:` prefixes. A line ending in `:` that does not start
/// with one of these opens a new benchmark block.
const KEY_PREFIXES: [&str; 5] = [
    "Iterations:",
    "Total time:",
    "Per op:",
    "Ops/sec:",
    "Notes:",
];

/// Prefixes of diagnostic lines that are skipped mid-block.
const DEBUG_PREFIXES: [&str; 2] = ["[DEBUG]", "best_ns="];

/// Per-parser precompiled patterns for the keyed and alternate encodings.
struct BlockParser {
    re_iterations: Regex,
    re_total_time: Regex,
    re_per_op: Regex,
    re_ops_sec: Regex,
    re_notes: Regex,
    re_per_op_alt: Regex,
    re_ops_sec_alt: Regex,
}

static PARSER: Lazy<BlockParser> = Lazy::new(BlockParser::new);

impl BlockParser {
    fn new() -> Self {
        Self {
            re_iterations: compile(r"^Iterations:\s*(\d+)"),
            re_total_time: compile(r"^Total time:\s*(\d+)\s*ms"),
            re_per_op: compile(r"^Per op:\s*(\d+)\s*ns"),
            re_ops_sec: compile(r"^Ops/sec:\s*(\d+)"),
            re_notes: compile(r"^Notes:\s*(\S.*)"),
            re_per_op_alt: compile(r"^(\d+)\s*ns/op\b"),
            re_ops_sec_alt: compile(r"^(\d+)\s*ops/sec\b"),
        }
    }

    fn parse(&self, source: &SourceId, raw_text: &str) -> Vec<MetricRecord> {
        let lines: Vec<&str> = raw_text.lines().collect();
        let mut records = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i].trim();
            if !is_name_line(line) {
                i += 1;
                continue;
            }

            let name = line.trim_end_matches(':').trim().to_string();
            let mut per_op_ns: Option<u64> = None;
            let mut iterations: Option<u64> = None;
            let mut ops_sec: Option<u64> = None;
            let mut notes: Option<String> = None;

            let mut j = i + 1;
            while j < lines.len() {
                let kv = lines[j].trim();
                if kv.is_empty() || is_name_line(kv) {
                    break;
                }
                if DEBUG_PREFIXES.iter().any(|p| kv.starts_with(p)) {
                    j += 1;
                    continue;
                }

                if let Some(v) = capture_u64(&self.re_iterations, kv) {
                    if iterations.is_none() {
                        iterations = Some(v);
                    }
                } else if self.re_total_time.is_match(kv) {
                    // Total time is recognized so it cannot be mistaken for
                    // a name line; the per-op time is the canonical quantity.
                } else if let Some(v) = capture_u64(&self.re_per_op, kv)
                    .or_else(|| capture_u64(&self.re_per_op_alt, kv))
                {
                    if per_op_ns.is_none() {
                        per_op_ns = Some(v);
                    }
                } else if let Some(v) = capture_u64(&self.re_ops_sec, kv)
                    .or_else(|| capture_u64(&self.re_ops_sec_alt, kv))
                {
                    if ops_sec.is_none() {
                        ops_sec = Some(v);
                    }
                } else if let Some(caps) = self.re_notes.captures(kv) {
                    if notes.is_none() {
                        notes = Some(caps[1].trim().to_string());
                    }
                }
                // Anything else is noise inside the block; keep scanning.
                j += 1;
            }

            // A block without a per-op time yields no record.
            if let Some(time_ns) = per_op_ns {
                let mut record = MetricRecord::new(source.clone(), name, time_ns);
                if let Some(it) = iterations {
                    record = record.with_iterations(it);
                }
                if let Some(ops) = ops_sec {
                    record = record.with_throughput(Throughput::OpsPerSec(ops));
                }
                if let Some(n) = notes {
                    record = record.with_notes(n);
                }
                records.push(record);
            }

            i = j;
        }

        records
    }
}

fn compile(pattern: &str) -> Regex {
    // The patterns are fixed literals; compilation cannot fail at runtime.
    Regex::new(pattern).expect("block parser pattern compiles")
}

fn capture_u64(re: &Regex, line: &str) -> Option<u64> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}

/// A benchmark name line ends with `:` and is not itself a key-value line.
fn is_name_line(line: &str) -> bool {
    line.ends_with(':')
        && line.len() > 1
        && !KEY_PREFIXES.iter().any(|k| line.starts_with(k))
}

/// Parse block-format text into records.
pub(super) fn parse(source: &SourceId, raw_text: &str) -> Vec<MetricRecord> {
    PARSER.parse(source, raw_text)
}
