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

//! Tabular single-line format parser.
//!
//! One record per line, fields separated by runs of two or more spaces:
//!
//! ```text
//! Parse small JSON    12.34 us    10000 iters    210.50 MB/s
//! ```
//!
//! The time unit is microseconds; the throughput field is optional. Header
//! and separator lines carry no parseable `<number> us` field and fall out
//! naturally.

use super::to_nanos;
use crate::record::{MetricRecord, SourceId, Throughput};
use once_cell::sync::Lazy;
use regex::Regex;

/// Per-parser precompiled patterns for the field shapes.
struct TabularParser {
    re_fields: Regex,
    re_time: Regex,
    re_iters: Regex,
    re_throughput: Regex,
}

static PARSER: Lazy<TabularParser> = Lazy::new(TabularParser::new);

impl TabularParser {
    fn new() -> Self {
        Self {
            re_fields: compile(r"\s{2,}"),
            re_time: compile(r"^(\d+(?:\.\d+)?)\s*us$"),
            re_iters: compile(r"^(\d+)\s*iters$"),
            re_throughput: compile(r"^(\d+(?:\.\d+)?)\s*MB/s$"),
        }
    }

    fn parse(&self, source: &SourceId, raw_text: &str) -> Vec<MetricRecord> {
        let mut records = Vec::new();

        for line in raw_text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = self
                .re_fields
                .split(line)
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .collect();
            if fields.len() < 2 {
                continue;
            }

            // The first field is the name; the time field must follow it.
            let Some(time_ns) = fields[1..].iter().find_map(|f| {
                let caps = self.re_time.captures(f)?;
                to_nanos(caps[1].parse().ok()?, "us")
            }) else {
                continue;
            };

            let mut record = MetricRecord::new(source.clone(), fields[0], time_ns);
            for field in &fields[1..] {
                if let Some(caps) = self.re_iters.captures(field) {
                    if let Ok(iters) = caps[1].parse() {
                        record = record.with_iterations(iters);
                    }
                } else if let Some(caps) = self.re_throughput.captures(field) {
                    if let Ok(mbs) = caps[1].parse() {
                        record = record.with_throughput(Throughput::MegabytesPerSec(mbs));
                    }
                }
            }
            records.push(record);
        }

        records
    }
}

fn compile(pattern: &str) -> Regex {
    // The patterns are fixed literals; compilation cannot fail at runtime.
    Regex::new(pattern).expect("tabular parser pattern compiles")
}

/// Parse tabular-format text into records.
pub(super) fn parse(source: &SourceId, raw_text: &str) -> Vec<MetricRecord> {
    PARSER.parse(source, raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src() -> SourceId {
        SourceId::new("go")
    }

    #[test]
    fn test_full_line() {
        let records = parse(&src(), "Parse small JSON    12.34 us    10000 iters    210.50 MB/s");
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.test_name, "Parse small JSON");
        assert_eq!(rec.time_ns, 12_340);
        assert_eq!(rec.iterations, Some(10_000));
        assert_eq!(rec.throughput, Some(Throughput::MegabytesPerSec(210.5)));
    }

    #[test]
    fn test_throughput_is_optional() {
        let records = parse(&src(), "Serialize medium  450.00 us  2000 iters");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time_ns, 450_000);
        assert_eq!(records[0].throughput, None);
    }

    #[test]
    fn test_integral_time() {
        let records = parse(&src(), "Encode  7 us  10 iters");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time_ns, 7_000);
    }

    #[test]
    fn test_header_and_separator_lines_skipped() {
        let text = "\
Test Name           Time (us)     Iterations    Throughput
----------------------------------------------------------
Parse small JSON    12.34 us      10000 iters   210.50 MB/s
";
        let records = parse(&src(), text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].test_name, "Parse small JSON");
    }

    #[test]
    fn test_line_without_time_token_skipped() {
        let records = parse(&src(), "Parse small JSON    fast    10000 iters");
        assert!(records.is_empty());
    }

    #[test]
    fn test_single_spaces_inside_name_preserved() {
        let records = parse(&src(), "Parse nested JSON deep  3.50 us");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].test_name, "Parse nested JSON deep");
        assert_eq!(records[0].normalized_name, "parse nested json deep");
    }

    #[test]
    fn test_zero_time_floors_to_one_nanosecond() {
        let records = parse(&src(), "Noop  0 us  1 iters");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time_ns, 1);
    }

    #[test]
    fn test_duplicate_names_both_kept() {
        let text = "Alpha  1.00 us\nAlpha  2.00 us\n";
        let records = parse(&src(), text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].time_ns, 1_000);
        assert_eq!(records[1].time_ns, 2_000);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse(&src(), "").is_empty());
    }
}
