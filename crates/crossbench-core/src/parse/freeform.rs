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

//! Freeform format parser.
//!
//! For producers whose harness output is not otherwise structured: any line
//! containing an embedded `<label>: <number><unit>` pattern yields one
//! record, where the label is everything before the colon and the unit is
//! one of `ns`, `us`, `ms`. All times are converted to canonical
//! nanoseconds (`us` ×1,000, `ms` ×1,000,000).

use super::to_nanos;
use crate::record::{MetricRecord, SourceId};
use once_cell::sync::Lazy;
use regex::Regex;

/// Per-parser precompiled pattern for the embedded label/time shape.
struct FreeformParser {
    re_metric: Regex,
}

static PARSER: Lazy<FreeformParser> = Lazy::new(FreeformParser::new);

impl FreeformParser {
    fn new() -> Self {
        Self {
            // Greedy label capture: the colon matched is the one directly
            // preceding the numeric time value.
            re_metric: Regex::new(r"^(.+):\s*(\d+(?:\.\d+)?)\s*(ns|us|ms)\b")
                .expect("freeform parser pattern compiles"),
        }
    }

    fn parse(&self, source: &SourceId, raw_text: &str) -> Vec<MetricRecord> {
        let mut records = Vec::new();

        for line in raw_text.lines() {
            let line = line.trim();
            let Some(caps) = self.re_metric.captures(line) else {
                continue;
            };
            let label = caps[1].trim();
            if label.is_empty() {
                continue;
            }
            let Some(time_ns) = caps[2].parse().ok().and_then(|v| to_nanos(v, &caps[3]))
            else {
                continue;
            };
            records.push(MetricRecord::new(source.clone(), label, time_ns));
        }

        records
    }
}

/// Parse freeform text into records.
pub(super) fn parse(source: &SourceId, raw_text: &str) -> Vec<MetricRecord> {
    PARSER.parse(source, raw_text)
}
