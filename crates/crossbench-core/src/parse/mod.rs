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

//! Format-specific output parsers.
//!
//! Each submodule recognizes one textual convention used by the benchmark
//! producers and extracts [`MetricRecord`]s from raw text. There is no
//! auto-detection: the caller declares the format, since it knows which
//! program produced the output.
//!
//! All parsers share the same contract:
//!
//! - pure function of the input text, no shared mutable state (patterns are
//!   compiled once per parser module);
//! - total: malformed lines and blocks are skipped, never an error, so a
//!   noisy run salvages every recognizable record;
//! - a record without a recoverable per-operation time is dropped;
//! - duplicate benchmark names within one text are kept as separate
//!   records (the matcher applies its first-occurrence-wins policy later).

mod block;
mod freeform;
mod tabular;

use crate::error::CompareError;
use crate::record::{MetricRecord, SourceId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nanoseconds per microsecond.
pub(crate) const NS_PER_US: f64 = 1_000.0;
/// Nanoseconds per millisecond.
pub(crate) const NS_PER_MS: f64 = 1_000_000.0;

/// Convert a time value in the given textual unit to whole nanoseconds.
///
/// Conversion is exact for the integral values producers print; fractional
/// values round to the nearest nanosecond.
pub(crate) fn to_nanos(value: f64, unit: &str) -> Option<u64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let ns = match unit {
        "ns" => value,
        "us" => value * NS_PER_US,
        "ms" => value * NS_PER_MS,
        _ => return None,
    };
    Some(ns.round() as u64)
}

/// The textual convention a source's output follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// Name line followed by indented `Key: Value` lines.
    Block,
    /// One record per line, fields separated by runs of 2+ spaces.
    Tabular,
    /// Lines containing an embedded `<label>: <number><unit>` pattern.
    Freeform,
}

impl FormatKind {
    /// Parse raw output text, emitting every recognized record.
    ///
    /// Never fails: unrecognizable content yields fewer records, and an
    /// empty result is a valid outcome distinct from a failed run.
    pub fn parse(&self, source: &SourceId, raw_text: &str) -> Vec<MetricRecord> {
        match self {
            Self::Block => block::parse(source, raw_text),
            Self::Tabular => tabular::parse(source, raw_text),
            Self::Freeform => freeform::parse(source, raw_text),
        }
    }

    /// Canonical lowercase name of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Tabular => "tabular",
            Self::Freeform => "freeform",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKind {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "block" => Ok(Self::Block),
            "tabular" => Ok(Self::Tabular),
            "freeform" => Ok(Self::Freeform),
            other => Err(CompareError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kind_from_str() {
        assert_eq!("block".parse::<FormatKind>().unwrap(), FormatKind::Block);
        assert_eq!("Tabular".parse::<FormatKind>().unwrap(), FormatKind::Tabular);
        assert_eq!(
            " FREEFORM ".parse::<FormatKind>().unwrap(),
            FormatKind::Freeform
        );
    }

    #[test]
    fn test_format_kind_from_str_rejects_unknown() {
        let err = "csv".parse::<FormatKind>().unwrap_err();
        assert_eq!(err, CompareError::UnknownFormat("csv".to_string()));
    }

    #[test]
    fn test_format_kind_roundtrips_as_str() {
        for kind in [FormatKind::Block, FormatKind::Tabular, FormatKind::Freeform] {
            assert_eq!(kind.as_str().parse::<FormatKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_to_nanos_exact_conversions() {
        assert_eq!(to_nanos(1500.0, "ns"), Some(1_500));
        assert_eq!(to_nanos(1.5, "us"), Some(1_500));
        assert_eq!(to_nanos(2.0, "ms"), Some(2_000_000));
    }

    #[test]
    fn test_to_nanos_rejects_bad_input() {
        assert_eq!(to_nanos(-1.0, "ns"), None);
        assert_eq!(to_nanos(f64::NAN, "us"), None);
        assert_eq!(to_nanos(1.0, "s"), None);
    }
}
