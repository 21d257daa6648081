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

//! Report rendering.
//!
//! The document tree fixes content and ordering; these renderers only pick
//! the byte encoding. Markdown for saved reports, fixed-width text for
//! consoles, JSON for machine consumers. All three are pure functions of
//! the document, so identical inputs render byte-identically.

use crate::error::CompareResult;
use crate::record::group_digits;
use crate::report::{GroupRow, ReportDocument};

impl ReportDocument {
    /// Render the document as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", self.title));
        if let Some(ts) = &self.metadata.generated_at {
            md.push_str(&format!("**Generated:** {}\n\n", ts));
        }
        if let Some(platform) = &self.metadata.platform {
            md.push_str(&format!("**Platform:** {}\n\n", platform));
        }
        if let Some(baseline) = &self.baseline {
            md.push_str(&format!("**Baseline:** {}\n\n", baseline));
        }
        md.push_str("---\n\n");

        for group in &self.groups {
            md.push_str(&format!("## {}\n\n", group.title));
            md.push_str("| Source | Time | Throughput | Iterations | Verdict |\n");
            md.push_str("|---|---:|---:|---:|---|\n");
            for row in &group.rows {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    row.source,
                    format_time(row.time_ns),
                    row.throughput
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "N/A".to_string()),
                    row.iterations
                        .map(group_digits)
                        .unwrap_or_else(|| "N/A".to_string()),
                    self.verdict_cell(row),
                ));
            }
            md.push('\n');
        }

        md.push_str("## Summary\n\n");
        if self.summary.wins.is_empty() {
            md.push_str("No comparable benchmark groups.\n\n");
        } else {
            md.push_str("| Source | Wins | % |\n");
            md.push_str("|---|---:|---:|\n");
            for (source, wins) in &self.summary.wins {
                md.push_str(&format!(
                    "| {} | {} | {}% |\n",
                    source,
                    wins,
                    percent(*wins, self.summary.comparable_groups)
                ));
            }
            md.push('\n');
        }
        if !self.summary.mean_time_ns.is_empty() {
            md.push_str("| Source | Mean time |\n");
            md.push_str("|---|---:|\n");
            for (source, mean) in &self.summary.mean_time_ns {
                md.push_str(&format!("| {} | {} |\n", source, format_time(*mean)));
            }
            md.push('\n');
        }
        md.push_str(&format!(
            "{} groups, {} comparable.\n\n",
            self.summary.groups, self.summary.comparable_groups
        ));

        md.push_str("## Errors\n\n");
        if self.errors.is_empty() {
            md.push_str("(none)\n");
        } else {
            for error in &self.errors {
                md.push_str(&format!("- **{}**: {}\n", error.source, error.reason));
            }
        }

        if !self.metadata.notes.is_empty() {
            md.push_str("\n## Notes\n\n");
            for (i, note) in self.metadata.notes.iter().enumerate() {
                md.push_str(&format!("{}. {}\n", i + 1, note));
            }
        }

        md
    }

    /// Render the document as fixed-width console text.
    pub fn to_text(&self) -> String {
        let bar = "=".repeat(80);
        let mut out = String::new();

        out.push_str(&format!("{}\n{}\n{}\n", bar, self.title, bar));
        if let Some(ts) = &self.metadata.generated_at {
            out.push_str(&format!("Generated: {}\n", ts));
        }
        if let Some(platform) = &self.metadata.platform {
            out.push_str(&format!("Platform:  {}\n", platform));
        }
        if let Some(baseline) = &self.baseline {
            out.push_str(&format!("Baseline:  {}\n", baseline));
        }

        for group in &self.groups {
            out.push_str(&format!("\n{}\n", group.title));
            out.push_str(&format!(
                "{:<15} {:>12} {:>16} {:>12} {:>14}\n",
                "Source", "Time", "Throughput", "Iterations", "Verdict"
            ));
            out.push_str(&format!("{:-<72}\n", ""));
            for row in &group.rows {
                out.push_str(&format!(
                    "{:<15} {:>12} {:>16} {:>12} {:>14}\n",
                    truncate(row.source.as_str(), 15),
                    format_time(row.time_ns),
                    row.throughput
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "N/A".to_string()),
                    row.iterations
                        .map(group_digits)
                        .unwrap_or_else(|| "N/A".to_string()),
                    self.verdict_cell(row),
                ));
            }
        }

        out.push_str("\nSummary\n");
        out.push_str(&format!("{:-<40}\n", ""));
        if self.summary.wins.is_empty() {
            out.push_str("No comparable benchmark groups.\n");
        } else {
            for (source, wins) in &self.summary.wins {
                out.push_str(&format!(
                    "{:<15} {:>3} wins ({}%)\n",
                    truncate(source.as_str(), 15),
                    wins,
                    percent(*wins, self.summary.comparable_groups)
                ));
            }
        }
        for (source, mean) in &self.summary.mean_time_ns {
            out.push_str(&format!(
                "{:<15} {:>12} mean\n",
                truncate(source.as_str(), 15),
                format_time(*mean)
            ));
        }
        out.push_str(&format!(
            "{} groups, {} comparable\n",
            self.summary.groups, self.summary.comparable_groups
        ));

        out.push_str("\nErrors\n");
        out.push_str(&format!("{:-<40}\n", ""));
        if self.errors.is_empty() {
            out.push_str("(none)\n");
        } else {
            for error in &self.errors {
                out.push_str(&format!("{}: {}\n", error.source, error.reason));
            }
        }

        for note in &self.metadata.notes {
            out.push_str(&format!("\nNote: {}\n", note));
        }

        out.push_str(&format!("{}\n", bar));
        out
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> CompareResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn verdict_cell(&self, row: &GroupRow) -> String {
        if row.is_reference {
            if self.baseline.as_ref() == Some(&row.source) {
                "baseline".to_string()
            } else {
                "fastest".to_string()
            }
        } else {
            row.verdict
                .map(|v| v.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        }
    }
}

/// Adaptive time display: `384 ns`, `5.00 µs`, `12.40 ms`, `1.20 s`.
fn format_time(ns: u64) -> String {
    if ns < 1_000 {
        format!("{} ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2} µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2} ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", ns as f64 / 1_000_000_000.0)
    }
}

fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        "0".to_string()
    } else {
        format!("{:.0}", 100.0 * part as f64 / whole as f64)
    }
}

/// Truncate a string to `max_len` with an ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::FormatKind;
    use crate::record::{SourceId, SourceRun};
    use crate::report::{generate_report, generate_report_with, RunMetadata};

    fn sample_doc() -> ReportDocument {
        let tml = SourceRun::parsed(
            SourceId::new("tml"),
            "Parse small JSON:\n  Per op: 5000 ns\n  Iterations: 10000\n",
            FormatKind::Block,
        );
        let go = SourceRun::parsed(
            SourceId::new("go"),
            "Parse small JSON    6.20 us    10000 iters    150.00 MB/s",
            FormatKind::Tabular,
        );
        let rust = SourceRun::failed(SourceId::new("rust"), "timeout after 300s");
        let baseline = SourceId::new("tml");
        generate_report(&[tml, go, rust], Some(&baseline))
    }

    #[test]
    fn test_markdown_contains_group_table() {
        let md = sample_doc().to_markdown();
        assert!(md.contains("# Cross-Source Benchmark Comparison"));
        assert!(md.contains("## Parse small JSON"));
        assert!(md.contains("| Source | Time | Throughput | Iterations | Verdict |"));
        assert!(md.contains("| tml | 5.00 µs | N/A | 10,000 | baseline |"));
        assert!(md.contains("| go | 6.20 µs | 150.00 MB/s | 10,000 | 1.24x slower |"));
    }

    #[test]
    fn test_markdown_errors_verbatim() {
        let md = sample_doc().to_markdown();
        assert!(md.contains("## Errors"));
        assert!(md.contains("- **rust**: timeout after 300s"));
    }

    #[test]
    fn test_markdown_errors_section_present_when_empty() {
        let doc = generate_report(&[], None);
        let md = doc.to_markdown();
        assert!(md.contains("## Errors"));
        assert!(md.contains("(none)"));
    }

    #[test]
    fn test_markdown_metadata_header() {
        let metadata = RunMetadata {
            title: Some("JSON parsing".to_string()),
            generated_at: Some("2025-06-01 12:00:00".to_string()),
            platform: Some("Linux x86_64".to_string()),
            notes: vec!["single run, no warmup".to_string()],
        };
        let md = generate_report_with(&[], None, metadata).to_markdown();
        assert!(md.starts_with("# JSON parsing"));
        assert!(md.contains("**Generated:** 2025-06-01 12:00:00"));
        assert!(md.contains("**Platform:** Linux x86_64"));
        assert!(md.contains("## Notes"));
        assert!(md.contains("1. single run, no warmup"));
    }

    #[test]
    fn test_text_rendering_contains_sections() {
        let text = sample_doc().to_text();
        assert!(text.contains("Cross-Source Benchmark Comparison"));
        assert!(text.contains("Parse small JSON"));
        assert!(text.contains("baseline"));
        assert!(text.contains("1.24x slower"));
        assert!(text.contains("rust: timeout after 300s"));
    }

    #[test]
    fn test_json_roundtrips() {
        let doc = sample_doc();
        let json = doc.to_json().unwrap();
        let parsed: ReportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = sample_doc();
        let b = sample_doc();
        assert_eq!(a.to_markdown(), b.to_markdown());
        assert_eq!(a.to_text(), b.to_text());
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    #[test]
    fn test_format_time_ranges() {
        assert_eq!(format_time(384), "384 ns");
        assert_eq!(format_time(5_000), "5.00 µs");
        assert_eq!(format_time(12_400_000), "12.40 ms");
        assert_eq!(format_time(1_200_000_000), "1.20 s");
    }

    #[test]
    fn test_percent_guard() {
        assert_eq!(percent(1, 0), "0");
        assert_eq!(percent(1, 2), "50");
        assert_eq!(percent(2, 3), "67");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 15), "short");
        assert_eq!(truncate("a-very-long-source-name", 15), "a-very-long-...");
    }
}
