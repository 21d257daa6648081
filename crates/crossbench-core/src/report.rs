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

//! Report document construction.
//!
//! [`generate_report`] is the single entry point of the engine: it takes a
//! complete snapshot of [`SourceRun`]s, matches and ranks them, and builds
//! an immutable [`ReportDocument`]. The document is a serializable tree;
//! rendering to Markdown, fixed-width text, or JSON lives in the renderer
//! module. Content and ordering are fixed, so identical inputs produce
//! byte-identical renderings.

use crate::matcher::{match_runs, MatchGroup};
use crate::record::{RunStatus, SourceId, SourceRun, Throughput};
use crate::verdict::{rank, summarize, AggregateSummary, Verdict};
use serde::{Deserialize, Serialize};

/// Default report title when the caller does not provide one.
const DEFAULT_TITLE: &str = "Cross-Source Benchmark Comparison";

/// Caller-supplied report metadata.
///
/// The core never reads a clock or inspects the platform; whatever should
/// appear in the header arrives here as preformatted strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Report title; a fixed default is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Generation timestamp, already formatted by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    /// Platform/toolchain description, already formatted by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Free-form notes appended to the report.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// One row of a group's comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRow {
    /// The source this row belongs to.
    pub source: SourceId,
    /// Per-op time in nanoseconds.
    pub time_ns: u64,
    /// Reported throughput, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<Throughput>,
    /// Iteration count, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,
    /// Verdict against the group's reference entry; `None` for the
    /// reference row itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    /// Whether this row is the entry the others were compared against.
    pub is_reference: bool,
}

/// One per-benchmark section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSection {
    /// Canonical matching key; sections are sorted by this.
    pub normalized_name: String,
    /// Display heading: the name as printed by the first source (in id
    /// order) that reported it.
    pub title: String,
    /// Source with the minimum time; `None` for single-entry groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastest: Option<SourceId>,
    /// One row per source, in source-id order.
    pub rows: Vec<GroupRow>,
}

/// A failed run surfaced in the report's errors section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// The source whose run failed.
    pub source: SourceId,
    /// Failure reason, verbatim from the run status.
    pub reason: String,
}

/// The finished comparison report: an ordered, immutable, serializable
/// tree of sections. Built once per invocation from a fixed snapshot of
/// runs; consumed by the renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Resolved report title.
    pub title: String,
    /// Caller-supplied metadata echoed into the header.
    pub metadata: RunMetadata,
    /// The baseline source verdicts were requested against, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<SourceId>,
    /// Per-benchmark sections, sorted by normalized name.
    pub groups: Vec<GroupSection>,
    /// Cross-group win counts and mean times.
    pub summary: AggregateSummary,
    /// Every failed run, in source-id order. Always present, possibly
    /// empty, so failures are never silently dropped.
    pub errors: Vec<ErrorEntry>,
}

/// Generate a comparison report from a complete snapshot of runs.
///
/// Deterministic given identical inputs. Failed runs contribute no records
/// but appear verbatim in the errors section; zero successful sources
/// still produce a valid document with zero groups.
pub fn generate_report(runs: &[SourceRun], baseline: Option<&SourceId>) -> ReportDocument {
    generate_report_with(runs, baseline, RunMetadata::default())
}

/// [`generate_report`] with caller-supplied header metadata.
pub fn generate_report_with(
    runs: &[SourceRun],
    baseline: Option<&SourceId>,
    metadata: RunMetadata,
) -> ReportDocument {
    let mut groups = match_runs(runs);
    groups.sort_by(|a, b| a.normalized_name.cmp(&b.normalized_name));

    let rankings: Vec<_> = groups.iter().map(|g| rank(g, baseline)).collect();
    let summary = summarize(&groups, &rankings);

    let sections = groups
        .iter()
        .zip(&rankings)
        .map(|(group, ranking)| build_section(group, ranking))
        .collect();

    let mut errors: Vec<ErrorEntry> = runs
        .iter()
        .filter_map(|run| match &run.status {
            RunStatus::Failed(reason) => Some(ErrorEntry {
                source: run.source.clone(),
                reason: reason.clone(),
            }),
            RunStatus::Success => None,
        })
        .collect();
    errors.sort_by(|a, b| a.source.cmp(&b.source));

    let title = metadata
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    ReportDocument {
        title,
        metadata,
        baseline: baseline.cloned(),
        groups: sections,
        summary,
        errors,
    }
}

fn build_section(group: &MatchGroup, ranking: &crate::verdict::Ranking) -> GroupSection {
    let rows = group
        .entries
        .iter()
        .map(|(source, record)| {
            let is_reference = ranking.reference.as_ref() == Some(source);
            GroupRow {
                source: source.clone(),
                time_ns: record.time_ns,
                throughput: record.throughput,
                iterations: record.iterations,
                verdict: if is_reference {
                    None
                } else {
                    Some(
                        ranking
                            .verdicts
                            .get(source)
                            .copied()
                            .unwrap_or(Verdict::Unavailable),
                    )
                },
                is_reference,
            }
        })
        .collect();

    let title = group
        .entries
        .values()
        .next()
        .map(|record| record.test_name.trim().to_string())
        .unwrap_or_else(|| group.normalized_name.clone());

    GroupSection {
        normalized_name: group.normalized_name.clone(),
        title,
        fastest: ranking.fastest.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::FormatKind;

    fn success(source: &str, text: &str, format: FormatKind) -> SourceRun {
        SourceRun::parsed(SourceId::new(source), text, format)
    }

    #[test]
    fn test_sections_sorted_by_normalized_name() {
        let run = success(
            "tml",
            "Zeta:\n  Per op: 10 ns\n\nAlpha:\n  Per op: 20 ns\n",
            FormatKind::Block,
        );
        let doc = generate_report(&[run], None);
        let names: Vec<&str> = doc
            .groups
            .iter()
            .map(|g| g.normalized_name.as_str())
            .collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[test]
    fn test_baseline_verdicts() {
        let a = success("a", "x: 100 ns", FormatKind::Freeform);
        let b = success("b", "x: 200 ns", FormatKind::Freeform);
        let baseline = SourceId::new("a");
        let doc = generate_report(&[a, b], Some(&baseline));

        assert_eq!(doc.baseline, Some(baseline.clone()));
        assert_eq!(doc.groups.len(), 1);
        let rows = &doc.groups[0].rows;
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_reference);
        assert_eq!(rows[0].verdict, None);
        assert_eq!(rows[1].verdict, Some(Verdict::Slower { ratio: 2.0 }));
    }

    #[test]
    fn test_failed_run_lands_in_errors_only() {
        let ok = success("a", "x: 100 ns", FormatKind::Freeform);
        let bad = SourceRun::failed(SourceId::new("b"), "timeout");
        let doc = generate_report(&[ok, bad], None);

        assert_eq!(doc.groups.len(), 1);
        assert_eq!(doc.groups[0].rows.len(), 1);
        assert_eq!(doc.errors.len(), 1);
        assert_eq!(doc.errors[0].source, SourceId::new("b"));
        assert_eq!(doc.errors[0].reason, "timeout");
    }

    #[test]
    fn test_empty_input_still_generates() {
        let bad = SourceRun::failed(SourceId::new("only"), "crashed");
        let doc = generate_report(&[bad], None);
        assert!(doc.groups.is_empty());
        assert_eq!(doc.summary.groups, 0);
        assert_eq!(doc.errors.len(), 1);
    }

    #[test]
    fn test_errors_section_always_present_but_empty() {
        let ok = success("a", "x: 100 ns", FormatKind::Freeform);
        let doc = generate_report(&[ok], None);
        assert!(doc.errors.is_empty());
    }

    #[test]
    fn test_default_title_and_metadata_title() {
        let doc = generate_report(&[], None);
        assert_eq!(doc.title, "Cross-Source Benchmark Comparison");

        let metadata = RunMetadata {
            title: Some("JSON parsing".to_string()),
            ..RunMetadata::default()
        };
        let doc = generate_report_with(&[], None, metadata);
        assert_eq!(doc.title, "JSON parsing");
    }

    #[test]
    fn test_section_title_uses_printed_name() {
        let run = success("a", "Parse  Small   JSON: 100 ns", FormatKind::Freeform);
        let doc = generate_report(&[run], None);
        assert_eq!(doc.groups[0].normalized_name, "parse small json");
        assert_eq!(doc.groups[0].title, "Parse  Small   JSON");
    }

    #[test]
    fn test_determinism_is_input_order_independent() {
        let a = success("a", "x: 100 ns\ny: 50 ns", FormatKind::Freeform);
        let b = success("b", "y: 75 ns\nx: 200 ns", FormatKind::Freeform);
        let doc_ab = generate_report(&[a.clone(), b.clone()], None);
        let doc_ba = generate_report(&[b, a], None);
        assert_eq!(doc_ab, doc_ba);
    }
}
