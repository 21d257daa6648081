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

//! Cross-source matching of parsed records.

use crate::record::{MetricRecord, SourceId, SourceRun};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Records across sources judged to denote the same logical benchmark.
///
/// Invariant: every entry's `normalized_name` equals the group key. Entries
/// are keyed by source id, so at most one record per source survives into a
/// group. A group with a single entry still renders (other sources show as
/// N/A) but contributes no comparative verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchGroup {
    /// The canonical benchmark name shared by all entries.
    pub normalized_name: String,
    /// One record per source that reported this benchmark.
    pub entries: BTreeMap<SourceId, MetricRecord>,
}

impl MatchGroup {
    fn new(normalized_name: impl Into<String>) -> Self {
        Self {
            normalized_name: normalized_name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Whether this group spans enough sources to compare.
    pub fn is_comparable(&self) -> bool {
        self.entries.len() >= 2
    }
}

/// Group records from all successful runs by normalized benchmark name.
///
/// Groups come out in first-seen order across the run sequence (the report
/// builder sorts them by name for deterministic rendering). Within one
/// source, the first record for a name wins; duplicates parsed from one raw
/// text are dropped here, not at parse time. Failed runs contribute no
/// records and do not prevent other sources' records from forming groups.
pub fn match_runs(runs: &[SourceRun]) -> Vec<MatchGroup> {
    let mut groups: Vec<MatchGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for run in runs.iter().filter(|r| r.status.is_success()) {
        for record in &run.records {
            let slot = *index
                .entry(record.normalized_name.clone())
                .or_insert_with(|| {
                    groups.push(MatchGroup::new(record.normalized_name.clone()));
                    groups.len() - 1
                });
            groups[slot]
                .entries
                .entry(record.source.clone())
                .or_insert_with(|| record.clone());
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::FormatKind;

    fn run(source: &str, records: &[(&str, u64)]) -> SourceRun {
        let source = SourceId::new(source);
        SourceRun {
            source: source.clone(),
            status: crate::record::RunStatus::Success,
            records: records
                .iter()
                .map(|(name, ns)| MetricRecord::new(source.clone(), *name, *ns))
                .collect(),
        }
    }

    #[test]
    fn test_matching_across_sources() {
        let runs = vec![run("a", &[("x", 100)]), run("b", &[("x", 200)])];
        let groups = match_runs(&runs);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].normalized_name, "x");
        assert_eq!(groups[0].entries.len(), 2);
        assert!(groups[0].is_comparable());
    }

    #[test]
    fn test_names_match_after_normalization() {
        let runs = vec![
            run("a", &[("  Parse   JSON ", 100)]),
            run("b", &[("parse json", 200)]),
        ];
        let groups = match_runs(&runs);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].normalized_name, "parse json");
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let runs = vec![run("a", &[("zeta", 1), ("alpha", 2)]), run("b", &[("mid", 3)])];
        let groups = match_runs(&runs);
        let names: Vec<&str> = groups.iter().map(|g| g.normalized_name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_within_source_first_wins() {
        let runs = vec![run("a", &[("x", 100), ("x", 999)])];
        let groups = match_runs(&runs);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries[&SourceId::new("a")].time_ns, 100);
    }

    #[test]
    fn test_failed_run_contributes_nothing() {
        let mut failed = run("c", &[("x", 300)]);
        failed.status = crate::record::RunStatus::Failed("timeout".to_string());
        let runs = vec![run("a", &[("x", 100)]), failed];
        let groups = match_runs(&runs);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries.len(), 1);
        assert!(!groups[0].entries.contains_key(&SourceId::new("c")));
    }

    #[test]
    fn test_single_source_group_not_comparable() {
        let runs = vec![run("a", &[("only here", 100)])];
        let groups = match_runs(&runs);
        assert!(!groups[0].is_comparable());
    }

    #[test]
    fn test_empty_runs() {
        assert!(match_runs(&[]).is_empty());
    }

    #[test]
    fn test_entries_share_group_invariant() {
        let text = "Parse JSON:\n  Per op: 100 ns\n";
        let run = SourceRun::parsed(SourceId::new("tml"), text, FormatKind::Block);
        let groups = match_runs(&[run]);
        for group in &groups {
            for record in group.entries.values() {
                assert_eq!(record.normalized_name, group.normalized_name);
            }
        }
    }
}
