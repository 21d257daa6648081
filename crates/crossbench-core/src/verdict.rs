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

//! Verdict classification and ranking.
//!
//! Verdicts compare one entry's per-op time against a reference entry in
//! the same group: the designated baseline source when one is set and
//! present, otherwise the group's fastest entry. Classification thresholds:
//!
//! - `ratio <= 0.80` → faster than the reference
//! - `0.80 < ratio <= 1.20` → tied
//! - `ratio > 1.20` → slower, reporting the ratio to two decimal places
//!
//! Both operands are floored to 1 ns before dividing, so a sub-measurable
//! timing degrades to an extreme but finite ratio instead of a division by
//! zero.

use crate::matcher::MatchGroup;
use crate::record::SourceId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Upper ratio bound for a "faster than reference" verdict.
pub const FASTER_BOUND: f64 = 0.80;
/// Upper ratio bound for a "tied" verdict.
pub const TIED_BOUND: f64 = 1.20;

/// Classified relative-performance judgment between two records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Faster than the reference by the given ratio (> 1.0).
    Faster {
        /// How many times faster.
        ratio: f64,
    },
    /// Slower than the reference by the given ratio (> 1.0).
    Slower {
        /// How many times slower.
        ratio: f64,
    },
    /// Within the tie band of the reference.
    Tied,
    /// No comparison possible (missing data).
    Unavailable,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Faster { ratio } => write!(f, "{:.2}x faster", ratio),
            Self::Slower { ratio } => write!(f, "{:.2}x slower", ratio),
            Self::Tied => f.write_str("~tied"),
            Self::Unavailable => f.write_str("N/A"),
        }
    }
}

/// Floor a timing for ratio computation. 1 ns stands in for "measured as
/// zero", keeping every ratio finite.
fn floor_ns(time_ns: u64) -> u64 {
    time_ns.max(1)
}

/// Classify `time_ns` against `reference_ns`.
pub fn classify(time_ns: u64, reference_ns: u64) -> Verdict {
    let ratio = floor_ns(time_ns) as f64 / floor_ns(reference_ns) as f64;
    if ratio <= FASTER_BOUND {
        Verdict::Faster { ratio: 1.0 / ratio }
    } else if ratio <= TIED_BOUND {
        Verdict::Tied
    } else {
        Verdict::Slower { ratio }
    }
}

/// Per-group ranking: the fastest source plus a verdict for every
/// non-reference entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Source with the minimum time; `None` for groups with fewer than two
    /// entries.
    pub fastest: Option<SourceId>,
    /// The entry the verdicts were computed against: the baseline when set
    /// and present in the group, otherwise the fastest entry.
    pub reference: Option<SourceId>,
    /// Verdict per non-reference source in the group.
    pub verdicts: BTreeMap<SourceId, Verdict>,
}

/// Rank one match group, optionally against a designated baseline source.
///
/// Groups with fewer than two entries produce no comparison: `fastest` and
/// `reference` are `None` and every entry is `Unavailable`. Ties on the
/// minimum time resolve to the smallest source id, keeping the result
/// deterministic.
pub fn rank(group: &MatchGroup, baseline: Option<&SourceId>) -> Ranking {
    if !group.is_comparable() {
        let verdicts = group
            .entries
            .keys()
            .map(|source| (source.clone(), Verdict::Unavailable))
            .collect();
        return Ranking {
            fastest: None,
            reference: None,
            verdicts,
        };
    }

    // Equal times resolve to the smallest source id via the composite key.
    let fastest = group
        .entries
        .iter()
        .min_by_key(|(source, record)| (record.time_ns, (*source).clone()))
        .map(|(source, _)| source.clone());

    let reference = baseline
        .filter(|b| group.entries.contains_key(*b))
        .cloned()
        .or_else(|| fastest.clone());

    let mut verdicts = BTreeMap::new();
    if let Some(reference_id) = &reference {
        let reference_ns = group.entries[reference_id].time_ns;
        for (source, record) in &group.entries {
            if source != reference_id {
                verdicts.insert(source.clone(), classify(record.time_ns, reference_ns));
            }
        }
    }

    Ranking {
        fastest,
        reference,
        verdicts,
    }
}

/// Descriptive cross-group statistics per source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// How many comparable groups each source won (was fastest in).
    pub wins: BTreeMap<SourceId, usize>,
    /// Mean per-op time per source across all groups it has an entry in.
    pub mean_time_ns: BTreeMap<SourceId, u64>,
    /// Total number of match groups.
    pub groups: usize,
    /// Groups with at least two entries.
    pub comparable_groups: usize,
}

/// Summarize rankings across all groups.
///
/// `rankings` must be positionally parallel to `groups`.
pub fn summarize(groups: &[MatchGroup], rankings: &[Ranking]) -> AggregateSummary {
    let mut wins: BTreeMap<SourceId, usize> = BTreeMap::new();
    let mut totals: BTreeMap<SourceId, (u128, u64)> = BTreeMap::new();

    for (group, ranking) in groups.iter().zip(rankings) {
        if let Some(fastest) = &ranking.fastest {
            *wins.entry(fastest.clone()).or_insert(0) += 1;
        }
        for (source, record) in &group.entries {
            let (sum, count) = totals.entry(source.clone()).or_insert((0, 0));
            *sum += u128::from(record.time_ns);
            *count += 1;
        }
    }

    let mean_time_ns = totals
        .into_iter()
        .map(|(source, (sum, count))| (source, (sum / u128::from(count)) as u64))
        .collect();

    AggregateSummary {
        wins,
        mean_time_ns,
        groups: groups.len(),
        comparable_groups: groups.iter().filter(|g| g.is_comparable()).count(),
    }
}
