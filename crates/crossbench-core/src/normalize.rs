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

//! Benchmark name canonicalization.
//!
//! Independently written producers print the same logical benchmark with
//! different casing and spacing. Normalization is deliberately limited to
//! whitespace and case: no stemming, no typo correction, so two names match
//! only when their producers agree on the words.

/// Canonicalize a human-readable benchmark label into a matching key.
///
/// Trims leading/trailing whitespace, collapses internal whitespace runs to
/// a single space, and lowercases. Deterministic and total; two raw names
/// that normalize identically denote the same logical benchmark.
pub fn normalize_name(raw_name: &str) -> String {
    raw_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(normalize_name("  Parse   JSON "), "parse json");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize_name("Parse JSON"), normalize_name("parse json"));
    }

    #[test]
    fn test_tabs_and_newlines_collapse() {
        assert_eq!(normalize_name("Parse\t\tJSON\n(small)"), "parse json (small)");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_name("  Parse   Small  JSON ");
        assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn test_distinct_wordings_stay_distinct() {
        // No fuzzy matching: different word order is a different benchmark.
        assert_ne!(
            normalize_name("Parse JSON (small)"),
            normalize_name("parse small json")
        );
    }
}
