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

//! Error types for the comparison engine.
//!
//! The pipeline itself is total: unparseable text yields fewer records and
//! failed runs surface in the report's errors section. The variants here
//! cover the only genuinely fallible edges — resolving a format name from a
//! caller-supplied string, and JSON encoding of a finished document.

use thiserror::Error;

/// An error from the comparison engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompareError {
    /// A format name that does not match any supported parser strategy.
    #[error("unknown format kind '{0}' (expected one of: block, tabular, freeform)")]
    UnknownFormat(String),

    /// JSON encoding of a report document failed.
    #[error("JSON encoding error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CompareError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}

/// Result type for comparison operations.
pub type CompareResult<T> = std::result::Result<T, CompareError>;
