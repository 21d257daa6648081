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

//! Structured error types for the CrossBench CLI.

use crossbench_core::CompareError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read or write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// A malformed `--source`, `--failed`, or `--baseline` argument.
    #[error("Invalid argument: {0}")]
    InvalidSpec(String),

    /// An error surfaced by the comparison engine.
    #[error("{0}")]
    Compare(#[from] CompareError),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        Self::InvalidSpec(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "out/tml.txt",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/tml.txt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_invalid_spec_display() {
        let err = CliError::invalid_spec("expected NAME=FORMAT:PATH, got 'tml'");
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected NAME=FORMAT:PATH, got 'tml'"
        );
    }

    #[test]
    fn test_compare_error_conversion() {
        let err: CliError = CompareError::UnknownFormat("csv".to_string()).into();
        assert!(err.to_string().contains("csv"));
    }
}
