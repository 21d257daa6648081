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

//! CrossBench command-line interface library.
//!
//! The binary is a thin collaborator around `crossbench-core`: it reads
//! captured benchmark output files, declares each file's format and status,
//! invokes the engine once, and writes the rendered report to stdout or a
//! file. Running and timing the benchmark programs themselves is out of
//! scope — outputs are captured by whatever drives the benchmarks.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
