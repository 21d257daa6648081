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

//! Parser and pipeline benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use crossbench_core::{generate_report, FormatKind, SourceId, SourceRun};

fn block_fixture(benchmarks: usize) -> String {
    let mut text = String::new();
    for i in 0..benchmarks {
        text.push_str(&format!(
            "Benchmark {}:\n  Iterations: 10000\n  Total time: 50 ms\n  Per op: {} ns\n  Ops/sec: 200000\n\n",
            i,
            100 + i
        ));
    }
    text
}

fn tabular_fixture(benchmarks: usize) -> String {
    let mut text = String::new();
    for i in 0..benchmarks {
        text.push_str(&format!(
            "Benchmark {}    {}.50 us    10000 iters    {}.00 MB/s\n",
            i,
            10 + i,
            100 + i
        ));
    }
    text
}

fn freeform_fixture(benchmarks: usize) -> String {
    let mut text = String::new();
    for i in 0..benchmarks {
        text.push_str(&format!("Benchmark {}: {} ns\n", i, 1000 + i));
    }
    text
}

fn bench_parsers(c: &mut Criterion) {
    let source = SourceId::new("bench");
    let fixtures = [
        (FormatKind::Block, block_fixture(200)),
        (FormatKind::Tabular, tabular_fixture(200)),
        (FormatKind::Freeform, freeform_fixture(200)),
    ];

    let mut group = c.benchmark_group("parse");
    for (kind, text) in &fixtures {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| kind.parse(black_box(&source), black_box(text)))
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let runs = vec![
        SourceRun::parsed(SourceId::new("tml"), &block_fixture(100), FormatKind::Block),
        SourceRun::parsed(SourceId::new("go"), &tabular_fixture(100), FormatKind::Tabular),
        SourceRun::parsed(
            SourceId::new("rust"),
            &freeform_fixture(100),
            FormatKind::Freeform,
        ),
    ];
    let baseline = SourceId::new("tml");

    c.bench_function("generate_report", |b| {
        b.iter(|| generate_report(black_box(&runs), Some(black_box(&baseline))))
    });

    let doc = generate_report(&runs, Some(&baseline));
    c.bench_function("render_markdown", |b| {
        b.iter(|| black_box(&doc).to_markdown())
    });
}

criterion_group!(benches, bench_parsers, bench_full_pipeline);
criterion_main!(benches);
