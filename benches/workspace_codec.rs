//! Benchmarks for workspace export decoding and encoding
//!
//! This benchmark measures:
//! - Decoding an export from an already parsed JSON value
//! - Decoding straight from response text
//! - Re-encoding to a JSON value

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use watson_models::codec::{self, ArrayPolicy, DecodeOptions, JsonModel};
use watson_models::conversation::WorkspaceExport;

fn sample_export(intents: usize) -> Value {
    let intents: Vec<Value> = (0..intents)
        .map(|i| {
            json!({
                "intent": format!("intent_{}", i),
                "created": "2017-05-01T10:00:00.000Z",
                "updated": "2017-05-02T10:00:00.000Z",
                "examples": (0..10).map(|j| json!({
                    "text": format!("example {} of intent {}", j, i),
                    "created": "2017-05-01T10:00:00.000Z",
                    "updated": "2017-05-02T10:00:00.000Z"
                })).collect::<Vec<_>>()
            })
        })
        .collect();

    json!({
        "name": "Benchmark",
        "description": "Generated workspace",
        "language": "en",
        "metadata": {},
        "created": "2017-05-01T10:00:00.000Z",
        "updated": "2017-05-02T10:00:00.000Z",
        "workspace_id": "bench",
        "status": "Available",
        "learning_opt_out": false,
        "intents": intents
    })
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("workspace_export_decode");
    let skip_invalid = DecodeOptions::new().with_array_policy(ArrayPolicy::SkipInvalid);

    for size in [10usize, 100, 1000] {
        let value = sample_export(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("all_or_nothing", size), &value, |b, v| {
            b.iter(|| WorkspaceExport::from_json(black_box(v)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("skip_invalid", size), &value, |b, v| {
            b.iter(|| WorkspaceExport::from_json_with(black_box(v), &skip_invalid).unwrap())
        });
    }
    group.finish();
}

fn bench_decode_text(c: &mut Criterion) {
    let text = serde_json::to_string(&sample_export(100)).unwrap();
    c.bench_function("workspace_export_from_str_100", |b| {
        b.iter(|| codec::from_str::<WorkspaceExport>(black_box(&text)).unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let export = WorkspaceExport::from_json(&sample_export(100)).unwrap();
    c.bench_function("workspace_export_to_json_100", |b| {
        b.iter(|| black_box(&export).to_json())
    });
}

criterion_group!(benches, bench_decode, bench_decode_text, bench_encode);
criterion_main!(benches);
