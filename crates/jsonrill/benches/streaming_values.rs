#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use jsonrill::chunk_utils::{produce_chunks, produce_prefixes};
use jsonrill::ValueStream;

/// Synthesize a document large enough to dominate per-chunk overhead.
fn build_payload(records: usize) -> String {
    let mut out = String::from("{\"records\":[");
    for i in 0..records {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            "{{\"id\":{i},\"name\":\"user-{i}\",\"score\":{}.{},\"tags\":[\"a\",\"b\"],\"active\":{}}}",
            i % 100,
            i % 10,
            i % 2 == 0
        ));
    }
    out.push_str("],\"count\":");
    out.push_str(&records.to_string());
    out.push('}');
    out
}

fn bench_streaming_values(c: &mut Criterion) {
    let payload = build_payload(200);
    let mut group = c.benchmark_group("streaming_values");
    group.throughput(criterion::Throughput::Bytes(payload.len() as u64));

    group.bench_function("incremental", |b| {
        let chunks = produce_chunks(&payload, 64);
        b.iter(|| {
            let mut stream = ValueStream::new();
            let mut yields = 0usize;
            for chunk in &chunks {
                stream.feed(chunk);
                for snapshot in stream.by_ref() {
                    black_box(&snapshot.unwrap().value);
                    yields += 1;
                }
            }
            let value = stream.finish().into_value().unwrap();
            black_box((value, yields))
        });
    });

    // The naive alternative: re-parse the whole accumulated prefix with a
    // batch parser after every chunk.
    group.bench_function("reparse_prefixes", |b| {
        let prefixes = produce_prefixes(&payload, 64);
        b.iter(|| {
            let mut last = None;
            for prefix in &prefixes {
                last = serde_json::from_str::<serde_json::Value>(prefix).ok();
            }
            black_box(last)
        });
    });

    group.bench_function("batch_once", |b| {
        b.iter(|| {
            let mut stream = ValueStream::new();
            stream.feed(&payload);
            black_box(stream.finish().into_value().unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_streaming_values);
criterion_main!(benches);
