use criterion::{Criterion, criterion_group, criterion_main};
use jsoncomplete::{Options, StreamCompleter, complete_to_string};

fn bench_complete(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete");
    let cases = vec![
        r#"{"a":1,"b":"#,
        r#"[{"a":1},{"b":[2,3"#,
        r#"{"key": "val"#,
        r#"{"text": "The quick brown fox \"jumps\" over"#,
        r#"[1,2,"#,
        r#"{"deep":[{"a":[{"b":[{"c":"#,
    ];
    let opts = Options::default();
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = complete_to_string(std::hint::black_box(s), &opts).unwrap();
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_growing_prefix(c: &mut Criterion) {
    // A long array pushed in small chunks; each push re-scans from the
    // start, so this measures the documented quadratic streaming cost.
    let mut doc = String::from("[");
    for i in 0..512usize {
        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!("{{\"i\":{}}}", i));
    }
    doc.push(']');
    let opts = Options::default();
    c.bench_function("growing_prefix_512", |b| {
        b.iter(|| {
            let mut s = StreamCompleter::new(opts.clone());
            let mut last = String::new();
            let bytes = doc.as_bytes();
            let mut at = 0;
            while at < bytes.len() {
                let end = (at + 64).min(bytes.len());
                let chunk = std::str::from_utf8(&bytes[at..end]).unwrap();
                last = s.push(chunk).unwrap();
                at = end;
            }
            std::hint::black_box(last);
        })
    });
}

criterion_group!(benches, bench_complete, bench_growing_prefix);
criterion_main!(benches);
