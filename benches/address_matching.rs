use criterion::{black_box, criterion_group, criterion_main, Criterion};
use email_syntax::{is_valid_email, is_valid_email_syntax, Address};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("match simple address", |b| {
        b.iter(|| assert!(is_valid_email_syntax(black_box("test@mail.local"))))
    });
    c.bench_function("match quoted address", |b| {
        b.iter(|| {
            assert!(is_valid_email_syntax(black_box(
                "\"first \\\"nick\\\" last\".x@[192.168.0.1].mail.local"
            )))
        })
    });
    c.bench_function("reject long escape run", |b| {
        let candidate = format!("\"{}@mail.local", "\\\"".repeat(1_000));
        b.iter(|| assert!(!is_valid_email(black_box(&candidate))))
    });
    c.bench_function("parse address", |b| {
        b.iter(|| assert!(black_box("test@mail.local").parse::<Address>().is_ok()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
