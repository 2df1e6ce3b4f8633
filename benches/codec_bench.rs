use buildver::prelude::*;
use buildver::{decode, encode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn format_inputs() -> Vec<&'static str> {
    vec!["*.*.+.*", "+.+.+.+", "10.*.+.*", "1.2.3.4"]
}

fn parse_formats(inputs: &[&str]) {
    for input in inputs {
        let res: Result<Format, _> = input.parse();
        assert!(res.is_ok());
    }
}

fn encode_all_schemes(today: &Date) {
    for scheme in IncrementType::all() {
        black_box(encode(*scheme, 2013, 41, today));
    }
}

fn decode_inputs() -> Vec<(IncrementType, u32)> {
    vec![
        (IncrementType::Simple, 42),
        (IncrementType::ByMonths, 5922),
        (IncrementType::ByYears, 41122),
        (IncrementType::ByDate, 20171122),
    ]
}

fn decode_all_schemes(inputs: &[(IncrementType, u32)], today: &Date) {
    for (scheme, build) in inputs {
        let res = decode(*scheme, 2013, *build, today);
        assert!(res.is_ok());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let today = Date::explicit(2017, 11, 22).unwrap();

    c.bench_function("parse_formats", |b| {
        b.iter(|| parse_formats(black_box(&format_inputs())))
    });
    c.bench_function("encode_all_schemes", |b| {
        b.iter(|| encode_all_schemes(black_box(&today)))
    });
    c.bench_function("decode_all_schemes", |b| {
        b.iter(|| decode_all_schemes(black_box(&decode_inputs()), black_box(&today)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
