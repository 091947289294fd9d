#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Scan and normalization benchmarks over referrer-style log URLs
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use logurl::Normalizer;
use std::hint::black_box;

const LOG_URLS: &[&str] = &[
    "http://www.example.com/",
    "HTTP://www.Example.com/a/b/../c/./d.html",
    "https://foobar.com/agg/bins/detail_page.asp?cmp_id=1860&cid=2441&member_list=yes",
    "NewYork.kijiji.com:80/lowUP",
    "http://www.newyorker.com/humor/issuecartoons/2010/07/12/cartoons_20100705#slide=1",
    "q.com/ab/cd//ef/gh///////////ij/k.html",
    "http://www.example.com/a%c2%b1b?q%c2=z%c2rr#a%c2b",
    "http: //global-labour-issues.suite101.com/article.cfm/panacea_or_worker_exploitation",
    "blockedReferrer",
    "-",
    "http://123.45.12.6/index.html",
    "file:///C:/jsox/10%20Essential%20Business%20Leadership%20Skills.htm",
];

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let bytes: usize = LOG_URLS.iter().map(|url| url.len()).sum();
    group.throughput(Throughput::Bytes(bytes as u64));

    let mut normalizer = Normalizer::new();
    group.bench_function("log_urls", |b| {
        b.iter(|| {
            for url in LOG_URLS {
                black_box(normalizer.scan(black_box(url)).is_ok());
            }
        });
    });

    group.finish();
}

fn bench_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("forms");
    let input = "htTP://www.Z.com:81/abc/../deg/ghi/blah.html?a=1&&b=2#qqq";

    let mut normalizer = Normalizer::new();
    normalizer.scan(input).unwrap();

    group.bench_function("grouping", |b| {
        b.iter(|| black_box(normalizer.grouping_form()));
    });
    group.bench_function("reversed_grouping", |b| {
        b.iter(|| black_box(normalizer.reversed_grouping_form()));
    });
    group.bench_function("path_grouping", |b| {
        b.iter(|| black_box(normalizer.path_grouping_form()));
    });
    group.bench_function("raw", |b| {
        b.iter(|| black_box(normalizer.raw_form()));
    });
    group.bench_function("accessors", |b| {
        b.iter(|| {
            black_box(normalizer.scheme().len());
            black_box(normalizer.hostname().len());
            black_box(normalizer.port().len());
            black_box(normalizer.path().len());
            black_box(normalizer.query().len());
            black_box(normalizer.anchor().len());
        });
    });

    group.finish();
}

fn bench_scan_and_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_and_group");
    group.throughput(Throughput::Elements(LOG_URLS.len() as u64));

    let mut normalizer = Normalizer::new();
    group.bench_function("log_urls", |b| {
        b.iter(|| {
            for url in LOG_URLS {
                if normalizer.scan(black_box(url)).is_ok() && !normalizer.should_discard() {
                    black_box(normalizer.grouping_form());
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan, bench_forms, bench_scan_and_group);

criterion_main!(benches);
