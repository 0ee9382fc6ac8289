use cookienet::useragent::{is_same_site_none_incompatible, should_send_same_site_none};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CHROME_85: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/85.0.4183.0 Safari/537.36";
const IOS_12: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_0 like Mac OS X) AppleWebKit/605.1.15 \
                      (KHTML, like Gecko) Version/12.0 Mobile/15E148 Safari/604.1";

fn benchmark_classify_compatible(c: &mut Criterion) {
    c.bench_function("useragent_should_send_chrome85", |b| {
        b.iter(|| should_send_same_site_none(black_box(CHROME_85)))
    });
}

fn benchmark_classify_incompatible(c: &mut Criterion) {
    c.bench_function("useragent_incompatible_ios12", |b| {
        b.iter(|| is_same_site_none_incompatible(black_box(IOS_12)))
    });
}

criterion_group!(benches, benchmark_classify_compatible, benchmark_classify_incompatible);
criterion_main!(benches);
