use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mes_query::{Changes, Filter, Range, compile_filter, compile_key_predicate, compile_update_set};

/// Filter with `n` equality fields and one range field:
/// WHERE col0 = $1 AND ... AND logged_at >= $n+1 AND logged_at <= $n+2
fn build_filter(n: usize) -> Filter {
    let mut filter = Filter::new();
    for i in 0..n {
        filter = filter.eq(format!("col{i}"), i as i64);
    }
    filter.range("logged_at", Range::between(0_i64, 1_000_i64))
}

fn build_changes(n: usize) -> Changes {
    (0..n).map(|i| (format!("col{i}"), i as i64)).collect()
}

fn bench_compile_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/filter");

    for n in [1, 5, 10, 50] {
        let filter = build_filter(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &filter, |b, filter| {
            b.iter(|| black_box(compile_filter(filter, 1)));
        });
    }

    group.finish();
}

fn bench_compile_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/update_set_and_key");

    for n in [1, 5, 10, 50] {
        let changes = build_changes(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &changes, |b, changes| {
            b.iter(|| {
                let set = compile_update_set(changes, 1).expect("non-empty");
                let key =
                    compile_key_predicate([("asset_id", 1), ("product_id", 2)], set.next_index);
                black_box((set, key))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compile_filter, bench_compile_update);
criterion_main!(benches);
