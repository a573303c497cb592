use std::{hint::black_box, ops::Range};

use augavl::IntervalTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

/// The maximum length of the generated intervals, keeping the number of
/// matches per query small relative to the tree size.
const MAX_INTERVAL_LEN: u16 = 500;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("query");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree, and a flat copy of the same intervals to serve as the
    // linear scan baseline.
    let mut rand = Lfsr::default();
    let mut t = IntervalTree::default();
    let mut flat = Vec::with_capacity(n_values);

    for i in 0..n_values {
        let range = rand.next_short_range(MAX_INTERVAL_LEN);
        t.insert(range.clone(), i);
        flat.push((range, i));
    }

    bench_query_low(n_values, g, &t, &flat);
    bench_query_mid(n_values, g, &t, &flat);
    bench_query_high(n_values, g, &t, &flat);
}

/// Return all values in `flat` containing `point`, checking every entry.
fn linear_scan(flat: &[(Range<u16>, usize)], point: u16) -> Vec<&usize> {
    flat.iter()
        .filter(|(r, _)| r.contains(&point))
        .map(|(_, v)| v)
        .collect()
}

macro_rules! query_bench {
    (
        $name:ident,
        $point:expr
    ) => {
        paste::paste! {
            fn [<bench_query_ $name>]<M>(
                n_values: usize,
                g: &mut BenchmarkGroup<'_, M>,
                t: &IntervalTree<u16, usize>,
                flat: &[(Range<u16>, usize)],
            )
            where
                M: Measurement,
            {
                g.throughput(Throughput::Elements(1)); // Queries per second

                let bench_name = BenchName {
                    n_values,
                    bench: concat!("tree_", stringify!($name)),
                };
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| black_box(t.query(black_box(&$point))))
                });

                let bench_name = BenchName {
                    n_values,
                    bench: concat!("linear_scan_", stringify!($name)),
                };
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| black_box(linear_scan(flat, black_box($point))))
                });
            }
        }
    };
}

query_bench!(low, 42_u16);
query_bench!(mid, 32_768_u16);
query_bench!(high, 65_000_u16);
