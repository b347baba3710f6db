use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crc_engine::{catalog, Algorithm, Crc, Width};

const SIZES: &[usize] = &[64, 4096, 65536];

fn test_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 31 + 7) as u8).collect()
}

fn bench_width<W: Width>(c: &mut Criterion, algorithm: &Algorithm<W>) {
    let mut group = c.benchmark_group(algorithm.name);
    let direct = Crc::from_algorithm(algorithm, false);
    let table = Crc::from_algorithm(algorithm, true);

    for &size in SIZES {
        let data = test_data(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("direct", size), &data, |b, data| {
            b.iter(|| direct.calculate(data));
        });
        group.bench_with_input(BenchmarkId::new("table", size), &data, |b, data| {
            b.iter(|| table.calculate(data));
        });
    }
    group.finish();
}

fn bench_crc(c: &mut Criterion) {
    bench_width(c, &catalog::CRC_8);
    bench_width(c, &catalog::CRC_16_CCITT_FALSE);
    bench_width(c, &catalog::CRC_32);
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("build_table/crc32", |b| {
        b.iter(|| crc_engine::build_table(0x04C1_1DB7u32));
    });
}

criterion_group!(benches, bench_crc, bench_table_build);
criterion_main!(benches);
