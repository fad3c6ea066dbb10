use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cnbase58::codec;

fn make_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 7 + 13) % 256) as u8).collect()
}

// 69-byte payload of a standard address.
const ADDRESS_HEX: &str = "9df6ee01c179d13e2a0c52edd8b821e2d53d707e47ddcaaf696644a45563564c2934bd50a8faca00a94c5a4dcc3cf070898c2db6ff5990556d08f5a09c8787900dcecab3b77173c1";
const ADDRESS_BASE58: &str = "TRTLv2RUL7X82vLeXnFmF7cfhKJ6UeiJzJdWQf556DEb7tkVqDAs7FVVKQVqkZqY47Q1PFwne2jZNKEn1gEeTWrb3JxG7HaMU4Q";

fn bench_encode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58_encode_sizes");

    for &n in &[32usize, 64, 256, 1024, 4096] {
        let data = make_bytes(n);
        group.throughput(Throughput::Bytes(n as u64));

        group.bench_with_input(BenchmarkId::new("block", n), &data, |b, d| {
            b.iter(|| black_box(codec::encode_bytes(black_box(d))))
        });

        group.bench_with_input(BenchmarkId::new("bs58", n), &data, |b, d| {
            b.iter(|| black_box(bs58::encode(black_box(d)).into_string()))
        });
    }

    group.finish();
}

fn bench_decode_into_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58_decode_into_sizes");

    for &n in &[32usize, 64, 256, 1024, 4096] {
        let data = make_bytes(n);
        let encoded = codec::encode_bytes(&data);
        let bs58_encoded = bs58::encode(&data).into_string();

        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("block_decode_into_reuse", n), &encoded, |b, s| {
            let mut out = vec![0u8; n];
            b.iter(|| black_box(codec::decode_into(black_box(s), &mut out).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("bs58_onto_reuse", n), &bs58_encoded, |b, s| {
            let mut out = vec![0u8; n + 64];
            b.iter(|| black_box(bs58::decode(black_box(s)).onto(&mut out[..]).unwrap()))
        });
    }

    group.finish();
}

fn bench_hex_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58_hex_address");

    group.bench_function("encode", |b| {
        b.iter(|| black_box(codec::encode(black_box(ADDRESS_HEX)).unwrap()))
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(codec::decode(black_box(ADDRESS_BASE58)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_encode_sizes, bench_decode_into_sizes, bench_hex_address);
criterion_main!(benches);
