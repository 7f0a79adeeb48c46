use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sortid::{
    Encoder, MonoEncoder, RandSource, Result, SystemClock, ThreadRandom, TimeSource,
    decode_time, encode_time_millis,
};

struct FixedMockTime {
    secs: f64,
}

impl TimeSource for FixedMockTime {
    fn current_secs(&self) -> Result<f64> {
        Ok(self.secs)
    }
}

struct FixedMockRand;

impl RandSource for FixedMockRand {
    fn random(&self) -> Result<f64> {
        Ok(0.5)
    }
}

// Number of IDs generated per benchmark iteration.
const TOTAL_IDS: u64 = 4096;

fn bench_encode_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_time");
    group.throughput(Throughput::Elements(1));
    group.bench_function("millis", |b| {
        b.iter(|| black_box(encode_time_millis(black_box(1_700_000_000_000), 10)));
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode_time(black_box("01HF7YAT00GGGGGGGGGGGGGGGG"))));
    });
    group.finish();
}

fn bench_new_identifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("new_identifier");
    group.throughput(Throughput::Elements(TOTAL_IDS));

    let mock = Encoder::new(FixedMockTime { secs: 1_700_000_000.0 }, FixedMockRand);
    group.bench_function(format!("mock/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(mock.new_identifier(None).ok());
            }
        });
    });

    let system = Encoder::new(SystemClock, ThreadRandom);
    group.bench_function(format!("system/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(system.new_identifier(None).ok());
            }
        });
    });

    let mono = MonoEncoder::new(SystemClock, ThreadRandom);
    group.bench_function(format!("mono/elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(mono.new_identifier(None).ok());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_encode_time, bench_new_identifier);
criterion_main!(benches);
