use criterion::{criterion_group, criterion_main, Criterion};
use digest::Update;
use digest::{core_api::CoreWrapper, FixedOutput};
use rand::Rng;
use sha1cd::{Config, Sha1CD, Sha1CDCore};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rnd = rand::thread_rng();
    let mut buf = [0; 600];
    for i in buf.iter_mut() {
        *i = rnd.gen();
    }

    c.bench_function("hash 600 bytes", |b| {
        b.iter(|| {
            let mut cw = CoreWrapper::<Sha1CDCore>::default();
            cw.update(&buf);
            cw.finalize_fixed();
        })
    });

    c.bench_function("hash 600 bytes without ubc", |b| {
        b.iter(|| {
            let mut h = Sha1CD::with_config(Config::default().use_ubc(false));
            h.write(&buf);
            h.sum(vec![]);
        })
    });

    c.bench_function("hash 600 bytes without detection", |b| {
        b.iter(|| {
            let mut h = Sha1CD::with_config(Config::default().detect_collisions(false));
            h.write(&buf);
            h.sum(vec![]);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
