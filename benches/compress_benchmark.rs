use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sha1cd::compress::{self, IV};
use sha1cd::dvs::TestStep;
use sha1cd::ubc::SHA1_TABLE;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut block = [0u8; 64];
    let mut shake = Shake256::default();
    shake.update(b"compress benchmark");
    shake.finalize_xof().read(&mut block);

    let w = compress::expand(&block);
    let mut states = [[0u32; 5]; 80];
    let mut ihv = IV;
    compress::compress_with_states(&mut ihv, &w, &mut states);

    c.bench_function("compress", |b| {
        b.iter(|| {
            let mut ihv = IV;
            compress::compress(&mut ihv, black_box(&w));
            ihv
        })
    });

    c.bench_function("compress with states", |b| {
        b.iter(|| {
            let mut ihv = IV;
            compress::compress_with_states(&mut ihv, black_box(&w), &mut states);
            ihv
        })
    });

    c.bench_function("ubc check", |b| b.iter(|| SHA1_TABLE.check(black_box(&w))));

    c.bench_function("recompress at step 58", |b| {
        b.iter(|| compress::recompress(TestStep::Step58, black_box(&w), &states))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
