use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_payload::tools::decode_batch;
use rust_qr_payload::{BitReader, DecoderConfig, SegmentDecoder, decode_bits};

fn bits_of(value: u32, count: usize, out: &mut String) {
    for i in (0..count).rev() {
        out.push(if (value >> i) & 1 == 1 { '1' } else { '0' });
    }
}

fn alphanumeric_payload(pairs: usize) -> String {
    let mut bits = String::new();
    bits_of(0b0010, 4, &mut bits);
    bits_of((pairs * 2) as u32, 9, &mut bits);
    for i in 0..pairs {
        bits_of((i % 2025) as u32, 11, &mut bits);
    }
    bits_of(0, 4, &mut bits);
    bits
}

fn byte_payload(len: usize) -> String {
    let mut bits = String::new();
    bits_of(0b0100, 4, &mut bits);
    bits_of(len as u32, 8, &mut bits);
    for i in 0..len {
        bits_of(b'a' as u32 + (i % 26) as u32, 8, &mut bits);
    }
    bits_of(0, 4, &mut bits);
    bits
}

fn kanji_payload(len: usize) -> String {
    let mut bits = String::new();
    bits_of(0b1000, 4, &mut bits);
    bits_of(len as u32, 8, &mut bits);
    for _ in 0..len {
        bits_of(0x0D9F, 13, &mut bits);
    }
    bits_of(0, 4, &mut bits);
    bits
}

fn bench_alphanumeric(c: &mut Criterion) {
    let bits = alphanumeric_payload(200);
    c.bench_function("decode_alphanumeric_400", |b| {
        b.iter(|| decode_bits(black_box(&bits)))
    });
}

fn bench_byte(c: &mut Criterion) {
    let bits = byte_payload(255);
    c.bench_function("decode_byte_255", |b| b.iter(|| decode_bits(black_box(&bits))));
}

fn bench_kanji(c: &mut Criterion) {
    let bits = kanji_payload(255);
    c.bench_function("decode_kanji_255", |b| b.iter(|| decode_bits(black_box(&bits))));
}

fn bench_preparsed(c: &mut Criterion) {
    let reader = BitReader::parse(&byte_payload(255)).unwrap();
    c.bench_function("segment_decoder_byte_255", |b| {
        b.iter(|| SegmentDecoder::new(black_box(reader.clone()), DecoderConfig::default()).decode())
    });
}

fn bench_batch(c: &mut Criterion) {
    let streams: Vec<String> = (0..256)
        .map(|i| match i % 3 {
            0 => alphanumeric_payload(100),
            1 => byte_payload(128),
            _ => kanji_payload(64),
        })
        .collect();
    c.bench_function("decode_batch_256", |b| {
        b.iter(|| decode_batch(black_box(&streams), &DecoderConfig::default()))
    });
}

criterion_group!(
    benches,
    bench_alphanumeric,
    bench_byte,
    bench_kanji,
    bench_preparsed,
    bench_batch
);
criterion_main!(benches);
