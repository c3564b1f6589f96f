use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kana_core::romaji::{transliterate, KanaTable, Transliterator};

const SENTENCE: &str = "きょうはがっこうでともだちとしんぶんをよみました・らーめんやさんへいっしょにいきましょう";

fn bench_transliterate(c: &mut Criterion) {
    // Force singleton init outside the measured loop
    KanaTable::global();

    c.bench_function("transliterate_sentence", |b| {
        b.iter(|| transliterate(black_box(SENTENCE)))
    });

    let long = SENTENCE.repeat(100);
    c.bench_function("transliterate_long", |b| {
        b.iter(|| transliterate(black_box(&long)))
    });

    let mixed = "カタカナと漢字まじりのぶんしょう 123 ABC ".repeat(50);
    c.bench_function("transliterate_passthrough_heavy", |b| {
        b.iter(|| transliterate(black_box(&mixed)))
    });

    let table = KanaTable::default_table();
    let t = Transliterator::new(&table);
    c.bench_function("transliterate_owned_table", |b| {
        b.iter(|| t.transliterate(black_box(SENTENCE)))
    });
}

criterion_group!(benches, bench_transliterate);
criterion_main!(benches);
