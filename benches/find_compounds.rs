use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use typed_arena::Arena;

use compound_words::wordlist::dictionary::Dictionary;
use compound_words::wordlist::trie::trie::Trie;

// Base words plus concatenations of them, so a realistic share of the
// dictionary actually decomposes.
fn synthetic_dictionary(bases: usize, compounds: usize) -> Dictionary {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut dict = Dictionary::new();
    let mut base_words = Vec::with_capacity(bases);
    for _ in 0..bases {
        let len = rng.gen_range(3..=8);
        let word: String = (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
        base_words.push(word.clone());
        dict.push(word);
    }
    for _ in 0..compounds {
        let a = base_words.choose(&mut rng).unwrap();
        let b = base_words.choose(&mut rng).unwrap();
        dict.push(format!("{}{}", a, b));
    }
    dict
}

fn criterion_benchmark(c: &mut Criterion) {
    let dict = synthetic_dictionary(5_000, 2_000);
    let trie = Trie::new();
    trie.add_all(dict.words()).unwrap();
    let arena = Arena::new();
    let index = trie.build(&arena);

    let mut group = c.benchmark_group("scan");
    group.sample_size(10);
    group.bench_function("sequential", |b| b.iter(|| index.find_compound_words(&dict)));
    group.bench_function("parallel", |b| b.iter(|| index.find_compound_words_par(&dict)));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
