use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use contact_book::prelude::{Contact, ContactBook, ContactStore, MemStore, TxtStore};

// Helper to create a ContactBook prepopulated with `n` contacts in-memory.
// The CPU benchmarks below avoid disk I/O; save/load have their own.
fn make_book_with_n(n: usize) -> ContactBook {
    let mut book = ContactBook::with_storage(Box::new(MemStore::new())).expect("book not created");
    book.mem = (0..n)
        .map(|i| Contact::new(format!("User{i}"), format!("080{i:08}")))
        .collect();
    book
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("Adding to 5k contacts (in-memory single add)", |b| {
        b.iter_batched(
            || make_book_with_n(5_000),
            |mut book| {
                book.add_contact(Contact::new("Zoe".to_string(), "08885499529".to_string()));
                black_box(&book.mem);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("Searching 5k contacts (substring match)", |b| {
        let book = make_book_with_n(5_000);
        b.iter(|| {
            let result = book.search("user12");
            black_box(result);
        });
    });
}

fn bench_delete(c: &mut Criterion) {
    c.bench_function("Deleting from 5k contacts (all matches)", |b| {
        b.iter_batched(
            || make_book_with_n(5_000),
            |mut book| {
                let removed = book.remove_matching("User200");
                black_box(removed);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_save_txt(c: &mut Criterion) {
    c.bench_function("save_5k_txt_contacts", |b| {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("contacts.txt");
        let store = TxtStore::new(path.to_str().expect("utf-8 path"));
        let book = make_book_with_n(5_000);

        b.iter(|| {
            store.save(&book.mem).expect("save failed");
        });
    });
}

fn bench_load_txt(c: &mut Criterion) {
    c.bench_function("read_5k_txt_contacts", |b| {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("contacts.txt");
        let store = TxtStore::new(path.to_str().expect("utf-8 path"));
        store
            .save(&make_book_with_n(5_000).mem)
            .expect("setup save failed");

        b.iter(|| {
            let contacts = store.load().expect("load failed");
            black_box(contacts);
        });
    });
}

fn configure() -> Criterion {
    Criterion::default()
}

criterion_group! {
    name = benches;
    config = configure();
    targets = bench_add, bench_search, bench_delete, bench_save_txt, bench_load_txt
}
criterion_main!(benches);
