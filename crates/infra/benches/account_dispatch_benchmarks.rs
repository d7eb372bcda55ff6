use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use selfcare_account::{seed, CustomerAccount, PaymentMethod, TopupAmount};
use selfcare_infra::{AccountDispatcher, AccountStore, InMemoryAccountStore};

fn rich_dispatcher() -> AccountDispatcher<InMemoryAccountStore> {
    let mut summary = seed::seed_summary();
    summary.balance = i64::MAX / 2;
    AccountDispatcher::new(InMemoryAccountStore::new(CustomerAccount::new(summary)))
}

fn bench_transaction_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("transaction_latency");
    group.sample_size(1000);

    group.bench_function("top_up", |b| {
        let dispatcher = rich_dispatcher();
        let amount = TopupAmount::new(20_000).unwrap();
        b.iter(|| {
            dispatcher
                .top_up(black_box(amount), PaymentMethod::Nequi)
                .unwrap();
        });
    });

    group.bench_function("buy_package", |b| {
        let dispatcher = rich_dispatcher();
        b.iter(|| {
            dispatcher.buy_package(black_box("combo_full")).unwrap();
        });
    });

    group.bench_function("rejected_unknown_package", |b| {
        let dispatcher = rich_dispatcher();
        b.iter(|| {
            let _ = dispatcher.buy_package(black_box("nonexistent"));
        });
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let store = Arc::new(InMemoryAccountStore::seeded());
    // Full movement list so the snapshot clones the largest record.
    let dispatcher = AccountDispatcher::new(Arc::clone(&store));
    for _ in 0..12 {
        dispatcher
            .top_up(TopupAmount::new(1_000).unwrap(), PaymentMethod::Pse)
            .unwrap();
    }

    c.bench_function("summary_snapshot", |b| {
        b.iter(|| black_box(store.snapshot().unwrap()));
    });
}

criterion_group!(benches, bench_transaction_latency, bench_snapshot);
criterion_main!(benches);
