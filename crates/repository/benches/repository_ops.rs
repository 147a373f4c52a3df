use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_catalog::ElectronicItem;
use stockroom_core::ItemId;
use stockroom_repository::InventoryRepository;

fn electronic(id: u32) -> ElectronicItem {
    ElectronicItem::new(ItemId::new(id), format!("item-{id}"), 1, "Acme", 12)
}

fn seeded(size: u32) -> InventoryRepository<ElectronicItem> {
    let mut repo = InventoryRepository::new();
    for id in 0..size {
        repo.insert(electronic(id)).expect("ids are distinct");
    }
    repo
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_insert");

    for size in [100u32, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| seeded(black_box(size)));
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_get");

    for size in [100u32, 1_000, 10_000].iter() {
        let repo = seeded(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                for id in 0..size {
                    black_box(repo.get(ItemId::new(id)).expect("id was seeded"));
                }
            });
        });
    }

    group.finish();
}

fn bench_set_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_set_quantity");

    for size in [100u32, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut repo = seeded(size);
            b.iter(|| {
                for id in 0..size {
                    repo.set_quantity(ItemId::new(id), black_box(2))
                        .expect("id was seeded");
                }
            });
        });
    }

    group.finish();
}

fn bench_list_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_list_snapshot");

    for size in [100u32, 1_000, 10_000].iter() {
        let repo = seeded(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(repo.list()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_get,
    bench_set_quantity,
    bench_list_snapshot
);
criterion_main!(benches);
