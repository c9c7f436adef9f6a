use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use shelf_items::{ContentRegistry, FeatureSet};
use shelf_tabs::{BuildContext, TabCatalog};

fn load_registry() -> ContentRegistry {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    ContentRegistry::load_from_path(root.join("../../assets/catalog/content.toml")).unwrap()
}

fn bench_full_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_rebuild");
    let registry = Arc::new(load_registry());
    let features: FeatureSet = registry.default_features.clone();
    let ctx = BuildContext::new(features, true, registry);
    let catalog = TabCatalog::standard().unwrap();
    group.bench_function("standard_tabs_full", |b| {
        b.iter(|| {
            catalog.invalidate();
            black_box(catalog.try_rebuild(&ctx));
        })
    });
    group.bench_function("standard_tabs_cache_hit", |b| {
        catalog.try_rebuild(&ctx);
        b.iter(|| black_box(catalog.try_rebuild(&ctx)))
    });
    group.finish();
}

criterion_group!(benches, bench_full_rebuild);
criterion_main!(benches);
