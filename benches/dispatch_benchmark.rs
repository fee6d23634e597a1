use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mrh::core::{dispatch, resolve, CommandSpec, DispatchOptions};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn setup_repos(count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..count {
        fs::create_dir_all(temp_dir.path().join(format!("repo-{}", i)).join(".git")).unwrap();
    }
    temp_dir
}

fn bench_dispatch(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let temp_dir = setup_repos(20);
    let targets = resolve(temp_dir.path(), &["*"], true).unwrap();
    let command = Arc::new(CommandSpec::from("true"));

    let mut group = c.benchmark_group("dispatch_20_targets");
    group.sample_size(10);

    for pool_size in [1, 4, 10] {
        let options = DispatchOptions {
            pool_size,
            ..DispatchOptions::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(pool_size),
            &options,
            |b, options| {
                b.to_async(&runtime)
                    .iter(|| dispatch(Arc::clone(&command), &targets, options))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
