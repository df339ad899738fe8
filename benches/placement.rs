use criterion::{black_box, criterion_group, criterion_main, Criterion};

use timeline_challenge::{Catalog, GameRng, Phase, SessionConfig, SessionController};

fn bench_start_session(c: &mut Criterion) {
    let mut controller =
        SessionController::new(Catalog::builtin(), SessionConfig::new(), GameRng::new(42)).unwrap();

    c.bench_function("start_session", |b| {
        b.iter(|| {
            controller.start_session();
            black_box(controller.session().remaining())
        })
    });
}

fn bench_perfect_playthrough(c: &mut Criterion) {
    let mut controller =
        SessionController::new(Catalog::builtin(), SessionConfig::new(), GameRng::new(42)).unwrap();

    c.bench_function("perfect_playthrough", |b| {
        b.iter(|| {
            controller.start_session();
            while controller.session().phase() == Phase::Playing {
                let position = controller.accepted_positions()[0];
                let ticket = controller.attempt_placement(position).unwrap();
                controller.resolve_feedback(&ticket);
            }
            black_box(controller.session().score())
        })
    });
}

criterion_group!(benches, bench_start_session, bench_perfect_playthrough);
criterion_main!(benches);
