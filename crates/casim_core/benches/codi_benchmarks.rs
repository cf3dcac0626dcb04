use casim_core::automaton::Automaton;
use casim_core::codi::{kick, CoDi, Phase};
use casim_core::config::CoDiConfig;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn signaling_codi(side: usize) -> CoDi {
    let mut config = CoDiConfig::default();
    config.lattice.width = side;
    config.lattice.height = side;
    config.lattice.depth = side;
    config.lattice.seed = Some(7);
    let mut codi = CoDi::from_config(&config).expect("valid config");
    for _ in 0..(side * 4) {
        if codi.phase() == Phase::Signal {
            break;
        }
        codi.step();
    }
    codi
}

fn bench_signal_step(c: &mut Criterion) {
    let mut codi = signaling_codi(32);

    c.bench_function("codi_signal_step_32", |b| {
        b.iter(|| black_box(codi.step()))
    });
}

fn bench_growth_step(c: &mut Criterion) {
    let mut config = CoDiConfig::default();
    config.lattice.seed = Some(7);

    c.bench_function("codi_first_growth_step_16", |b| {
        b.iter_batched(
            || CoDi::from_config(&config).expect("valid config"),
            |mut codi| black_box(codi.step()),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_kick(c: &mut Criterion) {
    let codi = signaling_codi(32);
    let mut lattice = codi.lattice().clone();

    c.bench_function("codi_kick_32", |b| {
        b.iter(|| {
            kick(&mut lattice);
            black_box(lattice.len())
        })
    });
}

criterion_group!(benches, bench_signal_step, bench_growth_step, bench_kick);
criterion_main!(benches);
