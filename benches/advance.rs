#[macro_use]
extern crate criterion;

extern crate outbreak;
extern crate rand;

use criterion::Criterion;
use rand::{SeedableRng, XorShiftRng};

use outbreak::config::{init_config, Config};
use outbreak::game::GameState;
use outbreak::mechanic;

fn bench(c: &mut Criterion) {
    init_config(Config {
        berserk_chance: 0.1,
        creature_radius: 10.0,
        game_height: 600,
        game_width: 800,
        hospital_height: 80.0,
        infection_chance: 0.02,
        mean_chance: 0.1,
        population_count: 64,
        river_height: 80.0,
    });
    c.bench_function("mechanic::advance", |b| {
        let mut rng = XorShiftRng::from_seed([11, 13, 17, 19]);
        let state = GameState::new(&mut rng);
        b.iter(|| mechanic::advance(state.creatures.clone(), &mut rng).len())
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
