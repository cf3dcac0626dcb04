//! Random seeding of an initial CoDi lattice.
//!
//! Every site receives a random chromosome; a fraction of sites start as
//! neurons with a random gate. Everything else starts blank and is filled in
//! by growth. Generation is a pure function of the config and the generator,
//! so a seeded generator always yields the same lattice.

use casim_data::{Dim3, Direction, DirectionSet, Grid, Grid3D};
use rand::Rng;

use crate::codi::{CellSeed, Chromosome};
use crate::config::{CoDiConfig, LatticeConfig};

pub fn random_chromosome(density: f64, rng: &mut impl Rng) -> Chromosome {
    let p = density.clamp(0.0, 1.0);
    let directions: DirectionSet = Direction::ALL
        .into_iter()
        .filter(|_| rng.gen_bool(p))
        .collect();
    Chromosome::new(directions)
}

pub fn random_direction(rng: &mut impl Rng) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}

pub fn generate(config: &CoDiConfig, rng: &mut impl Rng) -> Grid3D<CellSeed> {
    generate_lattice(&config.lattice, rng)
}

pub fn generate_lattice(config: &LatticeConfig, rng: &mut impl Rng) -> Grid3D<CellSeed> {
    let shape = Dim3::new(config.width, config.height, config.depth);
    let neuron_p = config.neuron_density.clamp(0.0, 1.0);
    let grid = Grid::from_fn(shape, |_| {
        let chromosome = random_chromosome(config.chromosome_density, rng);
        let seed = if rng.gen_bool(neuron_p) {
            CellSeed::neuron(random_direction(rng))
        } else {
            CellSeed::blank()
        };
        seed.with_chromosome(chromosome)
    });
    tracing::debug!(
        width = config.width,
        height = config.height,
        depth = config.depth,
        neurons = grid.values().filter(|s| s.gate.is_some()).count(),
        "Generated lattice"
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codi::CoDiCellState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small() -> LatticeConfig {
        LatticeConfig {
            width: 6,
            height: 5,
            depth: 4,
            seed: Some(3),
            neuron_density: 0.2,
            chromosome_density: 0.5,
        }
    }

    #[test]
    fn test_generation_is_reproducible() {
        let a = generate_lattice(&small(), &mut ChaCha8Rng::seed_from_u64(11));
        let b = generate_lattice(&small(), &mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(a, b);
        assert_eq!(a.len(), 6 * 5 * 4);
    }

    #[test]
    fn test_generate_uses_lattice_section() {
        let config = CoDiConfig {
            lattice: small(),
            ..CoDiConfig::default()
        };
        let grid = generate(&config, &mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(grid.shape(), Dim3::new(6, 5, 4));
    }

    #[test]
    fn test_density_extremes() {
        let mut config = small();
        config.neuron_density = 0.0;
        config.chromosome_density = 1.0;
        let grid = generate_lattice(&config, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(grid.values().all(|s| s.state == CoDiCellState::Blank));
        assert!(grid
            .values()
            .all(|s| s.chromosome.directions() == DirectionSet::ALL));

        config.neuron_density = 1.0;
        let grid = generate_lattice(&config, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(grid
            .values()
            .all(|s| s.state == CoDiCellState::Neuron && s.gate.is_some()));
    }
}
