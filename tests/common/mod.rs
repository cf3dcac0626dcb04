use casim_lib::model::codi::{CellSeed, Chromosome, CoDi};
use casim_lib::model::{Coord3D, Direction, Grid, Grid3D};
use casim_lib::model::grid::Dim3;

#[allow(dead_code)]
pub struct LatticeBuilder {
    width: usize,
    height: usize,
    depth: usize,
    chromosome: Chromosome,
    seeds: Vec<(Coord3D, CellSeed)>,
    seed: u64,
}

#[allow(dead_code)]
impl LatticeBuilder {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            chromosome: Chromosome::default(),
            seeds: Vec::new(),
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Chromosome given to every blank site.
    pub fn with_chromosome(mut self, chromosome: Chromosome) -> Self {
        self.chromosome = chromosome;
        self
    }

    pub fn with_cell(mut self, x: i32, y: i32, z: i32, seed: CellSeed) -> Self {
        self.seeds.push((Coord3D::new(x, y, z), seed));
        self
    }

    pub fn with_neuron(self, x: i32, y: i32, z: i32, gate: Direction) -> Self {
        self.with_cell(x, y, z, CellSeed::neuron(gate))
    }

    pub fn seeds(&self) -> Grid3D<CellSeed> {
        let blank = CellSeed::blank().with_chromosome(self.chromosome);
        let mut grid = Grid::filled(Dim3::new(self.width, self.height, self.depth), blank);
        for (coord, seed) in &self.seeds {
            grid.set(*coord, seed.clone())
                .expect("Seed coordinate outside test lattice");
        }
        grid
    }

    pub fn build(self) -> CoDi {
        CoDi::seeded(&self.seeds(), self.seed).expect("Failed to create CoDi in test builder")
    }
}

/// Steps until growth has converged and signaling has started.
#[allow(dead_code)]
pub fn run_until_signaling(codi: &mut CoDi, limit: usize) -> usize {
    use casim_lib::model::codi::Phase;
    use casim_lib::model::Automaton;

    for steps in 0..limit {
        if codi.phase() == Phase::Signal {
            return steps;
        }
        codi.step();
    }
    panic!("CoDi did not reach signaling within {limit} steps");
}
