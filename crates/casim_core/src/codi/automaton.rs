//! The CoDi automaton: growth until the structure settles, a one-time
//! signaling setup, then signaling forever.
//!
//! Every step builds a whole new lattice from the previous one and then runs
//! the kicking pass over it, so the next step always reads a consistent set
//! of neighbor inputs. Observers see a single X slice of the lattice.

use casim_data::{Coord3D, Dim2, Dim3, Direction, Grid, Grid2D, Grid3D, GridError, Shape};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::automaton::{Automaton, Cell};
use crate::codi::cell::{CellKind, CellSeed, CoDiCell, CoDiCellState};
use crate::codi::growth::{ChromosomeGrowth, GrowthRule};
use crate::codi::kicking::kick;
use crate::codi::signaling::SignalingRule;
use crate::config::CoDiConfig;
use crate::error::{Result, SimError};
use crate::lattice;
use crate::neighbors::von_neumann_3d;
use crate::rule::UpdateRule;

/// Neuron counters are drawn from `0..ACTIVATION_DRAW_LIMIT` at setup.
pub const ACTIVATION_DRAW_LIMIT: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Growth,
    SignalSetup,
    Signal,
}

/// A lattice site as seen through the display projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayCell {
    state: CoDiCellState,
    gate: Option<Direction>,
    activation: u32,
}

impl DisplayCell {
    pub fn gate(&self) -> Option<Direction> {
        self.gate
    }

    pub fn activation(&self) -> u32 {
        self.activation
    }
}

impl Default for DisplayCell {
    fn default() -> Self {
        Self {
            state: CoDiCellState::Blank,
            gate: None,
            activation: 0,
        }
    }
}

impl From<&CoDiCell> for DisplayCell {
    fn from(cell: &CoDiCell) -> Self {
        Self {
            state: cell.visible_state(),
            gate: cell.gate(),
            activation: cell.activation(),
        }
    }
}

impl Cell for DisplayCell {
    type State = CoDiCellState;

    fn state(&self) -> CoDiCellState {
        self.state
    }
}

pub struct CoDi<G = ChromosomeGrowth> {
    lattice: Grid3D<CoDiCell>,
    growth: UpdateRule<Dim3, CoDiCell, G>,
    signaling: UpdateRule<Dim3, CoDiCell, SignalingRule>,
    /// Whether the last growth pass changed any cell kind. Starts set so the
    /// first step always grows.
    changed: bool,
    signaling_ready: bool,
    iteration: u64,
    layer: usize,
    rng: ChaCha8Rng,
}

impl CoDi {
    /// Builds an automaton with the default growth rule.
    pub fn new(seeds: &Grid3D<CellSeed>, rng: ChaCha8Rng) -> Result<Self> {
        Self::with_growth(seeds, ChromosomeGrowth, rng)
    }

    pub fn seeded(seeds: &Grid3D<CellSeed>, seed: u64) -> Result<Self> {
        Self::new(seeds, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generates a random lattice from `config` and builds an automaton over
    /// it. The same generator later drives the signaling setup, so a fixed
    /// seed reproduces the whole run.
    pub fn from_config(config: &CoDiConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SimError::config(format!("{e:#}")))?;
        let mut rng = match config.lattice.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let seeds = lattice::generate(config, &mut rng);
        let mut codi = Self::new(&seeds, rng)?;
        codi.set_layer(config.display.layer)?;
        Ok(codi)
    }
}

impl<G: GrowthRule> CoDi<G> {
    /// Validates every seed and builds the initial lattice. The first
    /// malformed seed in enumeration order is reported.
    pub fn with_growth(seeds: &Grid3D<CellSeed>, growth: G, rng: ChaCha8Rng) -> Result<Self> {
        let shape = seeds.shape();
        if shape.is_empty() {
            return Err(SimError::EmptyLattice);
        }

        let mut cells = Vec::with_capacity(seeds.len());
        for (coord, seed) in seeds.iter() {
            let cell =
                CoDiCell::from_seed(seed).map_err(|defect| SimError::invalid_cell(coord, defect))?;
            cells.push(cell);
        }
        let lattice = Grid::new(shape, cells)?;

        info!(
            width = shape.width(),
            height = shape.height(),
            depth = shape.depth(),
            neurons = lattice
                .values()
                .filter(|c| matches!(c.kind(), CellKind::Neuron { .. }))
                .count(),
            "CoDi lattice initialized"
        );

        Ok(Self {
            lattice,
            growth: UpdateRule::new(von_neumann_3d, growth),
            signaling: UpdateRule::new(von_neumann_3d, SignalingRule),
            changed: true,
            signaling_ready: false,
            iteration: 0,
            layer: 0,
            rng,
        })
    }

    /// The phase the next step will run.
    pub fn phase(&self) -> Phase {
        if self.changed {
            Phase::Growth
        } else if !self.signaling_ready {
            Phase::SignalSetup
        } else {
            Phase::Signal
        }
    }

    pub fn lattice(&self) -> &Grid3D<CoDiCell> {
        &self.lattice
    }

    pub fn cell(&self, coord: Coord3D) -> Result<&CoDiCell> {
        Ok(self.lattice.get(coord)?)
    }

    fn advance(&mut self) {
        match self.phase() {
            Phase::Growth => self.growth_step(),
            Phase::SignalSetup => {
                self.signaling_setup();
                self.signal_step();
            }
            Phase::Signal => self.signal_step(),
        }
    }

    fn growth_step(&mut self) {
        let mut next = self.growth.apply(&self.lattice);
        let changed = next
            .values()
            .zip(self.lattice.values())
            .any(|(after, before)| after.kind() != before.kind());
        kick(&mut next);
        self.lattice = next;
        self.changed = changed;

        if !changed {
            info!(iteration = self.iteration, "Growth converged");
        }
    }

    fn signaling_setup(&mut self) {
        if self.signaling_ready {
            return;
        }
        self.signaling_ready = true;

        let rng = &mut self.rng;
        for cell in self.lattice.values_mut() {
            let activation = match cell.kind() {
                CellKind::Neuron { .. } => rng.gen_range(0..ACTIVATION_DRAW_LIMIT),
                _ => 0,
            };
            cell.set_activation(activation);
        }
        info!(iteration = self.iteration, "Signaling phase started");
    }

    fn signal_step(&mut self) {
        let mut next = self.signaling.apply(&self.lattice);
        kick(&mut next);
        self.lattice = next;
    }

    /// Projection of the X slice at `layer`.
    pub fn layer_grid(&self, layer: usize) -> Result<Grid2D<DisplayCell>> {
        Ok(self.lattice.slice_x(layer, |cell| DisplayCell::from(cell))?)
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Number of selectable slices.
    pub fn layer_count(&self) -> usize {
        self.lattice.width()
    }

    pub fn set_layer(&mut self, layer: usize) -> Result<()> {
        if layer >= self.layer_count() {
            return Err(GridError::slice_out_of_range(layer, self.layer_count()).into());
        }
        self.layer = layer;
        Ok(())
    }

    pub fn shift_layer_left(&mut self) -> Grid2D<DisplayCell> {
        self.layer = self.layer.saturating_sub(1);
        self.grid()
    }

    pub fn shift_layer_right(&mut self) -> Grid2D<DisplayCell> {
        if self.layer + 1 < self.layer_count() {
            self.layer += 1;
        }
        self.grid()
    }
}

impl<G: GrowthRule> Automaton for CoDi<G> {
    type Cell = DisplayCell;

    /// Signaling never ends.
    fn has_next(&self) -> bool {
        true
    }

    fn step(&mut self) -> Grid2D<DisplayCell> {
        let phase = self.phase();
        self.advance();
        self.iteration += 1;
        debug!(
            iteration = self.iteration,
            ?phase,
            changed = self.changed,
            "CoDi step"
        );
        self.grid()
    }

    fn grid(&self) -> Grid2D<DisplayCell> {
        let shape = self.lattice.shape();
        self.layer_grid(self.layer).unwrap_or_else(|_| {
            Grid::filled(Dim2::new(shape.height(), shape.depth()), DisplayCell::default())
        })
    }

    fn iteration(&self) -> u64 {
        self.iteration
    }
}
