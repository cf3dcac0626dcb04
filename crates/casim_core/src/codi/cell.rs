//! CoDi lattice cells.
//!
//! A cell's kind is a closed enum: BLANK carries no gate, while NEURON, AXON
//! and DENDRITE each carry the single direction they communicate along. The
//! activated variants only exist in [`CoDiCellState`] for display and are
//! never stored in the lattice.
//!
//! Every cell keeps two per-direction signal tables:
//! - `inputs`: what the neighbors sent in, filled by the kicking pass and
//!   only meaningful on the directions the cell is wired to observe
//! - `outputs`: what the cell emitted on its last step

use casim_data::{Direction, DirectionMap, DirectionSet};
use serde::{Deserialize, Serialize};

use crate::automaton::Cell;
use crate::error::SeedDefect;

/// Visible state of a lattice site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoDiCellState {
    Blank,
    Neuron,
    Axon,
    Dendrite,
    ActivatedAxon,
    ActivatedDendrite,
}

impl CoDiCellState {
    /// Whether this state only appears in display projections.
    pub const fn is_display_only(self) -> bool {
        matches!(
            self,
            CoDiCellState::ActivatedAxon | CoDiCellState::ActivatedDendrite
        )
    }
}

/// Stored kind of a lattice site, with its gate where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Blank,
    Neuron { gate: Direction },
    Axon { gate: Direction },
    Dendrite { gate: Direction },
}

impl CellKind {
    pub const fn gate(self) -> Option<Direction> {
        match self {
            CellKind::Blank => None,
            CellKind::Neuron { gate } | CellKind::Axon { gate } | CellKind::Dendrite { gate } => {
                Some(gate)
            }
        }
    }

    pub const fn state(self) -> CoDiCellState {
        match self {
            CellKind::Blank => CoDiCellState::Blank,
            CellKind::Neuron { .. } => CoDiCellState::Neuron,
            CellKind::Axon { .. } => CoDiCellState::Axon,
            CellKind::Dendrite { .. } => CoDiCellState::Dendrite,
        }
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, CellKind::Blank)
    }

    /// Directions a freshly grown cell of this kind observes.
    ///
    /// Axons only listen on their gate; neurons and dendrites integrate
    /// everything around them.
    pub const fn default_wiring(self) -> DirectionSet {
        match self {
            CellKind::Blank => DirectionSet::EMPTY,
            CellKind::Axon { gate } => DirectionSet::single(gate),
            CellKind::Neuron { .. } | CellKind::Dendrite { .. } => DirectionSet::ALL,
        }
    }
}

/// Growth parameters of a site: the directions a grown cell may extend
/// into. Opaque to everything except the growth rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chromosome(DirectionSet);

impl Chromosome {
    pub const fn new(directions: DirectionSet) -> Self {
        Self(directions)
    }

    pub const fn directions(self) -> DirectionSet {
        self.0
    }

    pub const fn allows(self, direction: Direction) -> bool {
        self.0.contains(direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoDiCell {
    kind: CellKind,
    chromosome: Chromosome,
    activation: u32,
    wiring: DirectionSet,
    inputs: DirectionMap<i32>,
    outputs: DirectionMap<i32>,
}

impl CoDiCell {
    pub fn blank(chromosome: Chromosome) -> Self {
        Self::grown(CellKind::Blank, chromosome)
    }

    /// A cell of `kind` with that kind's default wiring and quiet signals.
    pub fn grown(kind: CellKind, chromosome: Chromosome) -> Self {
        Self {
            kind,
            chromosome,
            activation: 0,
            wiring: kind.default_wiring(),
            inputs: DirectionMap::filled(0),
            outputs: DirectionMap::filled(0),
        }
    }

    /// Validates a seed and turns it into a lattice cell.
    pub fn from_seed(seed: &CellSeed) -> Result<Self, SeedDefect> {
        let kind = match (seed.state, seed.gate) {
            (CoDiCellState::Blank, None) => CellKind::Blank,
            (CoDiCellState::Blank, Some(gate)) => return Err(SeedDefect::UnexpectedGate(gate)),
            (state, _) if state.is_display_only() => {
                return Err(SeedDefect::DisplayOnlyState(state))
            }
            (state, None) => return Err(SeedDefect::MissingGate(state)),
            (CoDiCellState::Neuron, Some(gate)) => CellKind::Neuron { gate },
            (CoDiCellState::Axon, Some(gate)) => CellKind::Axon { gate },
            (_, Some(gate)) => CellKind::Dendrite { gate },
        };

        let wiring = seed.wiring.unwrap_or_else(|| kind.default_wiring());
        match kind {
            CellKind::Blank if !wiring.is_empty() => return Err(SeedDefect::WiredBlank),
            CellKind::Neuron { gate } | CellKind::Axon { gate } if !wiring.contains(gate) => {
                return Err(SeedDefect::GateNotWired {
                    state: kind.state(),
                    gate,
                })
            }
            _ => {}
        }

        let mut cell = Self::grown(kind, seed.chromosome);
        cell.wiring = wiring;
        Ok(cell)
    }

    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    #[inline]
    pub fn gate(&self) -> Option<Direction> {
        self.kind.gate()
    }

    /// Derived from the gate; never stored separately.
    pub fn opposite_to_gate(&self) -> Option<Direction> {
        self.gate().map(Direction::opposite)
    }

    pub fn chromosome(&self) -> Chromosome {
        self.chromosome
    }

    #[inline]
    pub fn activation(&self) -> u32 {
        self.activation
    }

    pub fn wiring(&self) -> DirectionSet {
        self.wiring
    }

    #[inline]
    pub fn is_wired(&self, direction: Direction) -> bool {
        self.wiring.contains(direction)
    }

    /// The incoming signal on `direction`, or `None` if the cell does not
    /// observe that direction.
    #[inline]
    pub fn input(&self, direction: Direction) -> Option<i32> {
        self.is_wired(direction).then(|| self.inputs[direction])
    }

    /// Incoming signals on the wired directions only.
    pub fn inputs(&self) -> impl Iterator<Item = (Direction, i32)> + '_ {
        self.wiring.iter().map(|d| (d, self.inputs[d]))
    }

    /// Writes an incoming signal. Unwired directions always read as zero.
    pub fn set_input(&mut self, direction: Direction, value: i32) {
        self.inputs[direction] = if self.is_wired(direction) { value } else { 0 };
    }

    #[inline]
    pub fn output(&self, direction: Direction) -> i32 {
        self.outputs[direction]
    }

    pub fn outputs(&self) -> &DirectionMap<i32> {
        &self.outputs
    }

    pub fn set_activation(&mut self, activation: u32) {
        self.activation = activation;
    }

    /// Same cell after a signaling step: new counter and new emissions.
    #[must_use]
    pub fn emitting(&self, activation: u32, outputs: DirectionMap<i32>) -> Self {
        Self {
            activation,
            outputs,
            ..self.clone()
        }
    }

    /// Whether an axon or dendrite is currently carrying a signal.
    pub fn is_active_conductor(&self) -> bool {
        matches!(self.kind, CellKind::Axon { .. } | CellKind::Dendrite { .. }) && self.activation != 0
    }

    /// State shown to observers, with conducting axons and dendrites marked
    /// as activated.
    pub fn visible_state(&self) -> CoDiCellState {
        match self.kind {
            CellKind::Axon { .. } if self.activation != 0 => CoDiCellState::ActivatedAxon,
            CellKind::Dendrite { .. } if self.activation != 0 => CoDiCellState::ActivatedDendrite,
            kind => kind.state(),
        }
    }
}

impl Cell for CoDiCell {
    type State = CoDiCellState;

    fn state(&self) -> CoDiCellState {
        self.kind.state()
    }
}

/// Externally supplied description of one site of the initial lattice.
///
/// Seeds are unchecked; [`CoDiCell::from_seed`] rejects malformed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSeed {
    pub state: CoDiCellState,
    #[serde(default)]
    pub gate: Option<Direction>,
    #[serde(default)]
    pub chromosome: Chromosome,
    /// Overrides the default wiring of the kind
    #[serde(default)]
    pub wiring: Option<DirectionSet>,
}

impl CellSeed {
    pub fn blank() -> Self {
        Self {
            state: CoDiCellState::Blank,
            gate: None,
            chromosome: Chromosome::default(),
            wiring: None,
        }
    }

    pub fn neuron(gate: Direction) -> Self {
        Self::gated(CoDiCellState::Neuron, gate)
    }

    pub fn axon(gate: Direction) -> Self {
        Self::gated(CoDiCellState::Axon, gate)
    }

    pub fn dendrite(gate: Direction) -> Self {
        Self::gated(CoDiCellState::Dendrite, gate)
    }

    fn gated(state: CoDiCellState, gate: Direction) -> Self {
        Self {
            state,
            gate: Some(gate),
            ..Self::blank()
        }
    }

    #[must_use]
    pub fn with_chromosome(mut self, chromosome: Chromosome) -> Self {
        self.chromosome = chromosome;
        self
    }

    #[must_use]
    pub fn with_wiring(mut self, wiring: DirectionSet) -> Self {
        self.wiring = Some(wiring);
        self
    }
}

impl Default for CellSeed {
    fn default() -> Self {
        Self::blank()
    }
}
