//! The signaling-phase transition.
//!
//! Each cell reads only its own counter and the inputs the last kicking pass
//! delivered, then emits a fresh set of outputs:
//! - BLANK stays silent
//! - NEURON integrates inputs and fires along its gate axis past a threshold
//! - AXON relays the value arriving on its gate in every direction
//! - DENDRITE sums its inputs, saturates, and forwards along its gate

use casim_data::{Coord3D, Direction, DirectionMap};

use crate::codi::cell::{CellKind, CoDiCell};
use crate::rule::Transition;

/// A neuron fires once its counter plus integrated input exceeds this.
pub const NEURON_FIRING_THRESHOLD: i64 = 31;

/// Largest value a dendrite forwards.
pub const DENDRITE_SIGNAL_LIMIT: i32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct SignalingRule;

impl Transition<Coord3D, CoDiCell> for SignalingRule {
    fn next_cell(
        &self,
        _coord: Coord3D,
        cell: &CoDiCell,
        _neighbors: &[(Coord3D, &CoDiCell)],
    ) -> CoDiCell {
        match cell.kind() {
            CellKind::Blank => cell.emitting(cell.activation(), DirectionMap::filled(0)),
            CellKind::Neuron { gate } => neuron_signal(cell, gate),
            CellKind::Axon { gate } => axon_signal(cell, gate),
            CellKind::Dendrite { gate } => dendrite_signal(cell, gate),
        }
    }
}

/// Self term plus every wired input, minus the gate input and, when wired,
/// the input opposite the gate.
pub fn integrated_input(cell: &CoDiCell, gate: Direction) -> i64 {
    let total: i64 = cell.inputs().map(|(_, v)| i64::from(v)).sum();
    let gate_value = i64::from(cell.input(gate).unwrap_or(0));
    let opposite_value = i64::from(cell.input(gate.opposite()).unwrap_or(0));
    1 + total - gate_value - opposite_value
}

fn neuron_signal(cell: &CoDiCell, gate: Direction) -> CoDiCell {
    let input = integrated_input(cell, gate);
    let charge = i64::from(cell.activation()) + input;
    if charge > NEURON_FIRING_THRESHOLD {
        let mut outputs = DirectionMap::filled(0);
        outputs[gate] = 1;
        outputs[gate.opposite()] = 1;
        cell.emitting(0, outputs)
    } else {
        let activation = u32::try_from(charge.max(0)).unwrap_or(u32::MAX);
        cell.emitting(activation, DirectionMap::filled(0))
    }
}

fn axon_signal(cell: &CoDiCell, gate: Direction) -> CoDiCell {
    let value = cell.input(gate).unwrap_or(0);
    cell.emitting(u32::from(value != 0), DirectionMap::filled(value))
}

fn dendrite_signal(cell: &CoDiCell, gate: Direction) -> CoDiCell {
    let sum = cell
        .inputs()
        .map(|(_, v)| v)
        .fold(0i32, i32::saturating_add)
        .min(DENDRITE_SIGNAL_LIMIT);
    let mut outputs = DirectionMap::filled(0);
    outputs[gate] = sum;
    cell.emitting(u32::from(sum != 0), outputs)
}
