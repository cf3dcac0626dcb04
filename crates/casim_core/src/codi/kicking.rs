//! The kicking pass.
//!
//! After a step has written every cell's outputs, kicking copies those
//! outputs into the neighbors' input slots so the next step reads a
//! consistent neighborhood. It runs as two sweeps over the lattice's
//! enumeration order:
//!
//! - forward (increasing x, then y, then z) fills the NORTH, TOP and EAST slots
//! - backward (decreasing) fills the SOUTH, BOTTOM and WEST slots
//!
//! A slot for direction `d` receives what the neighbor at `d` emitted in the
//! opposite direction, i.e. toward this cell. A missing neighbor or an
//! unwired slot reads as zero; neither is an error. Sweeps only read outputs
//! and only write inputs, so visiting order never leaks between cells.

use casim_data::{Coord3D, Direction, Grid3D};

use crate::codi::cell::CoDiCell;

pub fn kick(lattice: &mut Grid3D<CoDiCell>) {
    kick_positive(lattice);
    kick_negative(lattice);
}

fn kick_positive(lattice: &mut Grid3D<CoDiCell>) {
    for coord in lattice.coordinates() {
        for direction in Direction::POSITIVE {
            kick_slot(lattice, coord, direction);
        }
    }
}

fn kick_negative(lattice: &mut Grid3D<CoDiCell>) {
    for coord in lattice.coordinates().rev() {
        for direction in Direction::NEGATIVE {
            kick_slot(lattice, coord, direction);
        }
    }
}

fn kick_slot(lattice: &mut Grid3D<CoDiCell>, coord: Coord3D, direction: Direction) {
    let incoming = lattice
        .get(coord + direction.offset())
        .map(|neighbor| neighbor.output(direction.opposite()))
        .unwrap_or(0);
    if let Ok(cell) = lattice.get_mut(coord) {
        cell.set_input(direction, incoming);
    }
}
