//! Chromosome-driven structural growth.
//!
//! Growth only ever turns BLANK sites into structure; a grown cell never
//! changes again. A structural cell pushes growth into an adjacent blank site
//! when it "grows toward" it:
//!
//! - a NEURON grows axon along its gate and the opposite direction, and
//!   dendrite along every other direction its chromosome allows
//! - an AXON or DENDRITE extends its own kind along every direction its
//!   chromosome allows, except back through its gate
//!
//! The grown cell's gate points back at the cell it grew from. When several
//! neighbors compete, axon beats dendrite and ties fall to the first
//! direction in [`Direction::ALL`].

use casim_data::{Coord3D, Direction};

use crate::codi::cell::{CellKind, CoDiCell};
use crate::rule::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Growth {
    Axon,
    Dendrite,
}

/// Any transition that can drive the CoDi growth phase.
pub trait GrowthRule: Transition<Coord3D, CoDiCell> {}

impl<T: Transition<Coord3D, CoDiCell>> GrowthRule for T {}

/// Default growth rule of the CoDi automaton.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromosomeGrowth;

fn growth_toward(source: &CoDiCell, toward: Direction) -> Option<Growth> {
    let allowed = source.chromosome().allows(toward);
    match source.kind() {
        CellKind::Blank => None,
        CellKind::Neuron { gate } if toward == gate || toward == gate.opposite() => {
            Some(Growth::Axon)
        }
        CellKind::Neuron { .. } => allowed.then_some(Growth::Dendrite),
        CellKind::Axon { gate } => (allowed && toward != gate).then_some(Growth::Axon),
        CellKind::Dendrite { gate } => (allowed && toward != gate).then_some(Growth::Dendrite),
    }
}

impl Transition<Coord3D, CoDiCell> for ChromosomeGrowth {
    fn next_cell(
        &self,
        coord: Coord3D,
        cell: &CoDiCell,
        neighbors: &[(Coord3D, &CoDiCell)],
    ) -> CoDiCell {
        if !cell.kind().is_blank() {
            return cell.clone();
        }

        let winner = neighbors
            .iter()
            .filter_map(|(neighbor_coord, neighbor)| {
                let to_source = Direction::between(coord, *neighbor_coord)?;
                let growth = growth_toward(neighbor, to_source.opposite())?;
                Some((growth, to_source))
            })
            .min();

        match winner {
            Some((Growth::Axon, gate)) => {
                CoDiCell::grown(CellKind::Axon { gate }, cell.chromosome())
            }
            Some((Growth::Dendrite, gate)) => {
                CoDiCell::grown(CellKind::Dendrite { gate }, cell.chromosome())
            }
            None => cell.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codi::cell::{CellSeed, Chromosome};
    use crate::neighbors::von_neumann_3d;
    use crate::rule::UpdateRule;
    use casim_data::{Dim3, DirectionSet, Grid, Grid3D};

    fn lattice_with(center: CellSeed) -> Grid3D<CoDiCell> {
        let mut grid = Grid::filled(Dim3::new(3, 3, 3), CoDiCell::blank(Chromosome::default()));
        let cell = CoDiCell::from_seed(&center).expect("valid seed");
        grid.set(Coord3D::new(1, 1, 1), cell).expect("in bounds");
        grid
    }

    fn grow(grid: &Grid3D<CoDiCell>) -> Grid3D<CoDiCell> {
        UpdateRule::<Dim3, CoDiCell, _>::new(von_neumann_3d, ChromosomeGrowth).apply(grid)
    }

    fn kind_at(grid: &Grid3D<CoDiCell>, coord: Coord3D) -> CellKind {
        grid.get(coord).expect("in bounds").kind()
    }

    #[test]
    fn test_neuron_grows_axon_along_gate_axis() {
        let grid = grow(&lattice_with(CellSeed::neuron(Direction::East)));
        assert_eq!(
            kind_at(&grid, Coord3D::new(2, 1, 1)),
            CellKind::Axon {
                gate: Direction::West
            }
        );
        assert_eq!(
            kind_at(&grid, Coord3D::new(0, 1, 1)),
            CellKind::Axon {
                gate: Direction::East
            }
        );
        // empty chromosome: no dendrites
        assert_eq!(kind_at(&grid, Coord3D::new(1, 2, 1)), CellKind::Blank);
    }

    #[test]
    fn test_neuron_grows_dendrites_where_chromosome_allows() {
        let chromosome = Chromosome::new(DirectionSet::single(Direction::Top));
        let grid = grow(&lattice_with(
            CellSeed::neuron(Direction::East).with_chromosome(chromosome),
        ));
        assert_eq!(
            kind_at(&grid, Coord3D::new(1, 2, 1)),
            CellKind::Dendrite {
                gate: Direction::Bottom
            }
        );
        assert_eq!(kind_at(&grid, Coord3D::new(1, 0, 1)), CellKind::Blank);
    }

    #[test]
    fn test_axon_does_not_grow_back_through_gate() {
        let all = Chromosome::new(DirectionSet::ALL);
        let grid = grow(&lattice_with(
            CellSeed::axon(Direction::West).with_chromosome(all),
        ));
        assert_eq!(kind_at(&grid, Coord3D::new(0, 1, 1)), CellKind::Blank);
        assert_eq!(
            kind_at(&grid, Coord3D::new(2, 1, 1)),
            CellKind::Axon {
                gate: Direction::West
            }
        );
        assert_eq!(
            kind_at(&grid, Coord3D::new(1, 1, 2)),
            CellKind::Axon {
                gate: Direction::South
            }
        );
    }

    #[test]
    fn test_axon_growth_beats_dendrite_growth() {
        let all = Chromosome::new(DirectionSet::ALL);
        let mut grid = Grid::filled(Dim3::new(3, 1, 1), CoDiCell::blank(Chromosome::default()));
        let dendrite = CoDiCell::from_seed(&CellSeed::dendrite(Direction::West).with_chromosome(all))
            .expect("valid seed");
        let axon = CoDiCell::from_seed(&CellSeed::axon(Direction::East).with_chromosome(all))
            .expect("valid seed");
        grid.set(Coord3D::new(0, 0, 0), dendrite).expect("in bounds");
        grid.set(Coord3D::new(2, 0, 0), axon).expect("in bounds");

        let next = grow(&grid);
        assert_eq!(
            kind_at(&next, Coord3D::new(1, 0, 0)),
            CellKind::Axon {
                gate: Direction::East
            }
        );
    }

    #[test]
    fn test_structural_cells_never_change() {
        let grid = lattice_with(CellSeed::dendrite(Direction::North));
        let next = grow(&grid);
        assert_eq!(
            next.get(Coord3D::new(1, 1, 1)).expect("in bounds"),
            grid.get(Coord3D::new(1, 1, 1)).expect("in bounds")
        );
    }

    #[test]
    fn test_grown_cell_keeps_site_chromosome() {
        let site = Chromosome::new(DirectionSet::single(Direction::North));
        let mut grid = lattice_with(CellSeed::neuron(Direction::East));
        grid.set(Coord3D::new(2, 1, 1), CoDiCell::blank(site))
            .expect("in bounds");
        let next = grow(&grid);
        let grown = next.get(Coord3D::new(2, 1, 1)).expect("in bounds");
        assert_eq!(grown.chromosome(), site);
        assert_eq!(grown.wiring(), DirectionSet::single(Direction::West));
    }
}
