mod common;

use casim_lib::model::codi::{
    CellKind, CellSeed, Chromosome, CoDi, CoDiCellState, Phase, ACTIVATION_DRAW_LIMIT,
};
use casim_lib::model::config::CoDiConfig;
use casim_lib::model::{Automaton, Cell, Coord2D, Coord3D, Direction, DirectionSet};
use common::LatticeBuilder;

fn axon_line() -> CoDi {
    let mut codi = LatticeBuilder::new(1, 1, 5)
        .with_chromosome(Chromosome::new(DirectionSet::ALL))
        .with_neuron(0, 0, 0, Direction::North)
        .with_seed(17)
        .build();
    common::run_until_signaling(&mut codi, 20);
    codi
}

fn active(codi: &CoDi, z: i32) -> bool {
    codi.cell(Coord3D::new(0, 0, z)).unwrap().activation() != 0
}

#[test]
fn test_pulse_travels_along_axon() {
    let mut codi = axon_line();

    let mut waited = 0;
    while !active(&codi, 1) {
        codi.step();
        waited += 1;
        assert!(waited <= 40, "neuron never fired");
    }

    for z in 1..5 {
        for other in 1..5 {
            assert_eq!(active(&codi, other), other == z, "pulse should sit at z = {z}");
        }
        codi.step();
    }
}

#[test]
fn test_active_axon_is_displayed_as_activated() {
    let mut codi = axon_line();
    for _ in 0..40 {
        let grid = codi.step();
        for z in 1..5 {
            let shown = grid.get(Coord2D::new(0, z)).unwrap().state();
            let expected = if active(&codi, z) {
                CoDiCellState::ActivatedAxon
            } else {
                CoDiCellState::Axon
            };
            assert_eq!(shown, expected);
            assert_eq!(
                codi.cell(Coord3D::new(0, 0, z)).unwrap().kind(),
                CellKind::Axon {
                    gate: Direction::South
                }
            );
        }
    }
}

#[test]
fn test_dendrite_forwards_neuron_pulse() {
    // x=2 fires along the x axis; the dendrite in between collects the pulse
    // and forwards it toward x=0 only.
    let mut codi = LatticeBuilder::new(3, 1, 1)
        .with_neuron(0, 0, 0, Direction::North)
        .with_cell(1, 0, 0, CellSeed::dendrite(Direction::West))
        .with_neuron(2, 0, 0, Direction::West)
        .with_seed(5)
        .build();
    common::run_until_signaling(&mut codi, 10);
    codi.set_layer(1).unwrap();

    let mut forwarded = false;
    for _ in 0..40 {
        let grid = codi.step();
        let shown = grid.get(Coord2D::new(0, 0)).unwrap().state();
        let dendrite = codi.cell(Coord3D::new(1, 0, 0)).unwrap();
        assert_eq!(dendrite.state(), CoDiCellState::Dendrite);
        assert_eq!(dendrite.output(Direction::East), 0);
        assert!(dendrite.output(Direction::West) <= 2);
        if dendrite.output(Direction::West) == 1 {
            forwarded = true;
            assert_eq!(dendrite.activation(), 1);
            assert_eq!(shown, CoDiCellState::ActivatedDendrite);
        } else {
            assert_eq!(shown, CoDiCellState::Dendrite);
        }
    }
    assert!(forwarded, "dendrite should forward at least one pulse");
}

#[test]
fn test_setup_counters_drawn_once_and_in_range() {
    let mut config = CoDiConfig::default();
    config.lattice.width = 6;
    config.lattice.height = 6;
    config.lattice.depth = 6;
    config.lattice.seed = Some(8);
    config.lattice.neuron_density = 0.2;
    let mut codi = CoDi::from_config(&config).unwrap();

    while codi.phase() != Phase::SignalSetup {
        codi.step();
    }
    codi.step();
    assert_eq!(codi.phase(), Phase::Signal);

    for cell in codi.lattice().values() {
        // Drawn below the limit, then at most one self term added or a reset on firing.
        assert!(cell.activation() < ACTIVATION_DRAW_LIMIT);
        if matches!(cell.kind(), CellKind::Blank) {
            assert_eq!(cell.activation(), 0);
        }
    }
}

#[test]
fn test_stats_cover_displayed_slice() {
    let mut codi = axon_line();
    let stats = codi.stats();
    assert_eq!(stats.total(), 5);
    assert_eq!(stats.count(CoDiCellState::Neuron), 1);
    assert_eq!(
        stats.count(CoDiCellState::Axon) + stats.count(CoDiCellState::ActivatedAxon),
        4
    );

    codi.step();
    let text = codi.stats().to_string();
    assert!(text.starts_with(&format!("Iteration: {}", codi.iteration())));
    assert!(text.contains("Neuron: 1"));
}
