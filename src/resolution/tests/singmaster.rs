use cube_model::{Color, Corner, Cube, CubeEvent, Edge, Move, MoveKind, Side};
use log::info;
use resolution::{
    Budget, Phase, ResolutionStrategy, Singmaster, SolverConfig, StrategyError,
};

fn scrambled(scramble: &str) -> Cube {
    let mut cube = Cube::new(3).unwrap();
    for mv in Move::parse_sequence(scramble).unwrap() {
        mv.perform(&mut cube).unwrap();
    }
    cube
}

fn random_scramble(rng: &mut fastrand::Rng) -> Cube {
    let mut cube = Cube::new(3).unwrap();
    for _ in 0..rng.usize(0..40) {
        let mv = Move {
            kind: MoveKind::ALL[rng.usize(0..MoveKind::ALL.len())],
            inverse: rng.bool(),
        };
        mv.perform(&mut cube).unwrap();
    }
    cube
}

fn replayed(cube: &Cube, moves: &[Move]) -> Cube {
    let mut cube = cube.clone();
    for mv in moves {
        mv.perform(&mut cube).unwrap();
    }
    cube
}

fn green_side(cube: &Cube) -> Side {
    Side::ALL
        .into_iter()
        .find(|&side| cube.center(side) == Color::Green)
        .unwrap()
}

fn first_layer_is_solved(cube: &Cube) -> bool {
    let green = green_side(cube);
    cube.face(green).is_uniform()
        && Corner::ALL
            .into_iter()
            .filter(|corner| corner.sides().contains(&green))
            .all(|corner| corner.is_in_place(cube))
        && Edge::ALL
            .into_iter()
            .filter(|edge| edge.sides().contains(&green))
            .all(|edge| edge.is_in_place(cube))
}

#[test_log::test]
fn rejects_unsupported_cubes() {
    assert_eq!(
        Singmaster::new(&Cube::new(4).unwrap()).unwrap_err(),
        StrategyError::InvalidDimension(4)
    );

    let mut cube = Cube::new(3).unwrap();
    cube.set_facelet(Side::Front, 0, 0, Color::Green).unwrap();
    assert_eq!(
        Singmaster::new(&cube).unwrap_err(),
        StrategyError::InsaneColors
    );
}

#[test_log::test]
fn describes_itself() {
    let strategy = Singmaster::new(&Cube::new(3).unwrap()).unwrap();
    assert_eq!(strategy.name(), "Singmaster");
    assert!(!strategy.description().is_empty());
}

#[test_log::test]
fn solved_cube_needs_no_moves() {
    let solution = Singmaster::new(&Cube::new(3).unwrap())
        .unwrap()
        .next_moves()
        .unwrap();
    assert!(solution.is_empty());
    assert_eq!(solution.pending_phase(), None);
}

#[test_log::test]
fn single_right_turn() {
    let cube = scrambled("R");
    let solution = Singmaster::new(&cube).unwrap().next_moves().unwrap();
    info!("Solution: {solution}");

    assert!(!solution.is_empty());
    let result = replayed(&cube, solution.moves());
    assert!(first_layer_is_solved(&result));
}

#[test_log::test]
fn leaves_the_callers_cube_alone() {
    let cube = scrambled("R U R' U' F2 D");
    let before = cube.clone();
    let strategy = Singmaster::new(&cube).unwrap();
    strategy.next_moves().unwrap();
    assert_eq!(cube, before);
}

#[test_log::test]
fn solves_the_first_two_layers_of_random_scrambles() {
    let mut rng = fastrand::Rng::with_seed(0x1f2e3d);
    for _ in 0..200 {
        let cube = random_scramble(&mut rng);
        let solution = Singmaster::new(&cube).unwrap().next_moves().unwrap();

        let result = replayed(&cube, solution.moves());
        assert!(result.is_with_sane_colors());
        assert!(first_layer_is_solved(&result), "{cube}");
        assert!(
            Edge::MIDDLE.iter().all(|edge| edge.is_in_place(&result)),
            "{cube}"
        );
        if result.is_solved() {
            assert_eq!(solution.pending_phase(), None);
        } else {
            assert_eq!(solution.pending_phase(), Some(Phase::LastLayer));
        }
    }
}

#[test_log::test]
fn cross_phase_finishes_the_cross() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..100 {
        let cube = random_scramble(&mut rng);
        let solution = Singmaster::new(&cube)
            .unwrap()
            .solve_through(Phase::FirstLayerCross)
            .unwrap();
        let result = replayed(&cube, solution.moves());
        assert_eq!(result.center(Side::Up), Color::Green);
        for edge in Edge::UPPER {
            assert!(edge.is_in_place(&result), "{edge} of {cube}");
        }
    }
}

#[test_log::test]
fn turned_top_layer_is_lined_up_again() {
    for scramble in ["U", "U2", "U'", "U D'"] {
        let cube = scrambled(scramble);
        let solution = Singmaster::new(&cube).unwrap().next_moves().unwrap();
        info!("{scramble}: {solution}");

        let result = replayed(&cube, solution.moves());
        assert!(first_layer_is_solved(&result), "{scramble}\n{result}");
        assert!(
            Edge::MIDDLE.iter().all(|edge| edge.is_in_place(&result)),
            "{scramble}\n{result}"
        );
    }
}

#[test_log::test]
fn replays_deterministically() {
    let cube = scrambled("L2 B' U F R' D2 L F'");
    let strategy = Singmaster::new(&cube).unwrap();
    let first = strategy.next_moves().unwrap();
    let second = strategy.next_moves().unwrap();
    assert_eq!(first, second);

    let mut events = Vec::<CubeEvent>::new();
    let mut copy = cube.clone();
    first.replay(&mut copy, &mut events).unwrap();
    assert_eq!(events.len(), first.len());
    assert_eq!(copy, replayed(&cube, first.moves()));
}

#[test_log::test]
fn tiny_budget_times_out() {
    let cube = scrambled("F R U L B D");
    let config = SolverConfig {
        max_phase_iterations: 1,
        time_limit_ms: None,
    };
    let err = Singmaster::with_config(&cube, config)
        .unwrap()
        .next_moves()
        .unwrap_err();
    assert!(err.is_timeout(), "{err}");
    assert!(matches!(
        err,
        StrategyError::Timeout {
            budget: Budget::Iterations(1),
            ..
        }
    ));
}

#[test_log::test]
fn time_limit_times_out() {
    let cube = scrambled("F R U L B D");
    let config = SolverConfig {
        time_limit_ms: Some(0),
        ..SolverConfig::default()
    };
    let err = Singmaster::with_config(&cube, config)
        .unwrap()
        .next_moves()
        .unwrap_err();
    assert!(err.is_timeout(), "{err}");
    assert!(matches!(
        err,
        StrategyError::Timeout {
            phase: Phase::FirstLayerCross,
            budget: Budget::Milliseconds(0),
        }
    ));
}

#[test_log::test]
fn no_green_edge_has_no_solution() {
    // Swap the green edge stickers on top with the blue corner stickers
    // below, which keeps every count and center intact.
    let mut cube = Cube::new(3).unwrap();
    for (row, col) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
        cube.set_facelet(Side::Up, row, col, Color::Blue).unwrap();
    }
    for (row, col) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
        cube.set_facelet(Side::Down, row, col, Color::Green).unwrap();
    }
    assert!(cube.is_with_sane_colors());

    let err = Singmaster::new(&cube).unwrap().next_moves().unwrap_err();
    assert!(matches!(err, StrategyError::NoSolution(_)), "{err}");
    assert!(!err.is_timeout());
}
