use cube_core::{Color, CornerPiece, Cube, CubeBuilder, Move, parse_moves, random_scramble};
use log::info;

#[test_log::test]
fn test_inverse_sequence_unscrambles() {
    let mut rng = fastrand::Rng::with_seed(0);
    for length in [1, 2, 7, 20, 100, 500] {
        let scramble = random_scramble(&mut rng, length);
        let mut cube = Cube::solved();
        cube.apply_all(scramble.iter().copied());
        info!("Scrambled with {length} moves:\n{cube}");

        cube.apply_all(scramble.iter().rev().map(|mv| mv.inverse()));
        assert!(cube.is_solved());
    }
}

#[test_log::test]
fn test_notation_matches_explicit_turns() {
    let mut by_notation = Cube::solved();
    by_notation.apply_all(parse_moves("W O' B R B' W Y' G'").unwrap());

    let mut by_hand = Cube::solved();
    by_hand.apply_all([
        Move::clockwise(Color::White),
        Move::counter_clockwise(Color::Orange),
        Move::clockwise(Color::Blue),
        Move::clockwise(Color::Red),
        Move::counter_clockwise(Color::Blue),
        Move::clockwise(Color::White),
        Move::counter_clockwise(Color::Yellow),
        Move::counter_clockwise(Color::Green),
    ]);
    assert_eq!(by_notation, by_hand);
    assert_eq!(
        by_hand.corner_piece(Color::Yellow, 0),
        CornerPiece::new(Color::Red, Color::Yellow, Color::Blue)
    );
}

#[test_log::test]
fn test_colors_are_conserved() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut cube = Cube::solved();
    cube.apply_all(random_scramble(&mut rng, 300));

    for color in Color::ALL {
        let count = cube
            .faces()
            .iter()
            .flat_map(|face| face.colors())
            .filter(|&c| c == color)
            .count();
        assert_eq!(count, 8);
    }
}

#[test_log::test]
fn test_builder_round_trips_scans() {
    let mut rng = fastrand::Rng::with_seed(9);
    let mut cube = Cube::solved();
    cube.apply_all(random_scramble(&mut rng, 50));

    let mut builder = CubeBuilder::new();
    for side in Color::ALL.into_iter().rev() {
        let scan = cube.face(side).colors().map(|color| color as u8);
        builder.add_side(side, &scan).unwrap();
    }
    assert_eq!(builder.build().unwrap(), cube);

    let raw = cube
        .faces()
        .map(|face| face.colors().map(|color| color as u8).to_vec());
    assert_eq!(Cube::from_facelets(&raw).unwrap(), cube);
}
