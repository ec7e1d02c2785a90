use crate::{
    classify::{Chirality, Outcome, Shape, Snake},
    lattice::{Cubic, Lattice, LatticeKind, Square},
    search::count_snakes,
    tally::Tally,
    turn::TurnString,
    Classifier,
};

fn tally<L: Lattice<D>, const D: usize>(cells: usize) -> Tally {
    count_snakes::<L, D>(cells, 0, |_| {}).unwrap()
}

fn classify<L: Lattice<D>, const D: usize>(s: &str) -> Outcome {
    let turns = s.parse::<TurnString>().unwrap().0;
    Classifier::<L, D>::new(turns.len())
        .unwrap()
        .classify(&turns)
        .unwrap()
}

#[test]
pub fn square_tetrominoes() {
    // I, L and S are snakes. L and S come in two mirror images.
    let tally = tally::<Square, 2>(4);

    assert_eq!(tally.strings, 7);
    assert_eq!(tally.free(Shape::Open), 3);
    assert_eq!(tally.one_sided(Shape::Open), 5);
    assert_eq!(tally.free(Shape::Ouroboros), 0);
}

#[test]
pub fn square_pentominoes() {
    // I, L, N, U, V, W and Z; the L, N and Z have distinct mirror images.
    let tally = tally::<Square, 2>(5);

    assert_eq!(tally.free(Shape::Open), 7);
    assert_eq!(tally.one_sided(Shape::Open), 10);
    assert_eq!(tally.free_cavitous(Shape::Open), 0);
    assert_eq!(tally.columns(LatticeKind::Square), vec![7, 7, 0, 10, 10, 0]);
}

#[test]
pub fn square_heptominoes_include_one_holed_snake() {
    let tally = tally::<Square, 2>(7);

    assert_eq!(tally.free(Shape::Open), 31);
    assert_eq!(tally.free_cavitous(Shape::Open), 1);
}

#[test]
pub fn cubic_small_sizes() {
    let three = tally::<Cubic, 3>(3);
    assert_eq!(three.free(Shape::Open), 2);
    assert_eq!(three.one_sided(Shape::Open), 2);

    // I, L, S and the chiral screw.
    let four = tally::<Cubic, 3>(4);
    assert_eq!(four.strings, 6);
    assert_eq!(four.free(Shape::Open), 4);
    assert_eq!(four.one_sided(Shape::Open), 5);

    let five = tally::<Cubic, 3>(5);
    assert_eq!(five.free(Shape::Open), 12);
    assert_eq!(five.one_sided(Shape::Open), 16);
}

#[test]
pub fn first_ouroboros_is_the_six_cube_ring() {
    let five = tally::<Cubic, 3>(5);
    assert_eq!(five.one_sided(Shape::Ouroboros), 0);

    let six = tally::<Cubic, 3>(6);
    assert_eq!(six.free(Shape::Ouroboros), 1);
    assert_eq!(six.one_sided(Shape::Ouroboros), 1);
    assert_eq!(six.free_cavitous(Shape::Ouroboros), 0);
}

#[test]
pub fn ten_cube_ouroboroi_split_by_mirror() {
    let ten = tally::<Cubic, 3>(10);

    assert_eq!(ten.free(Shape::Ouroboros), 11);
    assert_eq!(ten.one_sided(Shape::Ouroboros), 13);
    assert_eq!(ten.one_sided_cavitous(Shape::Ouroboros), 0);
}

#[test]
pub fn twelve_cube_cavitous_ouroboroi() {
    let twelve = tally::<Cubic, 3>(12);

    assert_eq!(twelve.free(Shape::Ouroboros), 77);
    assert_eq!(twelve.one_sided(Shape::Ouroboros), 122);
    assert_eq!(twelve.free_cavitous(Shape::Ouroboros), 2);
    assert_eq!(twelve.one_sided_cavitous(Shape::Ouroboros), 3);
}

#[test]
pub fn smallest_cavitous_polycube_snakes() {
    // Eleven cubes is the least that can wall off a cell.
    let ten = tally::<Cubic, 3>(10);
    assert_eq!(ten.one_sided_cavitous(Shape::Open), 0);

    let eleven = tally::<Cubic, 3>(11);
    assert_eq!(eleven.free_cavitous(Shape::Open), 4);
    assert_eq!(eleven.one_sided_cavitous(Shape::Open), 8);
    assert_eq!(eleven.one_sided(Shape::Ouroboros), 0);
}

#[test]
pub fn cavitous_polycube_snake_and_its_mirror() {
    let snake = |chirality| {
        Outcome::Accepted(Snake {
            shape: Shape::Open,
            chirality,
            cavitous: true,
        })
    };

    assert_eq!(classify::<Cubic, 3>("SRSRDRURSR"), snake(Chirality::Free));
    assert_eq!(
        classify::<Cubic, 3>("SRSRURDRSR"),
        snake(Chirality::OneSided)
    );
}

#[test]
pub fn progress_is_reported_every_tick() {
    let mut calls = 0;
    let tally = count_snakes::<Square, 2>(6, 10, |_| calls += 1).unwrap();

    assert_eq!(tally.strings, 41);
    assert_eq!(calls, 4);
}

#[test]
pub fn too_few_cells_is_an_error() {
    assert!(matches!(
        count_snakes::<Cubic, 3>(2, 0, |_| {}),
        Err(crate::Error::TooShort { len: 1 })
    ));
}
