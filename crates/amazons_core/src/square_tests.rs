use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_index_and_coords() {
    let a1 = Square::new(0, 0).unwrap();
    assert_eq!(a1.index(), 0);
    assert_eq!(a1.to_string(), "a1");

    let j10 = Square::new(9, 9).unwrap();
    assert_eq!(j10.index(), 99);
    assert_eq!(j10.to_string(), "j10");

    let d3 = Square::from_index(23).unwrap();
    assert_eq!((d3.col(), d3.row()), (3, 2));
    assert_eq!(d3, sq("d3"));
}

#[test]
fn test_out_of_bounds_is_rejected() {
    assert_eq!(
        Square::new(10, 0),
        Err(AmazonsError::InvalidSquare { col: 10, row: 0 })
    );
    assert_eq!(
        Square::new(0, -1),
        Err(AmazonsError::InvalidSquare { col: 0, row: -1 })
    );
    assert_eq!(
        Square::from_index(100),
        Err(AmazonsError::InvalidIndex { index: 100 })
    );
    assert!(Square::at(-1, 4).is_none());
}

#[test]
fn test_parse_text() {
    assert_eq!(sq("a10").index(), 90);
    assert_eq!(sq("j1").index(), 9);
    for bad in ["", "a", "k1", "a0", "a11", "a01", "A1", "a1x", "1a"] {
        assert!(bad.parse::<Square>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn test_text_round_trip_for_every_square() {
    for s in Square::all() {
        assert_eq!(s.to_string().parse::<Square>().unwrap(), s);
    }
}

#[test]
fn test_is_queen_move() {
    let at = |c, r| Square::new(c, r).unwrap();
    assert!(!at(1, 5).is_queen_move(at(1, 5)));
    assert!(!at(1, 5).is_queen_move(at(2, 7)));
    assert!(!at(0, 0).is_queen_move(at(5, 1)));
    assert!(at(1, 1).is_queen_move(at(9, 9)));
    assert!(at(2, 7).is_queen_move(at(8, 7)));
    assert!(at(3, 0).is_queen_move(at(3, 4)));
    assert!(at(7, 9).is_queen_move(at(0, 2)));
}

#[test]
fn test_queen_step() {
    let d3 = sq("d3");
    assert_eq!(d3.queen_step(1, 2), Some(sq("f5")));
    assert_eq!(d3.queen_step(2, 3), Some(sq("g3")));
    assert_eq!(d3.queen_step(6, 3), Some(sq("a3")));
    // Off the board
    assert_eq!(d3.queen_step(6, 4), None);
    assert_eq!(d3.queen_step(4, 3), None);
    // Invalid direction
    assert_eq!(d3.queen_step(8, 1), None);
}

#[test]
fn test_direction() {
    let d3 = sq("d3");
    assert_eq!(d3.direction(sq("f1")), 3);
    assert_eq!(d3.direction(sq("b5")), 7);
    assert_eq!(d3.direction(sq("d10")), 0);
    assert_eq!(d3.direction(sq("f5")), 1);
    assert_eq!(d3.direction(sq("a3")), 6);
    assert_eq!(d3.direction(sq("d1")), 4);
}

#[test]
#[should_panic]
fn test_direction_rejects_non_queen_move() {
    sq("a1").direction(sq("b3"));
}

#[test]
fn test_queen_step_inverse_round_trip() {
    for s in Square::all() {
        for dir in 0..8 {
            for dist in 1..10 {
                if let Some(t) = s.queen_step(dir, dist) {
                    assert_eq!(s.direction(t), dir);
                    assert_eq!(s.distance(t), dist);
                    assert_eq!(t.queen_step((dir + 4) % 8, dist), Some(s));
                }
            }
        }
    }
}
