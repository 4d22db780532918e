use hexagonia_hex::{CubeCoord, HexDirection, OffsetCoord, hex_distance};
use proptest::prelude::*;

fn arb_offset() -> impl Strategy<Value = OffsetCoord> {
    (-500i32..500, -500i32..500).prop_map(|(x, y)| OffsetCoord::new(x, y))
}

fn arb_direction() -> impl Strategy<Value = HexDirection> {
    (0usize..6).prop_map(HexDirection::from_index)
}

proptest! {
    // Cube coordinates always satisfy q + r + s == 0
    #[test]
    fn cube_constraint_holds(c in arb_offset()) {
        prop_assert!(c.to_cube().is_valid());
    }

    #[test]
    fn distance_is_symmetric(a in arb_offset(), b in arb_offset()) {
        prop_assert_eq!(hex_distance(a, b), hex_distance(b, a));
    }

    #[test]
    fn distance_zero_iff_equal(a in arb_offset(), b in arb_offset()) {
        prop_assert_eq!(hex_distance(a, b) == 0, a == b);
    }

    #[test]
    fn triangle_inequality(a in arb_offset(), b in arb_offset(), c in arb_offset()) {
        prop_assert!(hex_distance(a, c) <= hex_distance(a, b) + hex_distance(b, c));
    }

    // Distance is the Chebyshev norm of the cube difference
    #[test]
    fn distance_matches_cube_difference(a in arb_offset(), b in arb_offset()) {
        let d: CubeCoord = a.to_cube() - b.to_cube();
        let expected = d.q.abs().max(d.r.abs()).max(d.s.abs());
        prop_assert_eq!(hex_distance(a, b) as i32, expected);
    }

    // Stepping in a direction and then in its opposite returns to the start
    #[test]
    fn opposite_step_round_trips(c in arb_offset(), dir in arb_direction()) {
        prop_assert_eq!(c.neighbor(dir).neighbor(dir.opposite()), c);
    }

    #[test]
    fn neighbor_step_is_at_most_two(c in arb_offset(), dir in arb_direction()) {
        let d = hex_distance(c, c.neighbor(dir));
        prop_assert!((1..=2).contains(&d), "step {:?} from {} has distance {}", dir, c, d);
    }
}
