//! Tests for leg factorisation, offset scanning and orientation expansion

#[cfg(test)]
mod tests {
    use tritri::board::candidates::{
        Dimension, Rotation, dimension_candidates, dimensions, generate_candidates, place,
        valid_offsets,
    };
    use tritri::geometry::{GridPoint, GridTriangle, UnitSquare};

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    fn candidates_for(area: i32, anchor: GridPoint) -> Vec<GridTriangle> {
        generate_candidates(anchor, &dimension_candidates(area), 17)
    }

    // Tests every factorisation with both legs at least 2, by ascending base
    // Verified by letting base run up to 2 * area inclusive
    #[test]
    fn test_dimensions_factor_twice_the_area() {
        let found = dimensions(6);

        assert_eq!(
            found,
            vec![
                Dimension::new(2, 6),
                Dimension::new(3, 4),
                Dimension::new(4, 3),
                Dimension::new(6, 2),
            ]
        );

        for area in 1..40 {
            for dimension in dimensions(area) {
                assert_eq!(dimension.doubled_area(), 2 * area);
                assert!(dimension.base >= 2 && dimension.height >= 2);
            }
        }
    }

    // Tests area 2 has a single square factorisation and a single offset
    // Verified by starting the base scan at 1
    #[test]
    fn test_area_two_yields_square_legs() {
        let table = dimension_candidates(2);

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].dimension, Dimension::new(2, 2));
        assert_eq!(table[0].offsets, vec![p(0, 0)]);
        assert!(!dimensions(2).contains(&Dimension::new(4, 1)));
    }

    // Tests boundary areas: 1 has no legal legs, an odd prime has exactly two
    // Verified by excluding the largest proper base
    #[test]
    fn test_small_and_prime_areas() {
        assert!(dimensions(1).is_empty());
        assert!(dimensions(0).is_empty());
        assert_eq!(
            dimensions(7),
            vec![Dimension::new(2, 7), Dimension::new(7, 2)]
        );
    }

    // Tests the offset scan order and extent for a non-square dimension
    // Verified by moving the upright triangle's apex without its base
    #[test]
    fn test_valid_offsets_scan_order() {
        assert_eq!(
            valid_offsets(Dimension::new(4, 3)),
            vec![p(0, 0), p(0, -1), p(-1, 0)]
        );
        assert_eq!(
            valid_offsets(Dimension::new(2, 6)),
            vec![p(0, 0), p(0, -1), p(0, -2)]
        );
        assert!(valid_offsets(Dimension::new(0, 0)).is_empty());
    }

    // Tests every offset keeps the whole unit square inside the upright triangle
    // Verified by probing the square's centre instead of its far corner
    #[test]
    fn test_offsets_cover_origin_square() {
        let square = UnitSquare::new(GridPoint::origin());
        for area in 2..25 {
            for entry in dimension_candidates(area) {
                assert!(!entry.offsets.is_empty(), "no offsets for {:?}", entry.dimension);
                for offset in entry.offsets {
                    assert!(offset.x <= 0 && offset.y <= 0);
                    let triangle =
                        place(Rotation::Upright, GridPoint::origin(), entry.dimension, offset);
                    for corner in square.corners() {
                        assert!(triangle.contains_point(corner));
                    }
                }
            }
        }
    }

    // Tests quarter turns map the unit vectors clockwise
    // Verified by swapping Right and Left
    #[test]
    fn test_rotation_turn() {
        let unit = p(1, 0);
        let turned: Vec<GridPoint> = Rotation::ALL.iter().map(|r| r.turn(unit)).collect();

        assert_eq!(turned, vec![p(1, 0), p(0, -1), p(-1, 0), p(0, 1)]);
    }

    // Tests the four placements of a 2x2 triangle around anchor (3, 0)
    // Verified by omitting the +1 pivot on the right orientation
    #[test]
    fn test_place_orientations() {
        let anchor = p(3, 0);
        let dimension = Dimension::new(2, 2);
        let offset = p(0, 0);

        let placed: Vec<[GridPoint; 3]> = Rotation::ALL
            .iter()
            .map(|&r| place(r, anchor, dimension, offset).vertices())
            .collect();

        assert_eq!(placed[0], [p(3, 0), p(5, 0), p(3, 2)]);
        assert_eq!(placed[1], [p(3, 1), p(3, -1), p(5, 1)]);
        assert_eq!(placed[2], [p(4, 1), p(2, 1), p(4, -1)]);
        assert_eq!(placed[3], [p(4, 0), p(4, 2), p(2, 0)]);
    }

    // Tests off-board orientations are dropped and order is upright before left
    // Verified by skipping the bounds filter
    #[test]
    fn test_area_two_at_bottom_edge() {
        let found = candidates_for(2, p(3, 0));

        assert_eq!(
            found,
            vec![
                GridTriangle::new(p(3, 0), p(5, 0), p(3, 2)),
                GridTriangle::new(p(4, 0), p(4, 2), p(2, 0)),
            ]
        );
        assert!(found.iter().all(|t| t.within(0, 17)));
    }

    // Tests an interior cell keeps all four orientations per offset
    // Verified by iterating orientations before offsets
    #[test]
    fn test_interior_cell_keeps_every_orientation() {
        let found = candidates_for(3, p(5, 5));

        assert_eq!(found.len(), 8);
        assert_eq!(found[0], GridTriangle::new(p(5, 5), p(7, 5), p(5, 8)));
        assert_eq!(found[4], GridTriangle::new(p(5, 5), p(8, 5), p(5, 7)));
    }

    // Tests area, bounds and square coverage for every generated candidate
    // Verified by using height for both legs
    #[test]
    fn test_candidates_match_area_and_cover_anchor() {
        for (area, anchor) in [(12, p(2, 1)), (20, p(8, 8)), (6, p(16, 2)), (4, p(0, 14))] {
            let square = UnitSquare::new(anchor);
            let found = candidates_for(area, anchor);

            assert!(!found.is_empty());
            for triangle in found {
                assert_eq!(triangle.doubled_signed_area(), 2 * area);
                assert!(triangle.within(0, 17));
                for corner in square.corners() {
                    assert!(triangle.contains_point(corner));
                }
            }
        }
    }
}
