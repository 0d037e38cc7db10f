//! Tests for re-verification of complete assignments

#[cfg(test)]
mod tests {
    use tritri::SolverError;
    use tritri::board::Board;
    use tritri::board::layout::{BoardLayout, CellSpec};
    use tritri::geometry::{GridPoint, GridTriangle};
    use tritri::search::Solution;

    fn t(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> GridTriangle {
        GridTriangle::new(
            GridPoint::new(a.0, a.1),
            GridPoint::new(b.0, b.1),
            GridPoint::new(c.0, c.1),
        )
    }

    fn board(size: i32, cells: Vec<CellSpec>) -> Board {
        Board::from_layout(&BoardLayout::new(size, cells).unwrap())
    }

    fn rejection(solution: &Solution, board: &Board) -> (usize, String) {
        match solution.verify(board).unwrap_err() {
            SolverError::InvalidSolution { index, reason } => (index, reason),
            other => (usize::MAX, other.to_string()),
        }
    }

    // Tests a valid assignment passes regardless of vertex winding
    // Verified by comparing signed rather than absolute area
    #[test]
    fn test_valid_assignment_passes() {
        let board = board(4, vec![CellSpec::new(2, 0, 0), CellSpec::new(2, 1, 1)]);
        let solution = Solution::new(vec![t((0, 0), (2, 0), (0, 2)), t((1, 1), (1, 3), (3, 1))]);

        assert!(solution.verify(&board).is_ok());
        assert_eq!(solution.len(), 2);
        assert!(!solution.is_empty());
    }

    // Tests a missing triangle is reported against the cell count
    // Verified by zipping without comparing lengths
    #[test]
    fn test_rejects_wrong_count() {
        let board = board(3, vec![CellSpec::new(2, 0, 0)]);

        let (index, reason) = rejection(&Solution::new(Vec::new()), &board);

        assert_eq!(index, 0);
        assert_eq!(reason, "0 triangles for 1 cells");
    }

    // Tests vertices past the board edge are rejected
    // Verified by using the board size as the bound
    #[test]
    fn test_rejects_off_board() {
        let board = board(3, vec![CellSpec::new(2, 0, 0)]);
        let solution = Solution::new(vec![t((0, 0), (3, 0), (0, 2))]);

        let (index, reason) = rejection(&solution, &board);

        assert_eq!(index, 0);
        assert!(reason.contains("off the board"));
    }

    // Tests a triangle of the wrong size is rejected
    // Verified by comparing area with doubled area
    #[test]
    fn test_rejects_wrong_area() {
        let board = board(3, vec![CellSpec::new(2, 0, 0)]);
        let solution = Solution::new(vec![t((0, 0), (2, 0), (0, 1))]);

        let (_, reason) = rejection(&solution, &board);

        assert!(reason.contains("does not match cell area 2"));
    }

    // Tests a triangle away from its cell's square is rejected
    // Verified by checking only the anchor corner
    #[test]
    fn test_rejects_uncovered_square() {
        let board = board(6, vec![CellSpec::new(2, 3, 3)]);
        let solution = Solution::new(vec![t((0, 0), (2, 0), (0, 2))]);

        let (_, reason) = rejection(&solution, &board);

        assert_eq!(reason, "does not cover its square at (3,3)");
    }

    // Tests crossing an earlier triangle is rejected at the later index
    // Verified by comparing each triangle with itself
    #[test]
    fn test_rejects_crossing() {
        let board = board(10, vec![CellSpec::new(8, 1, 1), CellSpec::new(4, 1, 1)]);
        let solution = Solution::new(vec![t((0, 0), (4, 0), (0, 4)), t((1, 1), (5, 1), (1, 3))]);

        assert_eq!(rejection(&solution, &board), (1, "crosses triangle 0".to_string()));
    }

    // Tests a triangle nested inside an earlier one is rejected
    // Verified by skipping the containment check
    #[test]
    fn test_rejects_nesting() {
        let board = board(10, vec![CellSpec::new(8, 1, 1), CellSpec::new(2, 1, 1)]);
        let solution = Solution::new(vec![t((0, 0), (4, 0), (0, 4)), t((1, 1), (3, 1), (1, 3))]);

        assert_eq!(rejection(&solution, &board), (1, "nested with triangle 0".to_string()));
    }

    // Tests the rejection message names the triangle index
    // Verified by formatting the reason only
    #[test]
    fn test_rejection_display() {
        let board = board(3, vec![CellSpec::new(2, 0, 0)]);
        let error = Solution::new(Vec::new()).verify(&board).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Solution rejected at triangle 0: 0 triangles for 1 cells"
        );
    }
}
