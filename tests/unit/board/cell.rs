//! Tests for cells, candidate retention and board construction

#[cfg(test)]
mod tests {
    use bitvec::prelude::*;
    use tritri::board::layout::{BoardLayout, CellSpec};
    use tritri::board::{Board, Cell};
    use tritri::geometry::{GridPoint, GridTriangle};

    // Tests a cell exposes its spec and derived tables
    // Verified by generating candidates against the wrong anchor
    #[test]
    fn test_cell_derives_candidates() {
        let cell = Cell::new(CellSpec::new(2, 3, 0), 17);

        assert_eq!(cell.area(), 2);
        assert_eq!(cell.anchor(), GridPoint::new(3, 0));
        assert_eq!(cell.probe_square().origin(), GridPoint::new(3, 0));
        assert_eq!(cell.dimensions().len(), 1);
        assert_eq!(cell.candidates().len(), 2);
    }

    // Tests retention keeps flagged candidates in their original order
    // Verified by inverting the flag
    #[test]
    fn test_retain_candidates_preserves_order() {
        let mut cell = Cell::new(CellSpec::new(3, 5, 5), 17);
        let before = cell.candidates().to_vec();

        let keep = bitvec![0, 1, 1, 0, 0, 0, 0, 1];
        cell.retain_candidates(&keep);

        let expected: Vec<GridTriangle> = [1, 2, 7]
            .iter()
            .filter_map(|&i| before.get(i).copied())
            .collect();
        assert_eq!(cell.candidates(), expected.as_slice());
    }

    // Tests a short mask drops the unflagged tail
    // Verified by defaulting missing flags to keep
    #[test]
    fn test_retain_candidates_short_mask() {
        let mut cell = Cell::new(CellSpec::new(3, 5, 5), 17);
        let first = cell.candidates().first().copied();

        cell.retain_candidates(bits![1]);

        assert_eq!(cell.candidates().len(), 1);
        assert_eq!(cell.candidates().first().copied(), first);
    }

    // Tests the puzzle board generates the expected candidate volume per cell
    // Verified by clipping to 18 instead of 17
    #[test]
    fn test_puzzle_board_candidate_counts() {
        let board = Board::from_layout(&BoardLayout::puzzle());
        let counts: Vec<usize> = board.cells().iter().map(|c| c.candidates().len()).collect();

        assert_eq!(board.len(), 29);
        assert_eq!(board.max_coordinate(), 17);
        assert_eq!(board.candidate_count(), 879);
        assert_eq!(counts.first(), Some(&2));
        assert_eq!(counts.get(14), Some(&200));
        assert!(counts.iter().all(|&n| n > 0));
    }

    // Tests a cell with area 1 has no candidates at all
    // Verified by allowing unit legs
    #[test]
    fn test_area_one_cell_is_empty() {
        let layout = BoardLayout::new(6, vec![CellSpec::new(1, 2, 2)]);
        let board = layout.map(|l| Board::from_layout(&l));

        assert!(board.is_ok_and(|b| b.candidate_count() == 0 && !b.is_empty()));
    }
}
