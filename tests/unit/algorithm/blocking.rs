//! Tests for the blocking index

#[cfg(test)]
mod tests {
    use knotwork::KnotError;
    use knotwork::algorithm::blocking::{BlockingIndex, LaneRange};
    use knotwork::spatial::block::Block;
    use knotwork::spatial::coordinate::{Coordinate, Orientation};
    use knotwork::spatial::grid::KnotGrid;
    use knotwork::spatial::pattern::Pattern;

    fn index_for(patterns: Vec<Pattern>) -> BlockingIndex {
        BlockingIndex::build(&KnotGrid::new(patterns).unwrap()).unwrap()
    }

    // Tests the border lanes are blocked on an otherwise empty grid
    // Verified by skipping the left border range
    #[test]
    fn test_border_is_blocked() {
        let index = index_for(vec![Pattern::new(5, 5)]);

        assert!(index.is_blocked(Coordinate::new(0, 2), None));
        assert!(!index.is_blocked(Coordinate::new(2, 2), None));

        assert!(index.is_blocked(Coordinate::new(0, 2), Some(Orientation::Vertical)));
        assert!(!index.is_blocked(Coordinate::new(0, 2), Some(Orientation::Horizontal)));
        assert!(index.is_blocked(Coordinate::new(3, 4), Some(Orientation::Horizontal)));
        assert!(index.is_blocked(Coordinate::new(4, 1), Some(Orientation::Vertical)));
        assert_eq!(index.range_count(), 4);
    }

    // Tests the four border ranges span the full composite extent
    // Verified by spanning a single pattern's width
    #[test]
    fn test_border_ranges_span_composite() {
        let index = index_for(vec![Pattern::new(4, 5), Pattern::new(5, 5)]);
        let ranges: Vec<LaneRange> = index.ranges().collect();

        assert_eq!(
            ranges,
            vec![
                LaneRange {
                    orientation: Orientation::Horizontal,
                    lane: 0,
                    start: 0,
                    end: 8
                },
                LaneRange {
                    orientation: Orientation::Horizontal,
                    lane: 4,
                    start: 0,
                    end: 8
                },
                LaneRange {
                    orientation: Orientation::Vertical,
                    lane: 0,
                    start: 0,
                    end: 4
                },
                LaneRange {
                    orientation: Orientation::Vertical,
                    lane: 8,
                    start: 0,
                    end: 4
                },
            ]
        );
    }

    // Tests pattern blocks are placed at their pattern's horizontal offset
    // Verified by inserting blocks in pattern-local coordinates
    #[test]
    fn test_blocks_are_offset_by_pattern_position() {
        let walled = Pattern::with_blocks(4, 5, [Block::vertical(2, 0, 4).unwrap()]).unwrap();
        let index = index_for(vec![Pattern::new(4, 5), walled]);

        assert!(index.is_blocked(Coordinate::new(6, 1), Some(Orientation::Vertical)));
        assert!(index.is_blocked(Coordinate::new(6, 3), None));
        assert!(!index.is_blocked(Coordinate::new(2, 1), None));
        assert_eq!(
            index.lanes(Orientation::Vertical).get(&6),
            Some(&vec![(0, 4)])
        );
    }

    // Tests an odd pattern offset that moves anchors onto strand nodes fails
    // Verified by inserting the offset range without validation
    #[test]
    fn test_odd_offset_fails() {
        let walled = Pattern::with_blocks(4, 5, [Block::vertical(2, 0, 4).unwrap()]).unwrap();
        let grid = KnotGrid::new(vec![Pattern::new(3, 5), walled]).unwrap();
        assert!(matches!(
            BlockingIndex::build(&grid),
            Err(KnotError::InvalidBlock { .. })
        ));
    }

    // Tests overlapping ranges on one lane are each honoured
    // Verified by keeping only the last range per lane
    #[test]
    fn test_overlapping_ranges_are_honoured() {
        let pattern = Pattern::with_blocks(
            9,
            9,
            [
                Block::horizontal(2, 0, 4).unwrap(),
                Block::horizontal(2, 2, 6).unwrap(),
            ],
        )
        .unwrap();
        let index = index_for(vec![pattern]);

        let row = Some(Orientation::Horizontal);
        assert!(index.is_blocked(Coordinate::new(1, 2), row));
        assert!(index.is_blocked(Coordinate::new(5, 2), row));
        assert!(!index.is_blocked(Coordinate::new(7, 2), row));
        assert_eq!(
            index.lanes(Orientation::Horizontal).get(&2),
            Some(&vec![(0, 4), (2, 6)])
        );
        assert_eq!(index.range_count(), 6);
    }

    // Tests ranges are inclusive at both endpoints
    // Verified by using an exclusive upper bound in the lookup
    #[test]
    fn test_ranges_are_inclusive() {
        let pattern = Pattern::with_blocks(9, 9, [Block::vertical(4, 2, 6).unwrap()]).unwrap();
        let index = index_for(vec![pattern]);
        let column = Some(Orientation::Vertical);

        assert!(!index.is_blocked(Coordinate::new(4, 1), column));
        assert!(index.is_blocked(Coordinate::new(4, 2), column));
        assert!(index.is_blocked(Coordinate::new(4, 6), column));
        assert!(!index.is_blocked(Coordinate::new(4, 7), column));
    }

    // Tests lane range endpoints follow the lane's axis
    // Verified by swapping the endpoint arms
    #[test]
    fn test_lane_range_endpoints() {
        let range = LaneRange {
            orientation: Orientation::Vertical,
            lane: 4,
            start: 2,
            end: 6,
        };
        assert_eq!(
            range.endpoints(),
            (Coordinate::new(4, 2), Coordinate::new(4, 6))
        );
    }
}
