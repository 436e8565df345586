//! Tests for block validation and geometric transforms

#[cfg(test)]
mod tests {
    use knotwork::KnotError;
    use knotwork::spatial::block::Block;
    use knotwork::spatial::coordinate::{Coordinate, NodeKind, Orientation};

    // Tests a vertical block between two secondary anchors is accepted
    // Verified by rejecting secondary endpoints
    #[test]
    fn test_block_between_secondary_anchors() {
        let block = Block::vertical(1, 1, 3).unwrap();
        assert_eq!(block.orientation(), Orientation::Vertical);
        assert_eq!(block.lane(), 1);
        assert_eq!(block.range(), (1, 3));
        assert_eq!(block.kind(), NodeKind::Secondary);
    }

    // Tests blocks ending on a strand node are rejected
    // Verified by skipping the Line check in validation
    #[test]
    fn test_block_ending_on_strand_node_fails() {
        let result = Block::vertical(1, 1, 4);
        assert!(matches!(result, Err(KnotError::InvalidBlock { .. })));

        let result = Block::horizontal(0, 0, 3);
        assert!(matches!(result, Err(KnotError::InvalidBlock { .. })));

        let result = Block::vertical(2, 0, 3);
        assert!(matches!(result, Err(KnotError::InvalidBlock { .. })));
    }

    // Tests negative lanes and extents are rejected
    // Verified by removing the negative check
    #[test]
    fn test_negative_block_fails() {
        assert!(matches!(
            Block::vertical(-2, 0, 2),
            Err(KnotError::InvalidBlock { .. })
        ));
        assert!(matches!(
            Block::horizontal(2, -2, 2),
            Err(KnotError::InvalidBlock { .. })
        ));
    }

    // Tests a reversed block keeps its authored direction and an ascending range
    // Verified by sorting the endpoints on construction
    #[test]
    fn test_reversed_block_keeps_direction() {
        let block = Block::horizontal(2, 6, 2).unwrap();
        assert_eq!((block.start(), block.end()), (6, 2));
        assert_eq!(block.range(), (2, 6));
        assert!(block.covers(Coordinate::new(4, 2)));
        assert!(block.same_span(&Block::horizontal(2, 2, 6).unwrap()));
        assert_ne!(block, Block::horizontal(2, 2, 6).unwrap());
    }

    // Tests endpoints map lane and range onto the correct axes
    // Verified by swapping the horizontal endpoint construction
    #[test]
    fn test_endpoints() {
        let horizontal = Block::horizontal(4, 2, 6).unwrap();
        assert_eq!(
            horizontal.endpoints(),
            (Coordinate::new(2, 4), Coordinate::new(6, 4))
        );

        let vertical = Block::vertical(4, 2, 6).unwrap();
        assert_eq!(
            vertical.endpoints(),
            (Coordinate::new(4, 2), Coordinate::new(4, 6))
        );
    }

    // Tests the string form used for golden comparisons
    // Verified by printing the lane instead of endpoint coordinates
    #[test]
    fn test_block_display() {
        let block = Block::vertical(1, 1, 3).unwrap();
        assert_eq!(block.to_string(), "<(1,1) -> (1,3)>");

        let block = Block::horizontal(2, 0, 4).unwrap();
        assert_eq!(block.to_string(), "<(0,2) -> (4,2)>");

        let block = Block::horizontal(0, 4, 0).unwrap();
        assert_eq!(block.to_string(), "<(4,0) -> (0,0)>");
    }

    // Tests coverage is inclusive at both endpoints and limited to the lane
    // Verified by using an exclusive end bound
    #[test]
    fn test_covers() {
        let block = Block::vertical(2, 2, 6).unwrap();
        assert!(block.covers(Coordinate::new(2, 2)));
        assert!(block.covers(Coordinate::new(2, 6)));
        assert!(block.covers(Coordinate::new(2, 3)));
        assert!(!block.covers(Coordinate::new(2, 7)));
        assert!(!block.covers(Coordinate::new(3, 4)));
    }

    // Tests inversion across the block's axis reflects the lane only
    // Verified by reflecting the range as well
    #[test]
    fn test_invert_across_axis_moves_lane() {
        let block = Block::vertical(1, 1, 3).unwrap();
        let inverted = block.invert(6, Orientation::Horizontal).unwrap();
        assert_eq!(inverted.orientation(), Orientation::Vertical);
        assert_eq!(inverted.lane(), 5);
        assert_eq!(inverted.range(), (1, 3));
    }

    // Tests inversion along the block's axis reflects each endpoint and reverses it
    // Verified by reflecting the lane instead
    #[test]
    fn test_invert_along_axis_moves_range() {
        let block = Block::horizontal(2, 0, 2).unwrap();
        let inverted = block.invert(8, Orientation::Horizontal).unwrap();
        assert_eq!(inverted.lane(), 2);
        assert_eq!(inverted.range(), (6, 8));
        assert_eq!((inverted.start(), inverted.end()), (8, 6));

        let inverted = Block::horizontal(0, 0, 2)
            .unwrap()
            .invert(6, Orientation::Horizontal)
            .unwrap();
        assert_eq!(inverted.to_string(), "<(6,0) -> (4,0)>");
    }

    // Tests an inversion onto strand nodes fails instead of storing bad geometry
    // Verified by constructing the inverted block without validation
    #[test]
    fn test_invert_with_odd_pivot_fails() {
        let block = Block::vertical(2, 0, 2).unwrap();
        assert!(matches!(
            block.invert(5, Orientation::Horizontal),
            Err(KnotError::InvalidBlock { .. })
        ));
    }

    // Tests offsets shift the range along the block's axis and the lane across it
    // Verified by swapping the offset arms
    #[test]
    fn test_offset() {
        let block = Block::horizontal(2, 0, 4).unwrap();

        let along = block.offset(4, Orientation::Horizontal).unwrap();
        assert_eq!((along.lane(), along.range()), (2, (4, 8)));

        let across = block.offset(2, Orientation::Vertical).unwrap();
        assert_eq!((across.lane(), across.range()), (4, (0, 4)));

        assert!(block.offset(1, Orientation::Vertical).is_err());
    }

    // Tests repeat produces evenly strided copies starting at the source block
    // Verified by starting the stride at one
    #[test]
    fn test_repeat() {
        let block = Block::vertical(0, 0, 2).unwrap();
        let copies = block.repeat(3, 4, Orientation::Horizontal).unwrap();
        let lanes: Vec<i32> = copies.iter().map(Block::lane).collect();
        assert_eq!(lanes, vec![0, 4, 8]);
        assert!(copies.iter().all(|copy| copy.range() == (0, 2)));

        assert!(block.repeat(0, 4, Orientation::Horizontal).unwrap().is_empty());
        assert!(block.repeat(2, 3, Orientation::Horizontal).is_err());
    }

    // Tests transforms that leave the i32 range fail instead of wrapping
    // Verified by using unchecked addition, subtraction and multiplication
    #[test]
    fn test_transform_overflow_fails() {
        let block = Block::horizontal(2, 0, 2).unwrap();
        assert!(matches!(
            block.offset(i32::MAX - 1, Orientation::Horizontal),
            Err(KnotError::InvalidBlock { .. })
        ));
        assert!(matches!(
            block.offset(i32::MAX - 1, Orientation::Vertical),
            Err(KnotError::InvalidBlock { .. })
        ));
        assert!(matches!(
            block.invert(i32::MIN, Orientation::Horizontal),
            Err(KnotError::InvalidBlock { .. })
        ));
        assert!(matches!(
            block.repeat(3, i32::MAX / 2 + 1, Orientation::Vertical),
            Err(KnotError::InvalidBlock { .. })
        ));
    }

    // Tests fold transposes orientation and keeps the numbers
    // Verified by keeping the orientation
    #[test]
    fn test_fold_transposes() {
        let block = Block::vertical(2, 2, 4).unwrap();
        let folded = block.fold().unwrap();
        assert_eq!(folded.orientation(), Orientation::Horizontal);
        assert_eq!(folded.lane(), 2);
        assert_eq!(folded.range(), (2, 4));
        assert_eq!(folded.fold().unwrap(), block);
    }
}
