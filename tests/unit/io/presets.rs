//! Tests for the built-in preset layouts

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use knotwork::KnotError;
    use knotwork::algorithm::layout::KnotLayout;
    use knotwork::algorithm::segments::NodeBehavior;
    use knotwork::io::configuration::KnotParams;
    use knotwork::io::presets::Preset;
    use knotwork::spatial::coordinate::Coordinate;

    // Tests every preset composes into a valid layout of the expected size
    // Verified by tiling the band with an odd-width tile
    #[test]
    fn test_preset_dimensions() {
        let params = KnotParams { rows: 3, cols: 4 };
        let expected = [
            (Preset::Plain, (7, 5)),
            (Preset::Inset, (13, 9)),
            (Preset::Corners, (9, 9)),
            (Preset::Band, (25, 9)),
            (Preset::Frame, (17, 9)),
        ];

        for (preset, size) in expected {
            let layout = KnotLayout::new(preset.build(&params).unwrap()).unwrap();
            assert_eq!(
                (layout.composite_width(), layout.composite_height()),
                size,
                "{}",
                preset.name()
            );
        }
    }

    // Tests preset names are distinct and cover every preset
    // Verified by giving two presets the same name
    #[test]
    fn test_preset_names() {
        let names: HashSet<&str> = Preset::ALL.iter().map(|preset| preset.name()).collect();
        assert_eq!(names.len(), Preset::ALL.len());
        assert!(names.contains("band"));
    }

    // Tests the inset walls land where they were authored
    // Verified by authoring the inset on odd lanes
    #[test]
    fn test_inset_walls() {
        let layout = KnotLayout::new(Preset::Inset.build(&KnotParams::default()).unwrap()).unwrap();
        assert_eq!(
            layout.node_behavior(Coordinate::new(4, 3)).unwrap(),
            NodeBehavior::VerticalWall
        );
        assert_eq!(
            layout.node_behavior(Coordinate::new(5, 2)).unwrap(),
            NodeBehavior::HorizontalWall
        );
        assert!(matches!(
            layout.node_behavior(Coordinate::new(1, 4)).unwrap(),
            NodeBehavior::Crossing(_)
        ));
    }

    // Tests the mirrored corners are symmetric about both centre lines
    // Verified by mirroring only horizontally
    #[test]
    fn test_corners_symmetry() {
        let layout =
            KnotLayout::new(Preset::Corners.build(&KnotParams::default()).unwrap()).unwrap();
        for row in 0..9 {
            for col in 0..9 {
                let blocked = layout.is_blocked(Coordinate::new(col, row), None).unwrap();
                let mirrored = layout
                    .is_blocked(Coordinate::new(8 - col, row), None)
                    .unwrap();
                let flipped = layout
                    .is_blocked(Coordinate::new(col, 8 - row), None)
                    .unwrap();
                assert_eq!(blocked, mirrored);
                assert_eq!(blocked, flipped);
            }
        }
    }

    // Tests the band repeats its cross at every tile offset
    // Verified by repeating without offsets
    #[test]
    fn test_band_repeats_cross() {
        let grid = Preset::Band.build(&KnotParams::default()).unwrap();
        assert_eq!(grid.pattern_offsets(), vec![0, 8, 16, 24]);

        let layout = KnotLayout::new(grid).unwrap();
        for offset in [0, 8, 16] {
            assert_eq!(
                layout.node_behavior(Coordinate::new(offset + 4, 3)).unwrap(),
                NodeBehavior::VerticalWall
            );
        }
    }

    // Tests an oversized plain knot is a parameter error rather than a panic
    // Verified by sizing the grid with unchecked doubling
    #[test]
    fn test_plain_with_huge_cols_fails() {
        let params = KnotParams {
            rows: 2,
            cols: usize::MAX,
        };
        assert!(matches!(
            Preset::Plain.build(&params),
            Err(KnotError::InvalidParameter { .. })
        ));
    }
}
