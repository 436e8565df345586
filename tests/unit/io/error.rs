//! Tests for error formatting and conversions

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;

    use knotwork::KnotError;
    use knotwork::io::error::{invalid_composition, invalid_parameter};
    use knotwork::spatial::coordinate::Orientation;

    // Tests the block error names the lane and range
    // Verified by omitting the range from the message
    #[test]
    fn test_invalid_block_display() {
        let error = KnotError::InvalidBlock {
            orientation: Orientation::Vertical,
            lane: 1,
            start: 1,
            end: 4,
            reason: "mixed endpoints".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid vertical block on lane 1 spanning 1..=4: mixed endpoints"
        );
        assert!(error.source().is_none());
    }

    // Tests out-of-bounds errors report the coordinate and grid size
    // Verified by swapping column and row in the message
    #[test]
    fn test_out_of_bounds_display() {
        let error = KnotError::OutOfBounds {
            coordinate: [7, 2],
            dimensions: (5, 5),
        };
        assert_eq!(error.to_string(), "Coordinate (7, 2) is outside the 5x5 grid");
    }

    // Tests the helper constructors fill every field
    // Verified by dropping the value from invalid_parameter
    #[test]
    fn test_helpers() {
        match invalid_parameter("rows", &0, &"too small") {
            KnotError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(parameter, "rows");
                assert_eq!(value, "0");
                assert_eq!(reason, "too small");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let error = invalid_composition(&"heights differ");
        assert_eq!(
            error.to_string(),
            "Invalid pattern composition: heights differ"
        );
    }

    // Tests I/O failures convert and keep their source
    // Verified by returning None from source()
    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = KnotError::from(io);
        assert!(matches!(error, KnotError::FileSystem { .. }));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("denied"));
    }

    // Tests image failures convert into export errors with a path
    // Verified by converting image errors into file system errors
    #[test]
    fn test_image_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = KnotError::ImageExport {
            path: PathBuf::from("out/plain_knot.png"),
            source: image::ImageError::IoError(io),
        };
        assert!(
            error
                .to_string()
                .starts_with("Failed to export image to 'out/plain_knot.png'")
        );
        assert!(error.source().is_some());

        let converted = KnotError::from(image::ImageError::IoError(std::io::Error::other("x")));
        assert!(matches!(converted, KnotError::ImageExport { .. }));
    }
}
