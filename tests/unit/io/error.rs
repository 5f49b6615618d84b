//! Tests for error formatting, sources and helper constructors

#[cfg(test)]
mod tests {
    use gridshape::ShapeError;
    use gridshape::io::error::{file_system_error, invalid_parameter, io_error};
    use std::error::Error;

    // Tests capacity errors report the requested cell count
    // Verified by formatting width instead of the product
    #[test]
    fn test_capacity_display() {
        let err = ShapeError::CapacityExceeded {
            width: 20,
            height: 20,
            capacity: 256,
        };
        assert_eq!(
            err.to_string(),
            "Shape 20x20 needs 400 cells but capacity is 256"
        );
        assert!(err.source().is_none());
    }

    // Tests helper constructors fill the expected variants
    // Verified by swapping value and reason
    #[test]
    fn test_invalid_parameter() {
        let err = invalid_parameter("extrude-x", &300, &"too wide");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'extrude-x' = '300': too wide"
        );
        assert!(matches!(
            io_error("bad target"),
            ShapeError::InvalidParameter {
                parameter: "path",
                ..
            }
        ));
    }

    // Tests file system errors keep their path and source
    // Verified by returning None from source()
    #[test]
    fn test_file_system_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = file_system_error("shapes/a.txt", "read shape", io);
        assert!(err.to_string().contains("read shape"));
        assert!(err.to_string().contains("shapes/a.txt"));
        assert!(err.source().is_some());

        let converted = ShapeError::from(std::io::Error::other("boom"));
        assert!(matches!(
            converted,
            ShapeError::FileSystem {
                operation: "unknown",
                ..
            }
        ));
    }
}
