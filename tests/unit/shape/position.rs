//! Tests for cell coordinates and bounding rectangles

#[cfg(test)]
mod tests {
    use gridshape::{CellRect, GridPosition};

    // Tests component-wise min, max and offset
    // Verified by swapping min and max
    #[test]
    fn test_position_arithmetic() {
        let a = GridPosition::new(1, 5);
        let b = GridPosition::new(3, 2);
        assert_eq!(a.min(b), GridPosition::new(1, 2));
        assert_eq!(a.max(b), GridPosition::new(3, 5));
        assert_eq!(a.offset(-2, 1), GridPosition::new(-1, 6));
        assert_eq!(GridPosition::from((4, 7)), GridPosition::new(4, 7));
    }

    // Tests positions order by x, then by y
    // Verified by reordering struct fields
    #[test]
    fn test_position_ordering() {
        let mut positions = vec![
            GridPosition::new(2, 0),
            GridPosition::new(0, 1),
            GridPosition::new(0, 0),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                GridPosition::new(0, 0),
                GridPosition::new(0, 1),
                GridPosition::new(2, 0)
            ]
        );
    }

    // Tests rect growth, size and inclusive containment
    // Verified by making max exclusive
    #[test]
    fn test_rect_including_and_contains() {
        let rect = CellRect::from_position(GridPosition::new(2, 3));
        assert_eq!(rect.size(), [0, 0]);
        assert!(rect.contains(GridPosition::new(2, 3)));

        let grown = rect
            .including(GridPosition::new(5, 1))
            .including(GridPosition::new(3, 4));
        assert_eq!(grown.min, GridPosition::new(2, 1));
        assert_eq!(grown.max, GridPosition::new(5, 4));
        assert_eq!(grown.size(), [3, 3]);
        assert!(grown.contains(GridPosition::new(5, 4)));
        assert!(!grown.contains(GridPosition::new(6, 4)));
        assert!(!grown.contains(GridPosition::new(2, 0)));
    }

    // Tests display formatting
    // Verified by changing the separator
    #[test]
    fn test_display() {
        let rect = CellRect {
            min: GridPosition::new(0, 1),
            max: GridPosition::new(2, 3),
        };
        assert_eq!(GridPosition::new(-1, 4).to_string(), "(-1, 4)");
        assert_eq!(rect.to_string(), "(0, 1)..=(2, 3)");
    }
}
