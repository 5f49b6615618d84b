//! Tests for fixed-capacity cell storage

#[cfg(test)]
mod tests {
    use gridshape::io::configuration::CELL_CAPACITY;
    use gridshape::shape::bitmask::CellBits;

    // Verifies new storage is cleared and all() is fully set
    // Verified by swapping the initial fill values
    #[test]
    fn test_new_and_all() {
        let cleared = CellBits::new();
        let full = CellBits::all();
        assert_eq!(cleared.count_ones(CELL_CAPACITY), 0);
        assert_eq!(full.count_ones(CELL_CAPACITY), CELL_CAPACITY);
        assert_eq!(full.words(), [u64::MAX; 4]);
    }

    // Tests reads and writes at the capacity boundary
    // Verified by removing the capacity guard in set
    #[test]
    fn test_capacity_boundary() {
        let mut bits = CellBits::new();
        bits.set(CELL_CAPACITY - 1, true);
        assert!(bits.get(CELL_CAPACITY - 1));

        bits.set(CELL_CAPACITY, true);
        bits.set(usize::MAX, true);
        assert!(!bits.get(CELL_CAPACITY));
        assert!(!bits.get(usize::MAX));
        assert_eq!(bits.count_ones(CELL_CAPACITY), 1);
    }

    // Tests toggling flips and reports the new value
    // Verified by returning the old value instead
    #[test]
    fn test_toggle() {
        let mut bits = CellBits::new();
        assert!(bits.toggle(7));
        assert!(bits.get(7));
        assert!(!bits.toggle(7));
        assert!(!bits.get(7));
        assert!(!bits.toggle(CELL_CAPACITY));
    }

    // Tests word layout puts index 0 in the lowest bit of the first word
    // Verified by switching bit order to Msb0
    #[test]
    fn test_word_layout() {
        let bits = CellBits::from_words([0b101, 0, 0, 1]);
        assert!(bits.get(0));
        assert!(!bits.get(1));
        assert!(bits.get(2));
        assert!(bits.get(192));
        assert_eq!(bits.iter_ones(CELL_CAPACITY).collect::<Vec<_>>(), vec![0, 2, 192]);
    }

    // Tests prefix-limited counting, iteration and masking
    // Verified by ignoring the len argument
    #[test]
    fn test_prefix_queries() {
        let bits = CellBits::all();
        assert_eq!(bits.count_ones(4), 4);
        assert_eq!(bits.iter_ones(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(bits.masked_words(4), [0b1111, 0, 0, 0]);
        assert_eq!(bits.masked_words(64), [u64::MAX, 0, 0, 0]);
        assert_eq!(bits.masked_words(CELL_CAPACITY * 2), [u64::MAX; 4]);
        assert_eq!(bits.count_ones(0), 0);
    }
}
