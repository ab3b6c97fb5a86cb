use super::BitMap;

#[test]
fn size_for_rounds_up_to_whole_bytes() {
    assert_eq!(BitMap::size_for(0), 0);
    assert_eq!(BitMap::size_for(1), 1);
    assert_eq!(BitMap::size_for(8), 1);
    assert_eq!(BitMap::size_for(9), 2);
    assert_eq!(BitMap::size_for(1024), 128);
}

#[test]
fn new_bitmap_is_all_unmarked() {
    let bitmap = BitMap::new(20);
    assert_eq!(bitmap.len(), 20);
    assert!(bitmap.is_all_unmarked());
    assert!(!bitmap.is_all_marked());
    assert_eq!(bitmap.count_marked(), 0);
}

#[test]
fn mark_and_unmark_single_positions() {
    let mut bitmap = BitMap::new(16);

    assert!(bitmap.mark(0));
    assert!(bitmap.mark(7));
    assert!(bitmap.mark(8));
    assert!(bitmap.mark(15));
    assert_eq!(bitmap.as_bytes(), &[0b1000_0001, 0b1000_0001]);

    assert!(bitmap.unmark(7));
    assert!(bitmap.is_marked(0));
    assert!(!bitmap.is_marked(7));
    assert_eq!(bitmap.count_marked(), 3);
}

#[test]
fn out_of_range_positions_are_ignored() {
    let mut bitmap = BitMap::new(10);

    assert!(!bitmap.mark(10));
    assert!(!bitmap.unmark(10));
    assert!(!bitmap.is_marked(10));
    assert!(bitmap.is_all_unmarked());
}

#[test]
fn mark_all_only_covers_declared_size() {
    let mut bitmap = BitMap::new(10);
    bitmap.mark_all();

    assert!(bitmap.is_all_marked());
    assert_eq!(bitmap.count_marked(), 10);
    assert_eq!(bitmap.as_bytes(), &[0xFF, 0b0000_0011]);

    bitmap.unmark(3);
    assert!(!bitmap.is_all_marked());
    assert!(!bitmap.is_all_unmarked());
}

#[test]
fn reset_clears_every_bit() {
    let mut bitmap = BitMap::new(12);
    bitmap.mark_all();
    bitmap.reset();

    assert!(bitmap.is_all_unmarked());
    for i in 0..12 {
        assert!(!bitmap.is_marked(i));
    }
}

#[test]
fn empty_bitmap_is_both_all_marked_and_unmarked() {
    let mut bitmap = BitMap::new(0);
    bitmap.mark_all();

    assert!(bitmap.is_empty());
    assert!(bitmap.is_all_marked());
    assert!(bitmap.is_all_unmarked());
}
