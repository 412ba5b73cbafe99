use mosaic_core::error::MosaicError;
use mosaic_core::layout::{auto_columns, GridLayout};

#[test]
fn test_uniform_sizes_match_formula() {
    for &(w, h) in &[(1u32, 1u32), (10, 7), (64, 32)] {
        for n in 1..=7usize {
            for c in 1..=4u32 {
                for s in [0u32, 1, 5] {
                    let sizes = vec![(w, h); n];
                    let layout = GridLayout::from_sizes(&sizes, c, s).unwrap();
                    let rows = n.div_ceil(c as usize) as u32;
                    assert_eq!(layout.rows, rows);
                    assert_eq!(layout.total_width, (w + s) * c + s);
                    assert_eq!(layout.total_height, (h + s) * rows + s);
                }
            }
        }
    }
}

#[test]
fn test_cell_is_elementwise_max() {
    let layout = GridLayout::from_sizes(&[(10, 10), (20, 10), (10, 30)], 2, 5).unwrap();
    assert_eq!(layout.cell_width, 20);
    assert_eq!(layout.cell_height, 30);
    assert_eq!(layout.rows, 2);
    assert_eq!((layout.total_width, layout.total_height), (55, 75));
}

#[test]
fn test_slot_origins_fill_rows_first() {
    let layout = GridLayout::from_sizes(&[(10, 10), (20, 10), (10, 30)], 2, 5).unwrap();
    assert_eq!(layout.slot_origin(0), (5, 5));
    assert_eq!(layout.slot_origin(1), (30, 5));
    assert_eq!(layout.slot_origin(2), (5, 40));
    assert_eq!(layout.slot_origin(3), (30, 40));
    assert_eq!(layout.empty_slots(), 1);
}

#[test]
fn test_single_image_layout() {
    let layout = GridLayout::from_sizes(&[(8, 6)], 1, 5).unwrap();
    assert_eq!((layout.total_width, layout.total_height), (18, 16));
    assert_eq!(layout.slot_origin(0), (5, 5));
}

#[test]
fn test_more_columns_than_images() {
    let layout = GridLayout::from_sizes(&[(4, 4), (4, 4)], 5, 2).unwrap();
    assert_eq!(layout.rows, 1);
    assert_eq!(layout.total_width, (4 + 2) * 5 + 2);
    assert_eq!(layout.empty_slots(), 3);
}

#[test]
fn test_dimensions_grow_with_count_and_columns() {
    let two = GridLayout::from_sizes(&[(10, 10); 2], 1, 5).unwrap();
    let three = GridLayout::from_sizes(&[(10, 10); 3], 1, 5).unwrap();
    assert!(three.total_height > two.total_height);

    let narrow = GridLayout::from_sizes(&[(10, 10); 4], 1, 5).unwrap();
    let wide = GridLayout::from_sizes(&[(10, 10); 4], 2, 5).unwrap();
    assert!(wide.total_width > narrow.total_width);
}

#[test]
fn test_zero_columns_rejected() {
    let err = GridLayout::from_sizes(&[(10, 10)], 0, 5).unwrap_err();
    assert!(matches!(err, MosaicError::InvalidLayout(_)), "got: {err}");
}

#[test]
fn test_empty_input_rejected() {
    let err = GridLayout::from_sizes(&[], 1, 5).unwrap_err();
    assert!(matches!(err, MosaicError::InvalidLayout(_)), "got: {err}");
}

#[test]
fn test_overflowing_width_rejected() {
    let err = GridLayout::from_sizes(&[(u32::MAX / 2, 1); 3], 3, 5).unwrap_err();
    assert!(matches!(err, MosaicError::InvalidLayout(_)), "got: {err}");
}

#[test]
fn test_auto_columns() {
    assert_eq!(auto_columns(0), 1);
    assert_eq!(auto_columns(1), 1);
    assert_eq!(auto_columns(2), 1);
    assert_eq!(auto_columns(3), 2);
    assert_eq!(auto_columns(4), 2);
    assert_eq!(auto_columns(6), 2);
    assert_eq!(auto_columns(7), 3);
    assert_eq!(auto_columns(9), 3);
    assert_eq!(auto_columns(16), 4);
}
