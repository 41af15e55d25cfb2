#![allow(missing_docs)]
//! Host-level tests for mapping primitives and the board's 5×5 wiring.

use digit_panel::Error;
use digit_panel::led2d::layout::LedLayout;
use digit_panel::led2d::{LED_LAYOUT_5X5, PANEL_LEN, PANEL_SIDE};

// Chain index of every cell, indexed [row][col].
const EXPECTED_5X5: [[usize; 5]; 5] = [
    [24, 23, 22, 21, 20],
    [15, 16, 17, 18, 19],
    [14, 13, 12, 11, 10],
    [5, 6, 7, 8, 9],
    [4, 3, 2, 1, 0],
];

#[test]
fn board_layout_matches_wiring_table() {
    for (row, expected_row) in EXPECTED_5X5.iter().enumerate() {
        for (col, expected) in expected_row.iter().enumerate() {
            assert_eq!(
                LED_LAYOUT_5X5.index(row, col),
                *expected,
                "row {row}, col {col}"
            );
        }
    }
}

#[test]
fn board_layout_corners() {
    assert_eq!(LED_LAYOUT_5X5.index(0, 0), 24);
    assert_eq!(LED_LAYOUT_5X5.index(0, 4), 20);
    assert_eq!(LED_LAYOUT_5X5.index(4, 0), 4);
    assert_eq!(LED_LAYOUT_5X5.index(4, 4), 0);
}

#[test]
fn board_layout_is_a_bijection() {
    let mut seen = [false; PANEL_LEN];
    for row in 0..PANEL_SIDE {
        for col in 0..PANEL_SIDE {
            let index = LED_LAYOUT_5X5.index(row, col);
            assert!(index < PANEL_LEN);
            assert!(!seen[index], "index {index} reached twice");
            seen[index] = true;
        }
    }
    assert!(seen.iter().all(|reached| *reached));
}

#[test]
fn board_layout_inverse_agrees_with_index() {
    for (index, (col, row)) in LED_LAYOUT_5X5.index_to_xy().iter().enumerate() {
        assert_eq!(
            LED_LAYOUT_5X5.index(usize::from(*row), usize::from(*col)),
            index
        );
    }
}

#[test]
fn board_layout_dimensions() {
    assert_eq!(LED_LAYOUT_5X5.width(), 5);
    assert_eq!(LED_LAYOUT_5X5.height(), 5);
    assert_eq!(LED_LAYOUT_5X5.len(), 25);
}

#[test]
fn try_index_rejects_positions_off_the_panel() {
    assert_eq!(LED_LAYOUT_5X5.try_index(2, 3).ok(), Some(11));
    assert!(matches!(
        LED_LAYOUT_5X5.try_index(5, 0),
        Err(Error::PositionOutOfBounds {
            row: 5,
            col: 0,
            width: 5,
            height: 5
        })
    ));
    assert!(matches!(
        LED_LAYOUT_5X5.try_index(0, 7),
        Err(Error::PositionOutOfBounds { col: 7, .. })
    ));
}

#[test]
#[should_panic(expected = "row out of bounds")]
fn index_panics_on_row_out_of_bounds() {
    let _ = LED_LAYOUT_5X5.index(5, 0);
}

#[test]
#[should_panic(expected = "column out of bounds")]
fn index_panics_on_column_out_of_bounds() {
    let _ = LED_LAYOUT_5X5.index(0, 5);
}

#[test]
fn linear_row_major_3x2_matches_expected() {
    const MAP: LedLayout<6, 3, 2> =
        LedLayout::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(
        *MAP.index_to_xy(),
        [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1),]
    );
    assert_eq!(MAP.index(1, 2), 5);
}

#[test]
fn serpentine_row_major_3x2_matches_expected() {
    const SERPENTINE: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    assert_eq!(
        *SERPENTINE.index_to_xy(),
        [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1),]
    );
}

#[test]
fn rotate_180_reverses_both_axes() {
    const SERPENTINE: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    let rotated = SERPENTINE.rotate_180();
    assert_eq!(
        *rotated.index_to_xy(),
        [(2, 1), (1, 1), (0, 1), (0, 0), (1, 0), (2, 0),]
    );
    assert!(rotated.rotate_180().equals(&SERPENTINE));
}

#[test]
fn serpentine_row_major_rotated_is_board_layout() {
    const BOARD: LedLayout<25, 5, 5> = LedLayout::serpentine_row_major().rotate_180();
    assert!(BOARD.equals(&LED_LAYOUT_5X5));
    assert!(!LedLayout::<25, 5, 5>::serpentine_row_major().equals(&LED_LAYOUT_5X5));
}

#[test]
#[should_panic(expected = "duplicate (col,row) in mapping")]
fn new_panics_on_duplicate_cell() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (1, 0)]);
}

#[test]
#[should_panic(expected = "column out of bounds")]
fn new_panics_on_out_of_bounds_column() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (3, 0)]);
}

#[test]
#[should_panic(expected = "W*H must equal N")]
fn new_panics_on_mismatched_dimensions() {
    let _ = LedLayout::<5, 3, 2>::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
}
