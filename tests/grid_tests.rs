use letter_mash::alphabet::is_valid_letter;
use letter_mash::{Grid, GridError, Letter, Position, ALPHABET, ALPHABET_SIZE, MAX_CELLS};

const SCENARIO_GRID: &str = "ا ب ر ظ ظ ظ ظ ظ ظ ظ ظ ظ ظ پ د ر";

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

#[test]
fn test_alphabet_letters() {
    assert_eq!(ALPHABET.len(), ALPHABET_SIZE);
    for (i, &c) in ALPHABET.iter().enumerate() {
        let letter = Letter::new(c).unwrap();
        assert_eq!(letter.index(), i);
        assert_eq!(letter.as_char(), c);
        assert!(is_valid_letter(c));
    }
}

#[test]
fn test_alphabet_rejects_outsiders() {
    for c in ['e', 'A', '1', ' ', 'آ', 'ء', 'ي', 'ك'] {
        assert!(Letter::new(c).is_none(), "{:?} should be rejected", c);
        assert!(!is_valid_letter(c));
    }
    assert!(Letter::parse("").is_none());
    assert!(Letter::parse("اب").is_none());
    assert_eq!(Letter::parse("پ").map(|l| l.as_char()), Some('پ'));
}

#[test]
fn test_parse_fills_row_major() {
    let grid = Grid::parse(SCENARIO_GRID).unwrap();
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 4);
    assert_eq!(grid.cell_count(), 16);
    assert_eq!(grid.at(pos(0, 0)).as_char(), 'ا');
    assert_eq!(grid.at(pos(0, 2)).as_char(), 'ر');
    assert_eq!(grid.at(pos(3, 0)).as_char(), 'ظ');
    assert_eq!(grid.at(pos(3, 1)).as_char(), 'پ');
    assert_eq!(grid.at(pos(3, 3)).as_char(), 'ر');
}

#[test]
fn test_parse_accepts_any_whitespace() {
    let spaced = Grid::parse(SCENARIO_GRID).unwrap();
    let messy = Grid::parse("  ا ب\tر ظ\nظ ظ ظ ظ  ظ ظ ظ ظ\nظ پ د ر  ").unwrap();
    assert_eq!(spaced, messy);
}

#[test]
fn test_five_letters_rejected() {
    let err = Grid::from_letters(["س", "ل", "ف", "ب", "ر"], 4, 4).unwrap_err();
    assert_eq!(err, GridError::LetterCount { expected: 16, found: 5 });
    assert!(err.to_string().contains("Exactly 16 letters required"));

    let err = Grid::parse("س ل ف ب ر").unwrap_err();
    assert_eq!(err, GridError::LetterCount { expected: 16, found: 5 });
}

#[test]
fn test_invalid_letter_rejected() {
    let err = Grid::parse("س ل ف ب ر e ب ف غ ا ذ د ت ا د ب").unwrap_err();
    assert_eq!(err, GridError::InvalidLetter("e".to_string()));
    assert!(err.to_string().contains("Invalid Persian letter: e"));
}

#[test]
fn test_multi_character_token_rejected() {
    let err = Grid::parse("اب ب ر ظ ظ ظ ظ ظ ظ ظ ظ ظ ظ پ د ر").unwrap_err();
    assert_eq!(err, GridError::InvalidLetter("اب".to_string()));
}

#[test]
fn test_blank_input_rejected() {
    for input in ["", " ", "\n\t"] {
        let err = Grid::parse(input).unwrap_err();
        assert_eq!(err, GridError::Empty);
        assert!(err.to_string().contains("Input cannot be empty"));
    }
}

#[test]
fn test_too_large_rejected() {
    let letters = vec!["ظ"; 81];
    let err = Grid::from_letters(letters, 9, 9).unwrap_err();
    assert_eq!(err, GridError::TooLarge { rows: 9, cols: 9, max: MAX_CELLS });
}

#[test]
fn test_custom_dimensions() {
    let grid = Grid::parse_with_dimensions("ا ب ر پ د ر", 2, 3).unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.at(pos(1, 0)).as_char(), 'پ');
    assert_eq!(grid.to_string(), "ا ب ر\nپ د ر");
}

#[test]
fn test_get_and_contains() {
    let grid = Grid::parse(SCENARIO_GRID).unwrap();
    assert!(grid.contains(pos(3, 3)));
    assert!(!grid.contains(pos(4, 0)));
    assert!(!grid.contains(pos(0, 4)));
    assert_eq!(grid.get(pos(0, 1)).map(|l| l.as_char()), Some('ب'));
    assert_eq!(grid.get(pos(4, 4)), None);
}

#[test]
fn test_corner_neighbors() {
    let grid = Grid::parse(SCENARIO_GRID).unwrap();
    let neighbors: Vec<_> = grid.neighbors(pos(0, 0)).collect();
    assert_eq!(neighbors, vec![pos(1, 0), pos(0, 1), pos(1, 1)]);

    let neighbors: Vec<_> = grid.neighbors(pos(3, 3)).collect();
    assert_eq!(neighbors, vec![pos(2, 3), pos(3, 2), pos(2, 2)]);
}

#[test]
fn test_center_neighbors_in_direction_order() {
    let grid = Grid::parse(SCENARIO_GRID).unwrap();
    let neighbors: Vec<_> = grid.neighbors(pos(1, 1)).collect();
    assert_eq!(
        neighbors,
        vec![
            pos(0, 1),
            pos(2, 1),
            pos(1, 0),
            pos(1, 2),
            pos(0, 0),
            pos(0, 2),
            pos(2, 0),
            pos(2, 2),
        ]
    );
    assert!(neighbors.iter().all(|&n| pos(1, 1).is_adjacent(n)));
}

#[test]
fn test_position_of_cell_number() {
    let grid = Grid::parse(SCENARIO_GRID).unwrap();
    assert_eq!(grid.position_of(1), Some(pos(0, 0)));
    assert_eq!(grid.position_of(4), Some(pos(0, 3)));
    assert_eq!(grid.position_of(5), Some(pos(1, 0)));
    assert_eq!(grid.position_of(14), Some(pos(3, 1)));
    assert_eq!(grid.position_of(16), Some(pos(3, 3)));
    assert_eq!(grid.position_of(0), None);
    assert_eq!(grid.position_of(17), None);
}

#[test]
fn test_positions_row_major() {
    let grid = Grid::parse_with_dimensions("ا ب ر پ د ر", 2, 3).unwrap();
    let positions: Vec<_> = grid.positions().collect();
    assert_eq!(
        positions,
        vec![pos(0, 0), pos(0, 1), pos(0, 2), pos(1, 0), pos(1, 1), pos(1, 2)]
    );
}

#[test]
fn test_adjacency() {
    assert!(pos(0, 0).is_adjacent(pos(1, 1)));
    assert!(pos(2, 2).is_adjacent(pos(1, 2)));
    assert!(!pos(0, 0).is_adjacent(pos(0, 0)));
    assert!(!pos(0, 0).is_adjacent(pos(0, 2)));
    assert!(!pos(3, 3).is_adjacent(pos(1, 1)));
}
