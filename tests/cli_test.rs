use std::io::{Cursor, ErrorKind};

use seabattle::cli::{parse_coordinate, render_board, InputError, LineInput};
use seabattle::{Board, Coordinate, CoordinateSource, Orientation, Ship};

#[test]
fn test_parse_coordinate_one_based() {
    assert_eq!(parse_coordinate("2 3", 6), Ok(Coordinate::new(1, 2)));
    assert_eq!(parse_coordinate("  6\t6 \n", 6), Ok(Coordinate::new(5, 5)));
}

#[test]
fn test_parse_coordinate_rejections() {
    assert_eq!(parse_coordinate("2", 6), Err(InputError::WrongCount));
    assert_eq!(parse_coordinate("1 2 3", 6), Err(InputError::WrongCount));
    assert_eq!(parse_coordinate("", 6), Err(InputError::WrongCount));
    assert_eq!(parse_coordinate("a 3", 6), Err(InputError::RowNotNumber));
    assert_eq!(parse_coordinate("-1 3", 6), Err(InputError::RowNotNumber));
    assert_eq!(parse_coordinate("2 b", 6), Err(InputError::ColNotNumber));
    assert_eq!(parse_coordinate("0 3", 6), Err(InputError::OutOfRange(6)));
    assert_eq!(parse_coordinate("7 1", 6), Err(InputError::OutOfRange(6)));
}

#[test]
fn test_line_input_reprompts_until_valid() {
    let input = Cursor::new(b"foo\nx 1\n3 4\n".to_vec());
    let mut source = LineInput::new(input, Vec::new());
    assert_eq!(source.collect_coordinate(6).unwrap(), Coordinate::new(2, 3));

    let (_, output) = source.into_inner();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("You moving: ").count(), 3);
    assert!(text.contains("Enter 2 coordinates!"));
    assert!(text.contains("X must be a number!"));
}

#[test]
fn test_line_input_eof_is_an_error() {
    let mut source = LineInput::new(Cursor::new(Vec::new()), Vec::new());
    let err = source.collect_coordinate(6).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn test_line_input_report() {
    let mut source = LineInput::new(Cursor::new(Vec::new()), Vec::new());
    source.report("Hit!");
    let (_, output) = source.into_inner();
    assert_eq!(String::from_utf8(output).unwrap(), "Hit!\n");
}

#[test]
fn test_render_board() {
    let mut board = Board::new(6);
    board
        .place_ship(Ship::new(Coordinate::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.begin_play();

    let text = render_board(&board);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "  | 1 | 2 | 3 | 4 | 5 | 6 |");
    assert_eq!(lines[1], "1 | ■ | O | O | O | O | O |");

    board.set_hidden(true);
    let text = render_board(&board);
    assert_eq!(text.lines().nth(1), Some("1 | O | O | O | O | O | O |"));

    board.resolve_shot(Coordinate::new(0, 0)).unwrap();
    let text = render_board(&board);
    assert_eq!(text.lines().nth(1), Some("1 | X | T | O | O | O | O |"));
    assert_eq!(text.lines().nth(2), Some("2 | T | T | O | O | O | O |"));
}

#[test]
fn test_render_wide_board_aligns_labels() {
    let board = Board::new(10);
    let text = render_board(&board);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("   |  1 |"));
    assert!(lines[0].ends_with(" 10 |"));
    assert!(lines[10].starts_with("10 |  O |"));
}
