use artgrid::{Doc, Error, Grid};
use rstest::rstest;

// a table drawing the letter 'F', in the published Google Docs format
const LETTER_F: &str = "<table>
    <tr><td>x-coordinate</td><td>Character</td><td>y-coordinate</td></tr>
    <tr><td>0</td><td>█</td><td>0</td></tr>
    <tr><td>0</td><td>█</td><td>1</td></tr>
    <tr><td>0</td><td>█</td><td>2</td></tr>
    <tr><td>1</td><td>▀</td><td>1</td></tr>
    <tr><td>1</td><td>▀</td><td>2</td></tr>
    <tr><td>2</td><td>▀</td><td>1</td></tr>
    <tr><td>2</td><td>▀</td><td>2</td></tr>
    <tr><td>3</td><td>▀</td><td>2</td></tr>
</table>";

#[test]
fn decode_letter_f() {
    let mut doc = Doc::new(LETTER_F.as_bytes());
    assert_eq!(doc.decode().unwrap(), "█▀▀▀\n█▀▀ \n█   ");
}

#[test]
fn table_rows_exclude_header() {
    let mut doc = Doc::new(LETTER_F.as_bytes());
    let rows = doc.table_rows().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], vec!["0", "█", "0"]);
    assert_eq!(rows[7], vec!["3", "▀", "2"]);
}

#[test]
fn nested_markup_and_entities() {
    // published docs wrap every cell text in <p><span> elements
    let html = "<html><body><p>intro</p><table>
        <tr><td><p><span>x</span></p></td><td>char</td><td>y</td></tr>
        <tr><td><p><span>0</span></p></td><td><p><span>&#9600;</span></p></td><td><p><span>0</span></p></td></tr>
    </table></body></html>";
    let mut doc = Doc::new(html.as_bytes());
    assert_eq!(doc.decode().unwrap(), "▀");
}

#[test]
fn no_table_in_document() {
    let mut doc = Doc::new("<html><body><p>nothing here</p></body></html>".as_bytes());
    assert!(matches!(doc.decode(), Err(Error::TableNotFound)));
}

#[test]
fn truncated_table() {
    let mut doc = Doc::new("<table><tr><td>0</td>".as_bytes());
    assert!(matches!(doc.decode(), Err(Error::XmlEof(_))));
}

#[test]
fn header_only_table_renders_blank() {
    let mut doc = Doc::new("<table><tr><td>x</td><td>char</td><td>y</td></tr></table>".as_bytes());
    assert_eq!(doc.decode().unwrap(), " ");
}

#[test]
fn bounds_follow_accepted_rows() {
    let grid = Grid::from_rows([["3", "▀", "2"], ["0", "█", "0"], ["1", "▀", "1"]]).unwrap();
    assert_eq!(grid.max_x(), 3);
    assert_eq!(grid.max_y(), 2);
    assert_eq!(grid.get_size(), (3, 4));
    assert!(!grid.is_empty());
}

#[test]
fn rows_in_any_order() {
    let ordered = Grid::from_rows([["0", "█", "0"], ["1", "▀", "1"], ["2", "▀", "2"]]).unwrap();
    let shuffled = Grid::from_rows([["2", "▀", "2"], ["0", "█", "0"], ["1", "▀", "1"]]).unwrap();
    assert_eq!(ordered, shuffled);
    assert_eq!(ordered.render(), shuffled.render());
}

#[test]
fn later_row_wins_on_duplicate_coordinate() {
    let grid = Grid::from_rows([["0", "A", "0"], ["1", "C", "0"], ["0", "B", "0"]]).unwrap();
    assert_eq!(grid.get(0, 0), Some('B'));
    assert_eq!(grid.render(), "BC");
}

#[test]
fn empty_rows_render_single_space() {
    let grid = Grid::from_rows(Vec::<Vec<String>>::new()).unwrap();
    assert!(grid.is_empty());
    assert_eq!(grid.max_x(), 0);
    assert_eq!(grid.max_y(), 0);
    assert_eq!(grid.render(), " ");
}

#[test]
fn blank_cells_render_as_spaces() {
    let grid = Grid::from_rows([["2", "█", "1"]]).unwrap();
    assert_eq!(grid.get(0, 0), None);
    assert_eq!(grid.get(2, 1), Some('█'));
    // every line is max_x + 1 columns wide, trailing spaces kept
    assert_eq!(grid.render(), "  █\n   ");
}

#[test]
fn render_is_idempotent() {
    let grid = Grid::from_rows([["0", "█", "0"], ["3", "▀", "2"]]).unwrap();
    assert_eq!(grid.render(), grid.render());
    assert_eq!(grid.to_string(), grid.render());
}

#[test]
fn render_has_max_y_plus_one_lines() {
    let grid = Grid::from_rows([["1", "█", "4"]]).unwrap();
    let rendered = grid.render();
    assert_eq!(rendered.lines().count(), 5);
    assert!(rendered.lines().all(|l| l.chars().count() == 2));
}

#[test]
fn missing_columns_abort_build() {
    let err = Grid::from_rows([vec!["0", "█"]]).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingColumns {
            expected: 3,
            found: 2
        }
    ));

    let err = Grid::from_rows([vec!["0", "█", "0", "extra"]]).unwrap_err();
    assert!(matches!(err, Error::MissingColumns { found: 4, .. }));
}

#[rstest]
#[case::text("not a number")]
#[case::empty("")]
#[case::float("1.5")]
#[case::overflow("5000000000")]
fn invalid_x_coordinate_aborts_build(#[case] x: &str) {
    let err = Grid::from_rows([[x, "█", "0"]]).unwrap_err();
    assert!(matches!(err, Error::InvalidCoordinate { axis: "x", .. }));
}

#[rstest]
#[case::text("abc")]
#[case::trailing_garbage("2x")]
fn invalid_y_coordinate_aborts_build(#[case] y: &str) {
    let err = Grid::from_rows([["0", "█", y]]).unwrap_err();
    assert!(matches!(err, Error::InvalidCoordinate { axis: "y", .. }));
}

#[test]
fn negative_coordinate_rejected() {
    let err = Grid::from_rows([["0", "█", "-1"]]).unwrap_err();
    assert!(matches!(
        err,
        Error::NegativeCoordinate { axis: "y", val: -1 }
    ));
}

#[rstest]
#[case::empty("")]
#[case::two_chars("██")]
#[case::word("block")]
fn invalid_character_cell_aborts_build(#[case] c: &str) {
    let err = Grid::from_rows([["0", c, "0"]]).unwrap_err();
    assert!(matches!(err, Error::InvalidCharacter(_)));
}

#[test]
fn fields_are_trimmed() {
    let grid = Grid::from_rows([[" 3 ", " █ ", " 2\t"]]).unwrap();
    assert_eq!(grid.get(3, 2), Some('█'));
}

#[test]
fn cells_iterate_in_coordinate_order() {
    let grid = Grid::from_rows([["1", "▀", "0"], ["0", "█", "2"], ["0", "█", "1"]]).unwrap();
    assert_eq!(
        grid.cells().collect::<Vec<_>>(),
        vec![(0, 1, '█'), (0, 2, '█'), (1, 0, '▀')]
    );
}

#[test]
fn grid_serializes_to_json() {
    let grid = Grid::from_rows([["1", "▀", "0"], ["0", "█", "2"]]).unwrap();
    let json = serde_json::to_value(&grid).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "max_x": 1,
            "max_y": 2,
            "cells": [[0, 2, "█"], [1, 0, "▀"]],
        })
    );
}
